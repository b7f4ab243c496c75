//! Domain errors for discussion operations
//!
//! These are business-level failures, independent of the backing store. A
//! missing entity that the client asked for directly is NOT an error here; it
//! is represented as an absent `Option` result and surfaced as 404 by the API
//! layer. The variants below are the recoverable 422-class failures plus the
//! store failure passthrough.

use thiserror::Error;

use crate::discussion::ids::{CommentId, TopicId};

/// Errors that can occur during topic and comment operations
#[derive(Error, Debug)]
pub enum DiscussionError {
    /// The topic still has comments referencing it and cannot be changed
    #[error("can not change topic {topic_id}: it is referenced by {comments} comments")]
    TopicLocked { topic_id: TopicId, comments: u64 },

    /// A comment operation referenced a topic that does not exist
    #[error("topic {0} not found")]
    TopicNotFound(TopicId),

    /// The reply target of a new comment does not exist in the same topic
    #[error("comment {0} does not exist to be replied")]
    CommentNotFoundToBeReplied(CommentId),

    /// The backing document store failed
    #[error("store operation failed: {0}")]
    StoreFailure(String),
}

impl DiscussionError {
    /// Create a topic locked error with the blocking comment count
    pub fn topic_locked(topic_id: TopicId, comments: u64) -> Self {
        Self::TopicLocked { topic_id, comments }
    }

    /// Create a store failure error with a message
    pub fn store_failure(msg: impl Into<String>) -> Self {
        Self::StoreFailure(msg.into())
    }
}

/// Result type alias for discussion operations
pub type Result<T> = std::result::Result<T, DiscussionError>;
