//! # Discussions Domain Layer
//!
//! This crate contains the pure business logic and domain models for the
//! threaded discussions API. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (Topic, Comment)
//! - **Ports**: Trait definitions for external dependencies (TopicRepository, CommentRepository)
//! - **Services**: Business logic orchestration (TopicService, CommentService)
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (database drivers,
//! HTTP, etc.). All external dependencies are expressed as traits (ports) that
//! are implemented by adapter layers.
//!
//! ## Invariants enforced here
//!
//! - A topic cannot be updated or deleted while comments still reference it
//!   ([`DiscussionError::TopicLocked`]).
//! - A comment replying to another comment must reference an existing comment
//!   within the same topic ([`DiscussionError::CommentNotFoundToBeReplied`]).
//! - Every comment operation checks topic existence before comment existence
//!   ([`DiscussionError::TopicNotFound`]).

pub mod discussion;

// Re-export commonly used types
pub use discussion::{
    Comment, CommentDraft, CommentId, CommentRepository, CommentService, DiscussionError, Result,
    Topic, TopicDraft, TopicId, TopicRepository, TopicService, UpdateComment, UpdateTopic,
};
