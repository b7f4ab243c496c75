//! Port traits for discussion persistence
//!
//! These traits abstract the document store behind typed repository
//! capabilities. The services are generic over them (static dispatch); the
//! store crate provides the concrete implementations.
//!
//! `skip`/`limit` paginate in insertion order. Deleting or updating returns
//! the affected-document count so callers can distinguish "nothing matched"
//! from a successful write without a second read.

use std::future::Future;

use crate::discussion::entity::{Comment, Topic, UpdateComment, UpdateTopic};
use crate::discussion::error::Result;
use crate::discussion::ids::{CommentId, TopicId};

/// Persistence port for topic documents
pub trait TopicRepository: Send + Sync {
    /// Find topics in insertion order
    fn find(&self, skip: usize, limit: usize) -> impl Future<Output = Result<Vec<Topic>>> + Send;

    /// Search topics by text relevance against the indexed title/content
    /// fields, ranked by descending score
    ///
    /// Callers must pass a non-blank term; the empty-term fallback to natural
    /// order lives in the service.
    fn search(
        &self,
        term: &str,
        skip: usize,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Topic>>> + Send;

    /// Get a topic by id, `None` if absent
    fn get(&self, topic_id: &TopicId) -> impl Future<Output = Result<Option<Topic>>> + Send;

    /// Persist a new topic, returning its id
    fn insert(&self, topic: &Topic) -> impl Future<Output = Result<TopicId>> + Send;

    /// Apply the `Some` fields of a partial update, returning the number of
    /// modified documents (0 if the topic does not exist)
    fn update(
        &self,
        topic_id: &TopicId,
        fields: &UpdateTopic,
    ) -> impl Future<Output = Result<u64>> + Send;

    /// Delete a topic, returning the number of deleted documents
    fn delete(&self, topic_id: &TopicId) -> impl Future<Output = Result<u64>> + Send;
}

/// Persistence port for comment documents, always scoped by the owning topic
pub trait CommentRepository: Send + Sync {
    /// Find the comments of a topic in insertion order
    fn find_by_topic(
        &self,
        topic_id: &TopicId,
        skip: usize,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Comment>>> + Send;

    /// Count the comments referencing a topic
    ///
    /// Used by the topic-locked guard; must be a fresh query, never a cached
    /// value.
    fn count_by_topic(&self, topic_id: &TopicId) -> impl Future<Output = Result<u64>> + Send;

    /// Get a comment by id within a topic, `None` if absent
    fn get(
        &self,
        topic_id: &TopicId,
        comment_id: &CommentId,
    ) -> impl Future<Output = Result<Option<Comment>>> + Send;

    /// Persist a new comment, returning its id
    fn insert(&self, comment: &Comment) -> impl Future<Output = Result<CommentId>> + Send;

    /// Apply the `Some` fields of a partial update, returning the number of
    /// modified documents (0 if no such comment exists in the topic)
    fn update(
        &self,
        topic_id: &TopicId,
        comment_id: &CommentId,
        fields: &UpdateComment,
    ) -> impl Future<Output = Result<u64>> + Send;

    /// Delete a comment within a topic, returning the number of deleted
    /// documents
    fn delete(
        &self,
        topic_id: &TopicId,
        comment_id: &CommentId,
    ) -> impl Future<Output = Result<u64>> + Send;
}
