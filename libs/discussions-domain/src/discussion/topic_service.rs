//! Topic service - Business logic orchestration for discussion threads
//!
//! The write path enforces the referential-integrity guard: a topic that is
//! still referenced by comments cannot be updated or deleted. The guard runs
//! a fresh count query against the comment repository on every attempt; it is
//! a pre-check, not atomic with the subsequent write (see the crate docs for
//! the accepted check-then-act window).

use crate::discussion::entity::{Topic, TopicDraft, UpdateTopic};
use crate::discussion::error::{DiscussionError, Result};
use crate::discussion::ids::TopicId;
use crate::discussion::ports::{CommentRepository, TopicRepository};

/// Service for topic operations
///
/// Owns the topic aggregate's write path and consults the comment repository
/// read-only to check referential state.
///
/// ## Static Dispatch
///
/// The service is generic over the repository implementations. The compiler
/// generates specialized versions for each concrete type, resulting in
/// zero-cost abstractions.
pub struct TopicService<T, C> {
    topics: T,
    comments: C,
}

impl<T, C> TopicService<T, C>
where
    T: TopicRepository,
    C: CommentRepository,
{
    /// Create a new TopicService with the given repositories
    pub fn new(topics: T, comments: C) -> Self {
        Self { topics, comments }
    }

    /// List topics in insertion order
    ///
    /// An empty collection yields an empty page; there are no error
    /// conditions beyond store failure.
    pub async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Topic>> {
        self.topics.find(skip, limit).await
    }

    /// Search topics by full-text relevance against title and content
    ///
    /// Results are ranked by descending relevance score, paginated after
    /// ranking. A blank term falls back to [`TopicService::list`]: natural
    /// order, no ranking applied.
    pub async fn search(&self, term: &str, skip: usize, limit: usize) -> Result<Vec<Topic>> {
        if term.trim().is_empty() {
            return self.topics.find(skip, limit).await;
        }
        self.topics.search(term, skip, limit).await
    }

    /// Get a topic by id
    ///
    /// Absence is represented as `None`, not an error.
    pub async fn get(&self, topic_id: &TopicId) -> Result<Option<Topic>> {
        self.topics.get(topic_id).await
    }

    /// Create a new topic from client-supplied fields
    ///
    /// Assigns a fresh identifier and creation timestamp, persists the topic
    /// and returns it re-read from the store. No validation against duplicate
    /// titles.
    pub async fn create(&self, draft: TopicDraft) -> Result<Topic> {
        let topic = Topic::new(draft);
        let topic_id = self.topics.insert(&topic).await?;

        self.topics.get(&topic_id).await?.ok_or_else(|| {
            DiscussionError::store_failure(format!("topic {} vanished after insert", topic_id))
        })
    }

    /// Update a topic with the `Some` fields of a partial update
    ///
    /// An all-`None` update is a no-op that performs no write and returns the
    /// current topic. Otherwise the topic-locked guard runs first: if any
    /// comment still references the topic the update fails with
    /// [`DiscussionError::TopicLocked`] carrying the blocking count. On a real
    /// write the `updated` timestamp is stamped.
    ///
    /// Returns `None` if the topic does not exist.
    pub async fn update(&self, topic_id: &TopicId, fields: UpdateTopic) -> Result<Option<Topic>> {
        if fields.is_empty() {
            return self.topics.get(topic_id).await;
        }

        self.ensure_not_referenced(topic_id).await?;

        self.topics.update(topic_id, &fields.stamped()).await?;
        self.topics.get(topic_id).await
    }

    /// Delete a topic
    ///
    /// Fails with [`DiscussionError::TopicLocked`] under the same condition
    /// as update. Returns whether a document was actually removed; `false`
    /// means the caller should surface "not found".
    pub async fn delete(&self, topic_id: &TopicId) -> Result<bool> {
        self.ensure_not_referenced(topic_id).await?;

        let deleted = self.topics.delete(topic_id).await?;
        Ok(deleted > 0)
    }

    /// The referential-integrity guard
    ///
    /// Fresh count query on every call; never cached.
    async fn ensure_not_referenced(&self, topic_id: &TopicId) -> Result<()> {
        let comments = self.comments.count_by_topic(topic_id).await?;
        if comments > 0 {
            return Err(DiscussionError::topic_locked(*topic_id, comments));
        }
        Ok(())
    }
}
