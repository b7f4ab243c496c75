//! Comment repository over the document store
//!
//! Typed accessor for comment documents. Every filter carries both the
//! `type` discriminator and the owning topic id, so a comment can never be
//! read or written outside its topic scope.

use serde_json::{json, Value};
use tracing::{debug, error, instrument};

use discussions_domain::{
    Comment, CommentId, CommentRepository, DiscussionError, Result, TopicId, UpdateComment,
};

use crate::infrastructure::memory::{Document, MemoryStore};
use crate::infrastructure::COLLECTION_NAME;

const DISCUSSION_TYPE: &str = "comment";

/// In-memory implementation of the [`CommentRepository`] port
#[derive(Clone)]
pub struct MemoryCommentRepository {
    store: MemoryStore,
}

impl MemoryCommentRepository {
    /// Create a repository over the given store
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    fn topic_filter(topic_id: &TopicId) -> Document {
        let mut filter = Document::new();
        filter.insert("type".to_string(), json!(DISCUSSION_TYPE));
        filter.insert("topic".to_string(), json!(topic_id));
        filter
    }

    fn id_filter(topic_id: &TopicId, comment_id: &CommentId) -> Document {
        let mut filter = Self::topic_filter(topic_id);
        filter.insert("_id".to_string(), json!(comment_id));
        filter
    }

    fn encode(comment: &Comment) -> Result<Document> {
        match serde_json::to_value(comment) {
            Ok(Value::Object(mut doc)) => {
                doc.insert("type".to_string(), json!(DISCUSSION_TYPE));
                Ok(doc)
            }
            Ok(_) => Err(DiscussionError::store_failure(
                "comment did not serialize to a document",
            )),
            Err(err) => Err(DiscussionError::store_failure(format!(
                "failed to encode comment: {}",
                err
            ))),
        }
    }

    fn decode(doc: Document) -> Result<Comment> {
        serde_json::from_value(Value::Object(doc)).map_err(|err| {
            error!(error = %err, "Malformed comment document in store");
            DiscussionError::store_failure(format!("malformed comment document: {}", err))
        })
    }

    fn set_fields(fields: &UpdateComment) -> Result<Document> {
        match serde_json::to_value(fields) {
            Ok(Value::Object(doc)) => Ok(doc),
            _ => Err(DiscussionError::store_failure(
                "failed to encode comment update",
            )),
        }
    }
}

impl CommentRepository for MemoryCommentRepository {
    #[instrument(skip(self), fields(topic_id = %topic_id))]
    fn find_by_topic(
        &self,
        topic_id: &TopicId,
        skip: usize,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<Comment>>> + Send {
        let store = self.store.clone();
        let filter = Self::topic_filter(topic_id);

        async move {
            let docs = store.find(COLLECTION_NAME, &filter, skip, limit).await;
            debug!(count = docs.len(), "Found comments");

            docs.into_iter().map(Self::decode).collect()
        }
    }

    #[instrument(skip(self), fields(topic_id = %topic_id))]
    fn count_by_topic(
        &self,
        topic_id: &TopicId,
    ) -> impl std::future::Future<Output = Result<u64>> + Send {
        let store = self.store.clone();
        let filter = Self::topic_filter(topic_id);

        async move {
            let count = store.count(COLLECTION_NAME, &filter).await;
            debug!(count, "Counted comments");
            Ok(count)
        }
    }

    #[instrument(skip(self), fields(topic_id = %topic_id, comment_id = %comment_id))]
    fn get(
        &self,
        topic_id: &TopicId,
        comment_id: &CommentId,
    ) -> impl std::future::Future<Output = Result<Option<Comment>>> + Send {
        let store = self.store.clone();
        let filter = Self::id_filter(topic_id, comment_id);

        async move {
            store
                .find_one(COLLECTION_NAME, &filter)
                .await
                .map(Self::decode)
                .transpose()
        }
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id()))]
    fn insert(
        &self,
        comment: &Comment,
    ) -> impl std::future::Future<Output = Result<CommentId>> + Send {
        let store = self.store.clone();
        let comment_id = *comment.id();
        let doc = Self::encode(comment);

        async move {
            store.insert_one(COLLECTION_NAME, doc?).await;
            debug!(comment_id = %comment_id, "Inserted comment");
            Ok(comment_id)
        }
    }

    #[instrument(skip(self, update), fields(topic_id = %topic_id, comment_id = %comment_id))]
    fn update(
        &self,
        topic_id: &TopicId,
        comment_id: &CommentId,
        update: &UpdateComment,
    ) -> impl std::future::Future<Output = Result<u64>> + Send {
        let store = self.store.clone();
        let filter = Self::id_filter(topic_id, comment_id);
        let set = Self::set_fields(update);

        async move {
            let modified = store.update_one(COLLECTION_NAME, &filter, &set?).await;
            debug!(modified, "Updated comment");
            Ok(modified)
        }
    }

    #[instrument(skip(self), fields(topic_id = %topic_id, comment_id = %comment_id))]
    fn delete(
        &self,
        topic_id: &TopicId,
        comment_id: &CommentId,
    ) -> impl std::future::Future<Output = Result<u64>> + Send {
        let store = self.store.clone();
        let filter = Self::id_filter(topic_id, comment_id);

        async move {
            let deleted = store.delete_one(COLLECTION_NAME, &filter).await;
            debug!(deleted, "Deleted comment");
            Ok(deleted)
        }
    }
}
