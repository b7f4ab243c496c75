//! Topic repository over the document store
//!
//! Typed accessor for topic documents: stamps the `type` discriminator on
//! writes, filters by it on reads, and converts between the domain entity and
//! the stored document shape.

use serde_json::{json, Value};
use tracing::{debug, error, instrument};

use discussions_domain::{
    DiscussionError, Result, Topic, TopicId, TopicRepository, UpdateTopic,
};

use crate::infrastructure::memory::{Document, MemoryStore};
use crate::infrastructure::COLLECTION_NAME;

const DISCUSSION_TYPE: &str = "topic";

/// In-memory implementation of the [`TopicRepository`] port
#[derive(Clone)]
pub struct MemoryTopicRepository {
    store: MemoryStore,
}

impl MemoryTopicRepository {
    /// Create a repository over the given store
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    fn type_filter() -> Document {
        let mut filter = Document::new();
        filter.insert("type".to_string(), json!(DISCUSSION_TYPE));
        filter
    }

    fn id_filter(topic_id: &TopicId) -> Document {
        let mut filter = Self::type_filter();
        filter.insert("_id".to_string(), json!(topic_id));
        filter
    }

    fn encode(topic: &Topic) -> Result<Document> {
        match serde_json::to_value(topic) {
            Ok(Value::Object(mut doc)) => {
                doc.insert("type".to_string(), json!(DISCUSSION_TYPE));
                Ok(doc)
            }
            Ok(_) => Err(DiscussionError::store_failure(
                "topic did not serialize to a document",
            )),
            Err(err) => Err(DiscussionError::store_failure(format!(
                "failed to encode topic: {}",
                err
            ))),
        }
    }

    fn decode(doc: Document) -> Result<Topic> {
        serde_json::from_value(Value::Object(doc)).map_err(|err| {
            error!(error = %err, "Malformed topic document in store");
            DiscussionError::store_failure(format!("malformed topic document: {}", err))
        })
    }

    fn set_fields(fields: &UpdateTopic) -> Result<Document> {
        match serde_json::to_value(fields) {
            Ok(Value::Object(doc)) => Ok(doc),
            _ => Err(DiscussionError::store_failure(
                "failed to encode topic update",
            )),
        }
    }
}

impl TopicRepository for MemoryTopicRepository {
    #[instrument(skip(self))]
    fn find(
        &self,
        skip: usize,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<Topic>>> + Send {
        let store = self.store.clone();

        async move {
            let docs = store
                .find(COLLECTION_NAME, &Self::type_filter(), skip, limit)
                .await;
            debug!(count = docs.len(), "Found topics");

            docs.into_iter().map(Self::decode).collect()
        }
    }

    #[instrument(skip(self))]
    fn search(
        &self,
        term: &str,
        skip: usize,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<Topic>>> + Send {
        let store = self.store.clone();
        let term = term.to_string();

        async move {
            let docs = store
                .search(COLLECTION_NAME, &Self::type_filter(), &term, skip, limit)
                .await;
            debug!(term = %term, count = docs.len(), "Searched topics");

            docs.into_iter().map(Self::decode).collect()
        }
    }

    #[instrument(skip(self), fields(topic_id = %topic_id))]
    fn get(&self, topic_id: &TopicId) -> impl std::future::Future<Output = Result<Option<Topic>>> + Send {
        let store = self.store.clone();
        let filter = Self::id_filter(topic_id);

        async move {
            store
                .find_one(COLLECTION_NAME, &filter)
                .await
                .map(Self::decode)
                .transpose()
        }
    }

    #[instrument(skip(self, topic), fields(topic_id = %topic.id()))]
    fn insert(&self, topic: &Topic) -> impl std::future::Future<Output = Result<TopicId>> + Send {
        let store = self.store.clone();
        let topic_id = *topic.id();
        let doc = Self::encode(topic);

        async move {
            store.insert_one(COLLECTION_NAME, doc?).await;
            debug!(topic_id = %topic_id, "Inserted topic");
            Ok(topic_id)
        }
    }

    #[instrument(skip(self, update), fields(topic_id = %topic_id))]
    fn update(
        &self,
        topic_id: &TopicId,
        update: &UpdateTopic,
    ) -> impl std::future::Future<Output = Result<u64>> + Send {
        let store = self.store.clone();
        let filter = Self::id_filter(topic_id);
        let set = Self::set_fields(update);

        async move {
            let modified = store.update_one(COLLECTION_NAME, &filter, &set?).await;
            debug!(modified, "Updated topic");
            Ok(modified)
        }
    }

    #[instrument(skip(self), fields(topic_id = %topic_id))]
    fn delete(&self, topic_id: &TopicId) -> impl std::future::Future<Output = Result<u64>> + Send {
        let store = self.store.clone();
        let filter = Self::id_filter(topic_id);

        async move {
            let deleted = store.delete_one(COLLECTION_NAME, &filter).await;
            debug!(deleted, "Deleted topic");
            Ok(deleted)
        }
    }
}
