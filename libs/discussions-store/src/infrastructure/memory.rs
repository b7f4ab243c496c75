//! In-process async document store
//!
//! A small driver-shaped store: documents are `serde_json` maps living in
//! named collections, addressed by equality filters the way a MongoDB driver
//! would be. Every operation takes the collection lock through an await
//! point, so callers suspend at each store call just as they would against a
//! networked database.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A stored document: a JSON object keyed by field name
pub type Document = serde_json::Map<String, Value>;

/// Async in-memory document store
///
/// Cloning is cheap and shares the underlying collections; hand one clone to
/// each repository.
///
/// ## Text search
///
/// `search` ranks documents by a term-frequency relevance score over the
/// configured text-index fields, descending, with insertion order as the
/// tie-break. Pagination applies after ranking.
#[derive(Clone)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
    text_fields: Arc<Vec<String>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a store with a text index over `title` and `content`
    pub fn new() -> Self {
        Self::with_text_index(["title", "content"])
    }

    /// Create a store with a text index over the given fields
    pub fn with_text_index<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            collections: Arc::new(RwLock::new(HashMap::new())),
            text_fields: Arc::new(fields.into_iter().map(Into::into).collect()),
        }
    }

    /// Find documents matching the filter, in insertion order
    pub async fn find(
        &self,
        collection: &str,
        filter: &Document,
        skip: usize,
        limit: usize,
    ) -> Vec<Document> {
        let collections = self.collections.read().await;

        collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| matches(doc, filter))
                    .skip(skip)
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Find the first document matching the filter
    pub async fn find_one(&self, collection: &str, filter: &Document) -> Option<Document> {
        let collections = self.collections.read().await;

        collections
            .get(collection)?
            .iter()
            .find(|doc| matches(doc, filter))
            .cloned()
    }

    /// Count documents matching the filter
    pub async fn count(&self, collection: &str, filter: &Document) -> u64 {
        let collections = self.collections.read().await;

        collections
            .get(collection)
            .map(|docs| docs.iter().filter(|doc| matches(doc, filter)).count() as u64)
            .unwrap_or(0)
    }

    /// Insert a document, returning its `_id`
    ///
    /// An identifier is generated when the document does not carry one.
    pub async fn insert_one(&self, collection: &str, mut doc: Document) -> String {
        let id = match doc.get("_id").and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => {
                let id = Uuid::new_v4().to_string();
                doc.insert("_id".to_string(), Value::String(id.clone()));
                id
            }
        };

        let mut collections = self.collections.write().await;
        collections.entry(collection.to_string()).or_default().push(doc);
        id
    }

    /// Merge the given fields into the first document matching the filter
    ///
    /// Returns the number of modified documents (0 or 1).
    pub async fn update_one(&self, collection: &str, filter: &Document, set: &Document) -> u64 {
        let mut collections = self.collections.write().await;

        let Some(docs) = collections.get_mut(collection) else {
            return 0;
        };
        match docs.iter_mut().find(|doc| matches(doc, filter)) {
            Some(doc) => {
                for (key, value) in set {
                    doc.insert(key.clone(), value.clone());
                }
                1
            }
            None => 0,
        }
    }

    /// Delete the first document matching the filter
    ///
    /// Returns the number of deleted documents (0 or 1).
    pub async fn delete_one(&self, collection: &str, filter: &Document) -> u64 {
        let mut collections = self.collections.write().await;

        let Some(docs) = collections.get_mut(collection) else {
            return 0;
        };
        match docs.iter().position(|doc| matches(doc, filter)) {
            Some(index) => {
                docs.remove(index);
                1
            }
            None => 0,
        }
    }

    /// Find documents matching the filter, ranked by text relevance
    ///
    /// A blank term degrades to a plain `find`: natural order, no ranking.
    /// Only documents with a positive score match; ties keep insertion order.
    pub async fn search(
        &self,
        collection: &str,
        filter: &Document,
        term: &str,
        skip: usize,
        limit: usize,
    ) -> Vec<Document> {
        if term.trim().is_empty() {
            return self.find(collection, filter, skip, limit).await;
        }

        let tokens: Vec<String> = term
            .split_whitespace()
            .map(|token| token.to_lowercase())
            .collect();

        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Vec::new();
        };

        let mut scored: Vec<(usize, &Document)> = docs
            .iter()
            .filter(|doc| matches(doc, filter))
            .filter_map(|doc| {
                let score = self.score(doc, &tokens);
                (score > 0).then_some((score, doc))
            })
            .collect();
        // Stable sort keeps insertion order as the tie-break
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored
            .into_iter()
            .map(|(_, doc)| doc.clone())
            .skip(skip)
            .take(limit)
            .collect()
    }

    /// Term-frequency score of a document over the text-index fields
    fn score(&self, doc: &Document, tokens: &[String]) -> usize {
        self.text_fields
            .iter()
            .filter_map(|field| doc.get(field).and_then(Value::as_str))
            .map(|text| {
                text.split_whitespace()
                    .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
                    .filter(|word| tokens.contains(word))
                    .count()
            })
            .sum()
    }
}

/// Equality match of every filter field against the document
fn matches(doc: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| doc.get(key) == Some(value))
}
