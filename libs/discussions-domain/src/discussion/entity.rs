//! Domain entities for threaded discussions
//!
//! This module defines the core domain models: a [`Topic`] is the root of a
//! discussion thread and a [`Comment`] is a reply within a topic, optionally
//! itself replying to another comment in the same topic.
//!
//! The serde representation of the entities matches the persisted document
//! shape (`_id`, `topic`, `reply` keys); the `type` discriminator is stamped
//! by the repository layer, not carried on the entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::discussion::ids::{CommentId, TopicId};

/// A discussion thread
///
/// Topics are the root entity comments attach to. A topic with at least one
/// comment referencing it is considered locked: it cannot be updated or
/// deleted until those comments are removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique identifier, stored as the document key
    #[serde(rename = "_id")]
    id: TopicId,

    /// Thread title, part of the text-search index
    title: String,

    /// Thread body, part of the text-search index
    content: String,

    /// Author name
    username: String,

    /// Timestamp assigned when the topic was created
    created: DateTime<Utc>,

    /// Timestamp of the last applied update, absent until the first write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated: Option<DateTime<Utc>>,
}

impl Topic {
    /// Create a new Topic from client-supplied fields
    ///
    /// Assigns a fresh identifier and creation timestamp. This is a pure
    /// domain constructor - it doesn't perform any I/O.
    pub fn new(draft: TopicDraft) -> Self {
        Self {
            id: TopicId::new(),
            title: draft.title,
            content: draft.content,
            username: draft.username,
            created: Utc::now(),
            updated: None,
        }
    }

    /// Create a Topic with explicit values (used for reconstruction)
    pub fn from_parts(
        id: TopicId,
        title: String,
        content: String,
        username: String,
        created: DateTime<Utc>,
        updated: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            username,
            created,
            updated,
        }
    }

    /// Get the topic's unique identifier
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    /// Get the topic title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the topic body content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the author name
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the creation timestamp
    pub fn created(&self) -> &DateTime<Utc> {
        &self.created
    }

    /// Get the last-updated timestamp (if any write happened)
    pub fn updated(&self) -> Option<&DateTime<Utc>> {
        self.updated.as_ref()
    }

    /// Apply the `Some` fields of a partial update in place
    ///
    /// Absent fields leave the current value untouched.
    pub fn apply(&mut self, fields: &UpdateTopic) {
        if let Some(title) = &fields.title {
            self.title = title.clone();
        }
        if let Some(content) = &fields.content {
            self.content = content.clone();
        }
        if let Some(updated) = fields.updated {
            self.updated = Some(updated);
        }
    }
}

/// Client-supplied fields for creating a Topic
///
/// Identifier and creation timestamp are server-assigned, so they are not
/// part of the draft.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicDraft {
    pub title: String,
    pub content: String,
    pub username: String,
}

/// Partial update for a Topic
///
/// Only `Some` fields are applied. The `updated` timestamp is stamped by the
/// service when at least one field is present; an all-`None` update is a
/// no-op that performs no write.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTopic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl UpdateTopic {
    /// Whether the update carries no client-supplied fields
    ///
    /// The `updated` timestamp does not count: it is server-stamped and only
    /// meaningful when something is actually written.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Return a copy of this update with the `updated` timestamp set to now
    pub fn stamped(mut self) -> Self {
        self.updated = Some(Utc::now());
        self
    }
}

/// A reply within a topic
///
/// Comments always belong to exactly one topic and may optionally reply to
/// another comment in the same topic, forming a reply tree (no cycle
/// detection, no depth limit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier, stored as the document key
    #[serde(rename = "_id")]
    id: CommentId,

    /// Identifier of the owning topic
    #[serde(rename = "topic")]
    topic_id: TopicId,

    /// Comment body
    content: String,

    /// Author name
    username: String,

    /// Timestamp assigned when the comment was created
    created: DateTime<Utc>,

    /// Timestamp of the last applied update, absent until the first write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated: Option<DateTime<Utc>>,

    /// Identifier of the comment this one replies to, if any
    #[serde(rename = "reply", default, skip_serializing_if = "Option::is_none")]
    reply_comment: Option<CommentId>,
}

impl Comment {
    /// Create a new Comment under the given topic
    ///
    /// The topic reference is stamped here; a fresh identifier and creation
    /// timestamp are assigned. Reply-target validation is the responsibility
    /// of the comment service, not the constructor.
    pub fn new(topic_id: TopicId, draft: CommentDraft) -> Self {
        Self {
            id: CommentId::new(),
            topic_id,
            content: draft.content,
            username: draft.username,
            created: Utc::now(),
            updated: None,
            reply_comment: draft.reply_comment,
        }
    }

    /// Create a Comment with explicit values (used for reconstruction)
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: CommentId,
        topic_id: TopicId,
        content: String,
        username: String,
        created: DateTime<Utc>,
        updated: Option<DateTime<Utc>>,
        reply_comment: Option<CommentId>,
    ) -> Self {
        Self {
            id,
            topic_id,
            content,
            username,
            created,
            updated,
            reply_comment,
        }
    }

    /// Get the comment's unique identifier
    pub fn id(&self) -> &CommentId {
        &self.id
    }

    /// Get the identifier of the owning topic
    pub fn topic_id(&self) -> &TopicId {
        &self.topic_id
    }

    /// Get the comment body
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the author name
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the creation timestamp
    pub fn created(&self) -> &DateTime<Utc> {
        &self.created
    }

    /// Get the last-updated timestamp (if any write happened)
    pub fn updated(&self) -> Option<&DateTime<Utc>> {
        self.updated.as_ref()
    }

    /// Get the reply target (if this comment replies to another one)
    pub fn reply_comment(&self) -> Option<&CommentId> {
        self.reply_comment.as_ref()
    }

    /// Apply the `Some` fields of a partial update in place
    pub fn apply(&mut self, fields: &UpdateComment) {
        if let Some(content) = &fields.content {
            self.content = content.clone();
        }
        if let Some(updated) = fields.updated {
            self.updated = Some(updated);
        }
    }
}

/// Client-supplied fields for creating a Comment
///
/// The owning topic comes from the request path, so it is stamped by the
/// service rather than carried in the draft.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentDraft {
    pub content: String,
    pub username: String,
    pub reply_comment: Option<CommentId>,
}

/// Partial update for a Comment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateComment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl UpdateComment {
    /// Whether the update carries no client-supplied fields
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Return a copy of this update with the `updated` timestamp set to now
    pub fn stamped(mut self) -> Self {
        self.updated = Some(Utc::now());
        self
    }
}
