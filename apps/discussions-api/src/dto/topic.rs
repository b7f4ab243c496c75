//! DTOs for topic endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use discussions_domain::{Topic, TopicDraft, UpdateTopic};

/// Request body for creating a topic
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    /// Thread title
    #[schema(example = "Hey!")]
    pub title: String,
    /// Thread body
    #[schema(example = "Can you help me please?")]
    pub content: String,
    /// Author name
    #[schema(example = "John Doe")]
    pub username: String,
}

impl From<CreateTopicRequest> for TopicDraft {
    fn from(req: CreateTopicRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            username: req.username,
        }
    }
}

/// Request body for partially updating a topic
///
/// Absent fields are left untouched; an empty body is a no-op.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTopicRequest {
    #[schema(example = "Hey!")]
    pub title: Option<String>,
    #[schema(example = "Never mind, solved it.")]
    pub content: Option<String>,
}

impl From<UpdateTopicRequest> for UpdateTopic {
    fn from(req: UpdateTopicRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            updated: None,
        }
    }
}

/// Response body for a topic
#[derive(Debug, Serialize, ToSchema)]
pub struct TopicResponse {
    /// Unique identifier of the topic
    #[schema(example = "665997b2-c769-48f5-a6b7-cd0a701c8d88")]
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub username: String,
    pub created: DateTime<Utc>,
    /// Present once the topic has been updated at least once
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        Self {
            id: *topic.id().as_uuid(),
            title: topic.title().to_string(),
            content: topic.content().to_string(),
            username: topic.username().to_string(),
            created: *topic.created(),
            updated: topic.updated().copied(),
        }
    }
}
