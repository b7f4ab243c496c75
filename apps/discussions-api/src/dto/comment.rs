//! DTOs for comment endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use discussions_domain::{Comment, CommentDraft, UpdateComment};

/// Request body for creating a comment in a topic
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    /// Comment body
    #[schema(example = "Sure! I can help you!")]
    pub content: String,
    /// Author name
    #[schema(example = "Nephew Bob")]
    pub username: String,
    /// Identifier of the comment being replied to, if any
    #[schema(example = "54539bf6-7f01-4002-b850-7ec3e9dee441")]
    pub reply: Option<Uuid>,
}

impl From<CreateCommentRequest> for CommentDraft {
    fn from(req: CreateCommentRequest) -> Self {
        Self {
            content: req.content,
            username: req.username,
            reply_comment: req.reply.map(Into::into),
        }
    }
}

/// Request body for partially updating a comment
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCommentRequest {
    #[schema(example = "Sure! I can help you!")]
    pub content: Option<String>,
}

impl From<UpdateCommentRequest> for UpdateComment {
    fn from(req: UpdateCommentRequest) -> Self {
        Self {
            content: req.content,
            updated: None,
        }
    }
}

/// Response body for a comment
#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    /// Unique identifier of the comment
    #[schema(example = "54539bf6-7f01-4002-b850-7ec3e9dee441")]
    pub id: Uuid,
    /// Identifier of the owning topic
    #[schema(example = "665997b2-c769-48f5-a6b7-cd0a701c8d88")]
    pub topic: Uuid,
    pub content: String,
    pub username: String,
    pub created: DateTime<Utc>,
    /// Present once the comment has been updated at least once
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Identifier of the comment this one replies to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<Uuid>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: *comment.id().as_uuid(),
            topic: *comment.topic_id().as_uuid(),
            content: comment.content().to_string(),
            username: comment.username().to_string(),
            created: *comment.created(),
            updated: comment.updated().copied(),
            reply: comment.reply_comment().map(|id| *id.as_uuid()),
        }
    }
}
