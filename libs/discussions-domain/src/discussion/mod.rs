//! Discussion domain module
//!
//! This module contains the core business logic and entities for threaded
//! discussions: topics and the comments that reference them. The two services
//! defined here are the only place with branching business rules; repositories
//! and the HTTP layer are mechanical translations.

mod comment_service;
mod entity;
mod error;
mod ids;
mod topic_service;

#[cfg(test)]
pub(crate) mod test_support;

pub mod ports;

pub use entity::{Comment, CommentDraft, Topic, TopicDraft, UpdateComment, UpdateTopic};
pub use error::{DiscussionError, Result};
pub use ids::{CommentId, TopicId};
pub use ports::{CommentRepository, TopicRepository};

pub use comment_service::CommentService;
pub use topic_service::TopicService;
