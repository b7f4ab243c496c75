//! Infrastructure implementations of the domain ports

mod comment_repository;
mod memory;
mod topic_repository;

pub use comment_repository::MemoryCommentRepository;
pub use memory::{Document, MemoryStore};
pub use topic_repository::MemoryTopicRepository;

/// Name of the shared logical collection holding topics and comments
pub(crate) const COLLECTION_NAME: &str = "discussions";
