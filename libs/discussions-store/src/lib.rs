//! # Discussions Store Adapter
//!
//! Infrastructure layer for the threaded discussions API. Provides an
//! in-process async document store ([`infrastructure::MemoryStore`]) and the
//! typed repository implementations of the domain ports
//! ([`infrastructure::MemoryTopicRepository`],
//! [`infrastructure::MemoryCommentRepository`]).
//!
//! Topics and comments share one logical collection; each document carries a
//! `type` discriminator stamped and filtered by the repositories.

pub mod infrastructure;

pub use infrastructure::{Document, MemoryCommentRepository, MemoryStore, MemoryTopicRepository};
