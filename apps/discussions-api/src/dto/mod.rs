//! Request/response DTOs

pub mod comment;
pub mod topic;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "topic 665997b2-c769-48f5-a6b7-cd0a701c8d88 not found")]
    pub error: String,
}

fn default_limit() -> usize {
    10
}

/// Pagination query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct Pagination {
    /// Number of entries to skip
    #[serde(default)]
    pub skip: usize,
    /// Maximum number of entries to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Search query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Full-text search term; blank falls back to a plain listing
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}
