//! Discussions API
//!
//! HTTP service for threaded discussions: topics and the comments that
//! reference them. Repositories and services are constructed once at startup
//! and handed to the request handlers through shared state; no global mutable
//! application state.

mod dto;
mod handlers;
mod routes;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use discussions_domain::{CommentService, TopicService};
use discussions_store::{MemoryCommentRepository, MemoryStore, MemoryTopicRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub topic_service: Arc<TopicService<MemoryTopicRepository, MemoryCommentRepository>>,
    pub comment_service: Arc<CommentService<MemoryTopicRepository, MemoryCommentRepository>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting discussions API service");

    // Load environment variables
    dotenvy::dotenv().ok();

    // Build the document store and the typed repositories over it
    let store = MemoryStore::new();
    let topic_repo = MemoryTopicRepository::new(store.clone());
    let comment_repo = MemoryCommentRepository::new(store);

    // Create shared application state
    let state = AppState {
        topic_service: Arc::new(TopicService::new(topic_repo.clone(), comment_repo.clone())),
        comment_service: Arc::new(CommentService::new(topic_repo, comment_repo)),
    };

    // Build HTTP router
    let app = routes::create_router(state);

    // Get bind address from environment
    let host = std::env::var("DISCUSSIONS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("DISCUSSIONS_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    info!(addr = %addr, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
