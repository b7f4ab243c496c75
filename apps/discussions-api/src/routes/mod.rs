//! API routes

pub mod comment;
pub mod topic;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::{
        comment::{CommentResponse, CreateCommentRequest, UpdateCommentRequest},
        topic::{CreateTopicRequest, TopicResponse, UpdateTopicRequest},
        ErrorResponse,
    },
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::topic::list_topics,
        handlers::topic::search_topics,
        handlers::topic::get_topic,
        handlers::topic::create_topic,
        handlers::topic::update_topic,
        handlers::topic::delete_topic,
        handlers::comment::list_comments,
        handlers::comment::get_comment,
        handlers::comment::create_comment,
        handlers::comment::update_comment,
        handlers::comment::delete_comment,
        health_handler
    ),
    components(
        schemas(
            CreateTopicRequest,
            UpdateTopicRequest,
            TopicResponse,
            CreateCommentRequest,
            UpdateCommentRequest,
            CommentResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "topics", description = "Discussion thread endpoints"),
        (name = "comments", description = "Comment endpoints, scoped by topic"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Discussions API",
        version = "0.1.0",
        description = "CRUD API for threaded discussions: topics and nested comments",
        contact(
            name = "Discussions Team"
        )
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(topic::routes())
        .merge(comment::routes())
        .route("/health", axum::routing::get(health_handler))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}
