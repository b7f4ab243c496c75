//! Comment routes

use axum::{
    routing::{post, put},
    Router,
};

use crate::{handlers::comment, AppState};

/// Create comment routes, nested under their topic
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/topics/:topic_id/comments",
            post(comment::create_comment).get(comment::list_comments),
        )
        .route(
            "/topics/:topic_id/comments/:comment_id",
            put(comment::update_comment)
                .get(comment::get_comment)
                .delete(comment::delete_comment),
        )
}
