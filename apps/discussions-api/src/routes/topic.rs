//! Topic routes

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers::topic, AppState};

/// Create topic routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/topics", post(topic::create_topic).get(topic::list_topics))
        .route("/topics/search", get(topic::search_topics))
        .route(
            "/topics/:topic_id",
            put(topic::update_topic)
                .get(topic::get_topic)
                .delete(topic::delete_topic),
        )
}
