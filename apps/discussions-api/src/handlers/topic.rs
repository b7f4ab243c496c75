//! Topic handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;
use uuid::Uuid;

use discussions_domain::TopicId;

use crate::{
    dto::{
        topic::{CreateTopicRequest, TopicResponse, UpdateTopicRequest},
        ErrorResponse, Pagination, SearchQuery,
    },
    handlers::{error_response, not_found},
    AppState,
};

/// List topics
#[utoipa::path(
    get,
    path = "/topics",
    params(Pagination),
    responses(
        (status = 200, description = "Page of topics in insertion order", body = [TopicResponse]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "topics"
)]
pub async fn list_topics(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> impl IntoResponse {
    match state.topic_service.list(page.skip, page.limit).await {
        Ok(topics) => Json(
            topics
                .into_iter()
                .map(TopicResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => error_response(err),
    }
}

/// Search topics by text relevance
#[utoipa::path(
    get,
    path = "/topics/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Topics ranked by descending relevance", body = [TopicResponse]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "topics"
)]
pub async fn search_topics(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    match state
        .topic_service
        .search(&query.term, query.skip, query.limit)
        .await
    {
        Ok(topics) => Json(
            topics
                .into_iter()
                .map(TopicResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => error_response(err),
    }
}

/// Get a single topic
#[utoipa::path(
    get,
    path = "/topics/{topic_id}",
    params(("topic_id" = Uuid, Path, description = "Topic identifier")),
    responses(
        (status = 200, description = "The topic", body = TopicResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    ),
    tag = "topics"
)]
pub async fn get_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<Uuid>,
) -> impl IntoResponse {
    let topic_id = TopicId::from(topic_id);

    match state.topic_service.get(&topic_id).await {
        Ok(Some(topic)) => Json(TopicResponse::from(topic)).into_response(),
        Ok(None) => not_found(format!("topic {} not found", topic_id)),
        Err(err) => error_response(err),
    }
}

/// Create a new topic
#[utoipa::path(
    post,
    path = "/topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created", body = TopicResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "topics"
)]
pub async fn create_topic(
    State(state): State<AppState>,
    Json(payload): Json<CreateTopicRequest>,
) -> impl IntoResponse {
    match state.topic_service.create(payload.into()).await {
        Ok(topic) => {
            info!(topic_id = %topic.id(), "Created topic");
            (StatusCode::CREATED, Json(TopicResponse::from(topic))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Update an existing topic
#[utoipa::path(
    put,
    path = "/topics/{topic_id}",
    params(("topic_id" = Uuid, Path, description = "Topic identifier")),
    request_body = UpdateTopicRequest,
    responses(
        (status = 200, description = "Updated topic", body = TopicResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 422, description = "Topic is referenced by comments", body = ErrorResponse)
    ),
    tag = "topics"
)]
pub async fn update_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<Uuid>,
    Json(payload): Json<UpdateTopicRequest>,
) -> impl IntoResponse {
    let topic_id = TopicId::from(topic_id);

    match state.topic_service.update(&topic_id, payload.into()).await {
        Ok(Some(topic)) => {
            info!(topic_id = %topic_id, "Updated topic");
            Json(TopicResponse::from(topic)).into_response()
        }
        Ok(None) => not_found(format!("topic {} not found", topic_id)),
        Err(err) => error_response(err),
    }
}

/// Delete a topic
#[utoipa::path(
    delete,
    path = "/topics/{topic_id}",
    params(("topic_id" = Uuid, Path, description = "Topic identifier")),
    responses(
        (status = 204, description = "Topic deleted"),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 422, description = "Topic is referenced by comments", body = ErrorResponse)
    ),
    tag = "topics"
)]
pub async fn delete_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<Uuid>,
) -> impl IntoResponse {
    let topic_id = TopicId::from(topic_id);

    match state.topic_service.delete(&topic_id).await {
        Ok(true) => {
            info!(topic_id = %topic_id, "Deleted topic");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => not_found(format!("topic {} not found", topic_id)),
        Err(err) => error_response(err),
    }
}
