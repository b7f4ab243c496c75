//! Comment handlers
//!
//! A missing topic is a 422 on every scoped operation (the domain raises
//! `TopicNotFound`); a missing comment within an existing topic is a 404.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;
use uuid::Uuid;

use discussions_domain::{CommentId, TopicId};

use crate::{
    dto::{
        comment::{CommentResponse, CreateCommentRequest, UpdateCommentRequest},
        ErrorResponse, Pagination,
    },
    handlers::{error_response, not_found},
    AppState,
};

/// List the comments of a topic
#[utoipa::path(
    get,
    path = "/topics/{topic_id}/comments",
    params(
        ("topic_id" = Uuid, Path, description = "Topic identifier"),
        Pagination
    ),
    responses(
        (status = 200, description = "Page of comments in insertion order", body = [CommentResponse]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "comments"
)]
pub async fn list_comments(
    State(state): State<AppState>,
    Path(topic_id): Path<Uuid>,
    Query(page): Query<Pagination>,
) -> impl IntoResponse {
    let topic_id = TopicId::from(topic_id);

    match state
        .comment_service
        .list_by_topic(&topic_id, page.skip, page.limit)
        .await
    {
        Ok(comments) => Json(
            comments
                .into_iter()
                .map(CommentResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => error_response(err),
    }
}

/// Get a single comment in a topic
#[utoipa::path(
    get,
    path = "/topics/{topic_id}/comments/{comment_id}",
    params(
        ("topic_id" = Uuid, Path, description = "Topic identifier"),
        ("comment_id" = Uuid, Path, description = "Comment identifier")
    ),
    responses(
        (status = 200, description = "The comment", body = CommentResponse),
        (status = 404, description = "Comment not found in this topic", body = ErrorResponse),
        (status = 422, description = "Topic not found", body = ErrorResponse)
    ),
    tag = "comments"
)]
pub async fn get_comment(
    State(state): State<AppState>,
    Path((topic_id, comment_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let topic_id = TopicId::from(topic_id);
    let comment_id = CommentId::from(comment_id);

    match state.comment_service.get(&topic_id, &comment_id).await {
        Ok(Some(comment)) => Json(CommentResponse::from(comment)).into_response(),
        Ok(None) => not_found(format!(
            "comment {} not found in topic {}",
            comment_id, topic_id
        )),
        Err(err) => error_response(err),
    }
}

/// Create a new comment in a topic
#[utoipa::path(
    post,
    path = "/topics/{topic_id}/comments",
    params(("topic_id" = Uuid, Path, description = "Topic identifier")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 422, description = "Topic or reply target not found", body = ErrorResponse)
    ),
    tag = "comments"
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Path(topic_id): Path<Uuid>,
    Json(payload): Json<CreateCommentRequest>,
) -> impl IntoResponse {
    let topic_id = TopicId::from(topic_id);

    match state.comment_service.create(&topic_id, payload.into()).await {
        Ok(comment) => {
            info!(topic_id = %topic_id, comment_id = %comment.id(), "Created comment");
            (StatusCode::CREATED, Json(CommentResponse::from(comment))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Update an existing comment in a topic
#[utoipa::path(
    put,
    path = "/topics/{topic_id}/comments/{comment_id}",
    params(
        ("topic_id" = Uuid, Path, description = "Topic identifier"),
        ("comment_id" = Uuid, Path, description = "Comment identifier")
    ),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Updated comment", body = CommentResponse),
        (status = 404, description = "Comment not found in this topic", body = ErrorResponse),
        (status = 422, description = "Topic not found", body = ErrorResponse)
    ),
    tag = "comments"
)]
pub async fn update_comment(
    State(state): State<AppState>,
    Path((topic_id, comment_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateCommentRequest>,
) -> impl IntoResponse {
    let topic_id = TopicId::from(topic_id);
    let comment_id = CommentId::from(comment_id);

    match state
        .comment_service
        .update(&topic_id, &comment_id, payload.into())
        .await
    {
        Ok(Some(comment)) => {
            info!(topic_id = %topic_id, comment_id = %comment_id, "Updated comment");
            Json(CommentResponse::from(comment)).into_response()
        }
        Ok(None) => not_found(format!(
            "comment {} not found in topic {}",
            comment_id, topic_id
        )),
        Err(err) => error_response(err),
    }
}

/// Delete a comment in a topic
#[utoipa::path(
    delete,
    path = "/topics/{topic_id}/comments/{comment_id}",
    params(
        ("topic_id" = Uuid, Path, description = "Topic identifier"),
        ("comment_id" = Uuid, Path, description = "Comment identifier")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 404, description = "Comment not found in this topic", body = ErrorResponse),
        (status = 422, description = "Topic not found", body = ErrorResponse)
    ),
    tag = "comments"
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path((topic_id, comment_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let topic_id = TopicId::from(topic_id);
    let comment_id = CommentId::from(comment_id);

    match state.comment_service.delete(&topic_id, &comment_id).await {
        Ok(true) => {
            info!(topic_id = %topic_id, comment_id = %comment_id, "Deleted comment");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => not_found(format!(
            "comment {} not found in topic {}",
            comment_id, topic_id
        )),
        Err(err) => error_response(err),
    }
}
