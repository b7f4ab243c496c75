//! HTTP handlers

pub mod comment;
pub mod topic;

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use tracing::{error, warn};

use discussions_domain::DiscussionError;

use crate::dto::ErrorResponse;

/// Map a domain error to an HTTP response
///
/// Domain errors are recoverable by the caller and surface as 422 with a
/// descriptive message; store failures are not caught anywhere below and
/// surface as 500.
pub(crate) fn error_response(err: DiscussionError) -> Response {
    let status = match &err {
        DiscussionError::TopicLocked { .. }
        | DiscussionError::TopicNotFound(_)
        | DiscussionError::CommentNotFoundToBeReplied(_) => {
            warn!(error = %err, "Domain rule rejected the request");
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DiscussionError::StoreFailure(_) => {
            error!(error = %err, "Store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// 404 with a descriptive body
pub(crate) fn not_found(message: String) -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse { error: message })).into_response()
}
