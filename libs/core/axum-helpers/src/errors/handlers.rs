use axum::{
    http::{StatusCode, Uri},
    response::Response,
};

use super::ErrorCode;
use crate::envelope::ApiResponse;

/// Fallback for unmatched routes. Answers with the standard envelope.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    ApiResponse::<()>::failure(ErrorCode::NotFound.default_message(), None)
        .with_status(StatusCode::NOT_FOUND)
}
