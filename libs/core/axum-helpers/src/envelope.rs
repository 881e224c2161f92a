//! Uniform response envelope.
//!
//! Every JSON response, successful or not, has the same four fields:
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Retrieved 2 event(s)",
//!   "data": [ ... ],
//!   "errors": null
//! }
//! ```
//!
//! `data` is `null` on failure, `errors` is `null` on success.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
    /// Payload, present on success
    pub data: Option<T>,
    /// Error details, present on failure
    pub errors: Option<Vec<String>>,
}

/// Shape of every failed response, used for OpenAPI documentation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false`
    pub success: bool,
    pub message: String,
    /// Always `null`
    #[schema(value_type = Object, nullable)]
    pub data: Option<serde_json::Value>,
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>, errors: Option<Vec<String>>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Pair the envelope with a status code other than 200.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
