use crate::validation::FieldError;
use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event with ID {0} not found")]
    NotFound(i32),

    #[error("Event ID mismatch: path {path_id}, body {body_id}")]
    IdMismatch { path_id: i32, body_id: i32 },

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type EventResult<T> = Result<T, EventError>;

impl From<Vec<FieldError>> for EventError {
    fn from(errors: Vec<FieldError>) -> Self {
        EventError::Validation(errors)
    }
}

/// Convert EventError to AppError for standardized error responses
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound(_) => AppError::NotFound(err.to_string()),
            EventError::IdMismatch { .. } => AppError::BadRequest("Event ID mismatch".to_string()),
            EventError::Validation(errors) => AppError::Validation {
                message: ErrorCode::ValidationError.default_message().to_string(),
                errors: errors.iter().map(ToString::to_string).collect(),
            },
            EventError::Database(err) => AppError::Database(err),
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
