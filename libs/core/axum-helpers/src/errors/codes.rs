//! Error codes attached to log records.
//!
//! Clients see only the envelope message; the code is for log search and
//! alerting. Ranges:
//! - 1000-1999: client errors
//! - 2000-2999: storage errors
//! - 5000-5999: server errors
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
//! assert_eq!(ErrorCode::ValidationError.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request body failed business validation
    ValidationError,
    /// Path parameter could not be parsed
    InvalidPathParam,
    /// Request body was not valid JSON for the target type
    InvalidJson,
    /// Query string could not be parsed
    InvalidQuery,
    /// Request was malformed in some other way
    BadRequest,
    /// Requested resource was not found
    NotFound,
    /// Store rejected or failed the operation
    DatabaseError,
    /// A dependency is not reachable
    ServiceUnavailable,
    /// Anything else
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidPathParam => 1002,
            Self::InvalidJson => 1003,
            Self::InvalidQuery => 1004,
            Self::BadRequest => 1005,
            Self::NotFound => 1006,
            Self::DatabaseError => 2001,
            Self::ServiceUnavailable => 5003,
            Self::InternalError => 5000,
        }
    }

    /// Message returned to clients when the caller supplies none, and the
    /// only message ever returned for server-side failures.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Validation failed",
            Self::InvalidPathParam => "Invalid path parameter",
            Self::InvalidJson => "Invalid JSON body",
            Self::InvalidQuery => "Invalid query string",
            Self::BadRequest => "Bad request",
            Self::NotFound => "The requested resource was not found",
            Self::DatabaseError | Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
        }
    }
}
