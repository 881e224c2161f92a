//! Reusable OpenAPI response types for consistent API documentation.

use crate::envelope::ErrorEnvelope;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "An internal server error occurred",
        "data": null,
        "errors": null
    })
)]
pub struct InternalServerErrorResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Validation failed",
        "data": null,
        "errors": [
            "title: Title must be at least 3 characters",
            "startDate: All-day events should start at midnight"
        ]
    })
)]
pub struct BadRequestValidationResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid identifier",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Invalid event ID: abc",
        "data": null,
        "errors": null
    })
)]
pub struct BadRequestIdResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Event with ID 42 not found",
        "data": null,
        "errors": null
    })
)]
pub struct NotFoundResponse(pub ErrorEnvelope);
