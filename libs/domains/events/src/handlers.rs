use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    ApiResponse, EnvelopeJson, EnvelopeQuery, IdPath,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::EventResult;
use crate::models::{Category, DeletedEvent, EventFilter, EventInput, EventResponse};
use crate::repository::EventRepository;
use crate::service::EventService;

pub const TAG: &str = "events";

/// OpenAPI documentation for the Events API
#[derive(OpenApi)]
#[openapi(
    paths(list_events, get_event, create_event, update_event, delete_event),
    components(
        schemas(EventResponse, EventInput, DeletedEvent, Category),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Calendar event management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the event router with all HTTP endpoints
pub fn router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_events).post(create_event))
        .route(
            "/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .with_state(shared_service)
}

/// List events, optionally within a date window
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(EventFilter),
    responses(
        (status = 200, description = "Events ordered by start date", body = ApiResponse<Vec<EventResponse>>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    EnvelopeQuery(filter): EnvelopeQuery<EventFilter>,
) -> EventResult<ApiResponse<Vec<EventResponse>>> {
    let events: Vec<EventResponse> = service
        .list_events(filter)
        .await?
        .into_iter()
        .map(EventResponse::from)
        .collect();

    let message = format!("Retrieved {} event(s)", events.len());
    Ok(ApiResponse::success(events, message))
}

/// Get a single event
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "The event", body = ApiResponse<EventResponse>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    IdPath(id): IdPath,
) -> EventResult<ApiResponse<EventResponse>> {
    let event = service.get_event(id).await?;
    Ok(ApiResponse::success(event.into(), "Event retrieved successfully"))
}

/// Create an event
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = EventInput,
    responses(
        (status = 201, description = "Event created successfully", body = ApiResponse<EventResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    EnvelopeJson(input): EnvelopeJson<EventInput>,
) -> EventResult<Response> {
    let event = service.create_event(input).await?;

    Ok(ApiResponse::success(EventResponse::from(event), "Event created successfully")
        .with_status(StatusCode::CREATED))
}

/// Replace an event
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Event id")),
    request_body = EventInput,
    responses(
        (status = 200, description = "Event updated successfully", body = ApiResponse<EventResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    IdPath(id): IdPath,
    EnvelopeJson(input): EnvelopeJson<EventInput>,
) -> EventResult<ApiResponse<EventResponse>> {
    let event = service.update_event(id, input).await?;
    Ok(ApiResponse::success(event.into(), "Event updated successfully"))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deleted successfully", body = ApiResponse<DeletedEvent>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    IdPath(id): IdPath,
) -> EventResult<impl IntoResponse> {
    service.delete_event(id).await?;
    Ok(ApiResponse::success(DeletedEvent { id }, "Event deleted successfully"))
}
