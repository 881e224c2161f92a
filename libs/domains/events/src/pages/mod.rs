//! Server-rendered calendar pages.
//!
//! | Route                        | Purpose                                  |
//! |------------------------------|------------------------------------------|
//! | `GET /`                      | redirect to `/events`                    |
//! | `GET /events`                | list with an optional `?notice=` banner  |
//! | `GET, POST /events/create`   | create form                              |
//! | `GET, POST /events/{id}/edit`| edit form                                |
//! | `POST /events/{id}/delete`   | delete, then back to the list            |
//!
//! Submissions go through the same [`EventService`] as the JSON API. A form
//! with validation errors is shown again with the submitted values and the
//! messages next to their fields; a successful submission redirects (303) to
//! the list.

mod form;
mod render;

pub use form::{EventForm, Notice};
pub use render::PageRenderer;

use axum::{
    Form, Router,
    extract::{Path, Query, State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::Local;
use handlebars::TemplateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::EventError;
use crate::models::EventFilter;
use crate::repository::EventRepository;
use crate::service::EventService;
use form::{CategoryOption, EventRow, NoticeView, category_options, errors_by_field};

const RENDER_FAILURE: &str = "<!DOCTYPE html><title>Error</title><p>An internal server error occurred</p>";

struct PagesState<R: EventRepository> {
    service: EventService<R>,
    renderer: PageRenderer,
}

/// Create the page router.
///
/// Fails only if a bundled template does not compile.
pub fn router<R: EventRepository + 'static>(service: EventService<R>) -> Result<Router, TemplateError> {
    let state = Arc::new(PagesState {
        service,
        renderer: PageRenderer::new()?,
    });

    Ok(Router::new()
        .route("/", get(|| async { Redirect::to("/events") }))
        .route("/events", get(index::<R>))
        .route("/events/create", get(create_form::<R>).post(create_submit::<R>))
        .route("/events/{id}/edit", get(edit_form::<R>).post(edit_submit::<R>))
        .route("/events/{id}/delete", post(delete_submit::<R>))
        .with_state(state))
}

#[derive(Serialize)]
struct IndexPage {
    page_title: &'static str,
    notice: Option<NoticeView>,
    events: Vec<EventRow>,
}

#[derive(Serialize)]
struct FormPage<'a> {
    page_title: &'static str,
    heading: &'static str,
    submit_label: &'static str,
    action: String,
    form: &'a EventForm,
    all_day: bool,
    categories: Vec<CategoryOption>,
    errors: BTreeMap<&'static str, Vec<String>>,
    general_error: Option<&'static str>,
}

#[derive(Serialize)]
struct MessagePage<'a> {
    page_title: &'a str,
    heading: &'a str,
    message: &'a str,
}

enum FormMode {
    Create,
    Edit(i32),
}

impl FormMode {
    fn save_failed(&self) -> &'static str {
        match self {
            FormMode::Create => "An error occurred while creating the event.",
            FormMode::Edit(_) => "An error occurred while updating the event.",
        }
    }

    fn page<'a>(&self, form: &'a EventForm) -> FormPage<'a> {
        let (page_title, heading, submit_label, action) = match self {
            FormMode::Create => ("Create Event", "Create Event", "Create", "/events/create".to_string()),
            FormMode::Edit(id) => ("Edit Event", "Edit Event", "Save", format!("/events/{}/edit", id)),
        };

        FormPage {
            page_title,
            heading,
            submit_label,
            action,
            form,
            all_day: form.all_day(),
            categories: category_options(&form.category),
            errors: BTreeMap::new(),
            general_error: None,
        }
    }
}

impl<R: EventRepository> PagesState<R> {
    fn html<T: Serialize>(&self, status: StatusCode, page: &str, data: &T) -> Response {
        match self.renderer.render(page, data) {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!(page, error = %e, "Failed to render page");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(RENDER_FAILURE)).into_response()
            }
        }
    }

    fn not_found(&self) -> Response {
        self.html(
            StatusCode::NOT_FOUND,
            "message",
            &MessagePage {
                page_title: "Not Found",
                heading: "Event not found",
                message: "The event you are looking for does not exist.",
            },
        )
    }

    fn unreadable_form(&self, rejection: FormRejection) -> Response {
        tracing::info!(error = %rejection, "Rejected form submission");
        self.html(
            StatusCode::BAD_REQUEST,
            "message",
            &MessagePage {
                page_title: "Bad Request",
                heading: "Form could not be read",
                message: "The submitted form was not understood. Please go back and try again.",
            },
        )
    }

    fn server_error(&self, err: &EventError) -> Response {
        tracing::error!(error = %err, "Page request failed");
        self.html(
            StatusCode::INTERNAL_SERVER_ERROR,
            "message",
            &MessagePage {
                page_title: "Error",
                heading: "Something went wrong",
                message: "An internal server error occurred",
            },
        )
    }

    /// Outcome of a create or edit submission.
    fn submitted(&self, mode: FormMode, form: &EventForm, result: Result<(), EventError>, notice: Notice) -> Response {
        let mut page = mode.page(form);
        match result {
            Ok(()) => return Redirect::to(&notice.location()).into_response(),
            Err(EventError::Validation(errors)) => page.errors = errors_by_field(&errors),
            Err(EventError::NotFound(_) | EventError::IdMismatch { .. }) => return self.not_found(),
            Err(err @ EventError::Database(_)) => {
                tracing::error!(error = %err, "Failed to save event from form");
                page.general_error = Some(mode.save_failed());
            }
        }
        self.html(StatusCode::OK, "form", &page)
    }
}

fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

#[derive(Debug, Deserialize)]
struct IndexQuery {
    notice: Option<String>,
}

async fn index<R: EventRepository>(
    State(state): State<Arc<PagesState<R>>>,
    Query(query): Query<IndexQuery>,
) -> Response {
    let events = match state.service.list_events(EventFilter::default()).await {
        Ok(events) => events,
        Err(err) => return state.server_error(&err),
    };

    let page = IndexPage {
        page_title: "Events",
        notice: query
            .notice
            .and_then(|raw| raw.parse::<Notice>().ok())
            .map(NoticeView::from),
        events: events.into_iter().map(EventRow::from).collect(),
    };
    state.html(StatusCode::OK, "index", &page)
}

async fn create_form<R: EventRepository>(State(state): State<Arc<PagesState<R>>>) -> Response {
    let form = EventForm::starting_at(Local::now().naive_local());
    state.html(StatusCode::OK, "form", &FormMode::Create.page(&form))
}

async fn create_submit<R: EventRepository>(
    State(state): State<Arc<PagesState<R>>>,
    form: Result<Form<EventForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return state.unreadable_form(rejection),
    };
    let result = state.service.create_event(form.to_input()).await.map(|event| {
        tracing::debug!(event_id = event.id, "Event created from form");
    });
    state.submitted(FormMode::Create, &form, result, Notice::Created)
}

async fn edit_form<R: EventRepository>(
    State(state): State<Arc<PagesState<R>>>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return state.not_found();
    };

    match state.service.get_event(id).await {
        Ok(event) => {
            let form = EventForm::from_event(&event);
            state.html(StatusCode::OK, "form", &FormMode::Edit(id).page(&form))
        }
        Err(EventError::NotFound(_)) => state.not_found(),
        Err(err) => state.server_error(&err),
    }
}

async fn edit_submit<R: EventRepository>(
    State(state): State<Arc<PagesState<R>>>,
    Path(raw_id): Path<String>,
    form: Result<Form<EventForm>, FormRejection>,
) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return state.not_found();
    };
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return state.unreadable_form(rejection),
    };
    if form.id.as_deref().is_some_and(|raw| parse_id(raw) != Some(id)) {
        return state.not_found();
    }

    let result = state
        .service
        .update_event(id, form.to_input())
        .await
        .map(|_| ());
    state.submitted(FormMode::Edit(id), &form, result, Notice::Updated)
}

async fn delete_submit<R: EventRepository>(
    State(state): State<Arc<PagesState<R>>>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return state.not_found();
    };

    match state.service.delete_event(id).await {
        Ok(()) => Redirect::to(&Notice::Deleted.location()).into_response(),
        Err(EventError::NotFound(_)) => state.not_found(),
        Err(err) => {
            tracing::error!(event_id = id, error = %err, "Failed to delete event from page");
            Redirect::to(&Notice::DeleteFailed.location()).into_response()
        }
    }
}
