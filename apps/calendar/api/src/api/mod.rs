use axum::Router;

pub mod events;
pub mod health;

/// JSON routes without the `/api` prefix, which `create_router` adds.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/events", events::router(state))
}

/// Server-rendered pages, mounted at the root.
pub fn pages(state: &crate::state::AppState) -> eyre::Result<Router> {
    events::pages(state)
}

/// Creates a router with the /ready endpoint that checks the database.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
