use axum::Router;
use domain_events::{EventService, PgEventRepository, handlers, pages as event_pages};

fn service(state: &crate::state::AppState) -> EventService<PgEventRepository> {
    EventService::new(PgEventRepository::new(state.db.clone()))
}

pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(service(state))
}

pub fn pages(state: &crate::state::AppState) -> eyre::Result<Router> {
    event_pages::router(service(state)).map_err(|e| eyre::eyre!("Failed to compile page templates: {}", e))
}
