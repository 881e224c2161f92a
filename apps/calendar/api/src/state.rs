//! Application state management.

/// Shared application state.
///
/// Cloned into routers and the shutdown task; the connection handle is a
/// pool, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
