//! # Axum Helpers
//!
//! Shared HTTP plumbing for calendar services.
//!
//! ## Modules
//!
//! - **[`envelope`]**: the `{success, message, data, errors}` response body
//! - **[`errors`]**: [`AppError`] and its envelope rendering, error codes, 404 fallback
//! - **[`extractors`]**: JSON, query and integer-id extractors with enveloped rejections
//! - **[`http`]**: CORS and security headers
//! - **[`server`]**: router assembly with OpenAPI docs, health, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router::<ApiDoc>(Router::new(), Router::new())?;
//!     create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await
//! }
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use envelope::{ApiResponse, ErrorEnvelope};
pub use errors::{AppError, ErrorCode};
pub use extractors::{EnvelopeJson, EnvelopeQuery, IdPath};
pub use http::{cors_layer_from_env, create_cors_layer, security_headers};
pub use server::{
    HealthCheckFuture, HealthResponse, create_production_app, create_router, health_router,
    run_health_checks, shutdown_signal,
};
