//! Events Domain
//!
//! Calendar events: one validator shared by a JSON API and server-rendered
//! forms, with in-memory and PostgreSQL storage.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  ┌─────────────┐
//! │  Handlers   │  │    Pages    │  ← JSON API / HTML forms
//! └──────┬──────┘  └──────┬──────┘
//!        └───────┬────────┘
//!         ┌──────▼──────┐
//!         │   Service   │  ← id checks, validation
//!         └──────┬──────┘
//!         ┌──────▼──────┐
//!         │ Repository  │  ← trait + in-memory / Postgres
//!         └──────┬──────┘
//!         ┌──────▼──────┐
//!         │   Models    │  ← Event, EventInput, Category
//!         └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_events::{handlers, pages, InMemoryEventRepository, EventService};
//!
//! let service = EventService::new(InMemoryEventRepository::new());
//!
//! let api = handlers::router(service.clone());
//! let pages = pages::router(service).expect("templates compile");
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod postgres;
pub mod repository;
pub mod seed;
pub mod service;
pub mod timestamp;
pub mod validation;

// Re-export commonly used types
pub use error::{EventError, EventResult};
pub use models::{
    Category, DEFAULT_COLOR, DeletedEvent, Event, EventFilter, EventInput, EventResponse, NewEvent,
    color_for,
};
pub use postgres::PgEventRepository;
pub use repository::{EventRepository, InMemoryEventRepository};
pub use service::EventService;
pub use validation::{FieldError, validate};
