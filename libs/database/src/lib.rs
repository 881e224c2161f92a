//! PostgreSQL plumbing for calendar services.
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use database::common::RetryConfig;
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, Some(RetryConfig::new())).await?;
//! postgres::run_migrations::<Migrator>(&db, "calendar_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, RetryConfig, retry_with_backoff};
pub use postgres::{DatabaseConnection, PostgresConfig};
