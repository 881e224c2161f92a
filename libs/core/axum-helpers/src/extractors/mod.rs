//! Extractors whose rejections render the standard envelope instead of
//! axum's plain-text bodies.

pub mod id_path;
pub mod json;
pub mod query;

pub use id_path::IdPath;
pub use json::EnvelopeJson;
pub use query::EnvelopeQuery;
