//! Prefect data models and DTOs, re-exported from `rollbook-models`.

pub use rollbook_models::prefects::*;
