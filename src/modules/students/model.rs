//! Student data models and DTOs.
//!
//! Re-exports the student models from the `rollbook-models` crate; the
//! screens here add nothing on top.

pub use rollbook_models::students::*;
