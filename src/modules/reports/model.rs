//! Report DTOs, re-exported from `rollbook-models`. The backend computes
//! every aggregate; these screens only render.

pub use rollbook_models::reports::*;
