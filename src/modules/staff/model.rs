//! Teacher and staff-role data models, re-exported from `rollbook-models`.

pub use rollbook_models::staff::*;
