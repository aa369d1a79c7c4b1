//! Feature modules, one per administrative screen group.
//!
//! Each module follows the same structure:
//!
//! - `model.rs`: data models (usually re-exports from `rollbook-models`)
//! - `service.rs`: typed endpoint wrappers over [`rollbook_api::ApiClient`]
//! - `commands.rs`: the screen logic — arguments, validation, derivation,
//!   rendering

pub mod attendance;
pub mod competitions;
pub mod exams;
pub mod grades;
pub mod houses;
pub mod prefects;
pub mod reports;
pub mod roles;
pub mod sections;
pub mod staff;
pub mod students;
pub mod users;
