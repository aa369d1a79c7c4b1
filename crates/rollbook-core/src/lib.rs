//! # Rollbook Core
//!
//! Core domain logic and utilities for the rollbook administration console.
//!
//! This crate holds everything that does not touch the network or the
//! terminal:
//!
//! - [`attendance`]: the Sunday attendance marking window policy
//! - [`calendar`]: month ranges and Sunday enumeration for report screens
//! - [`errors`]: application error type shared by every layer
//! - [`pagination`]: page/limit query parameters and list-response metadata
//! - [`performance`]: performance bands derived from exam percentages
//! - [`search`]: in-memory list filtering and row grouping
//! - [`serde`]: custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use rollbook_core::attendance::{check_marking, default_marking_date};
//! use rollbook_core::errors::AppError;
//!
//! let now = chrono::Local::now().naive_local();
//! let date = default_marking_date(now);
//! let decision = check_marking(date, now);
//! if !decision.can_mark {
//!     return Err(AppError::validation(decision.reason.unwrap_or_default()));
//! }
//! ```

pub mod attendance;
pub mod calendar;
pub mod errors;
pub mod pagination;
pub mod performance;
pub mod search;
pub mod serde;

// Re-export commonly used types at crate root
pub use attendance::{MarkingDecision, check_marking, default_marking_date, next_sunday};
pub use errors::{AppError, ErrorKind};
pub use pagination::{PageQuery, Paginated, PaginationMeta};
pub use performance::PerformanceBand;
