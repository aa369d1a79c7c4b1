//! # Rollbook API
//!
//! The HTTP client every service goes through to reach the backend.
//!
//! [`ApiClient`] owns the base URL, the bearer token, and the request
//! plumbing: JSON encoding/decoding, per-request logging, and translation
//! of failure responses into [`rollbook_core::errors::AppError`] with the
//! backend's own message extracted when one exists.
//!
//! There is deliberately no retry and no cache here — a failed action is
//! terminal and the operator re-runs it.

pub mod client;

pub use client::ApiClient;
