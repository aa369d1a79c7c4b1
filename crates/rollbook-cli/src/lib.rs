//! # Rollbook CLI
//!
//! Backend seeding utilities for rollbook testing and development.
//!
//! This library crate provides the seeding functionality used by the CLI
//! binary. Everything goes through the same API client the console uses;
//! there is no direct database access anywhere.
//!
//! ## Usage
//!
//! ```ignore
//! use rollbook_cli::seeder::{SeedConfig, seed_all};
//!
//! let config = SeedConfig::default();
//! seed_all(&api, &config).await?;
//! ```

pub mod seeder;
