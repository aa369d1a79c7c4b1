//! # Rollbook
//!
//! A command-line administration console for a school-management REST
//! backend: students, staff, Sunday attendance, exams, inter-house
//! competitions, prefects, and application user/role administration.
//!
//! ## Overview
//!
//! Rollbook is the client side only. The backend owns persistence,
//! authentication, and every aggregate; this crate owns the data
//! dictionary, the typed service wrappers, the validation applied before a
//! payload leaves the machine, the derivations that turn fetched rows into
//! screens, and the Sunday attendance marking policy.
//!
//! ## Architecture
//!
//! The codebase follows a modular structure, one module per screen group:
//!
//! ```text
//! src/
//! ├── cli.rs            # Top-level command tree and dispatch
//! ├── logging.rs        # Console + rolling-file tracing layers
//! ├── state.rs          # Shared application state (the API client)
//! ├── validator.rs      # DTO validation with per-field messages
//! ├── modules/          # Feature modules
//! │   ├── students/    # Student CRUD and house assignment
//! │   ├── grades/      # Grade ladder
//! │   ├── sections/    # Grade groupings
//! │   ├── houses/      # Competition houses
//! │   ├── attendance/  # Sunday marking and the monthly sheet
//! │   ├── exams/       # Exams and banded results
//! │   ├── competitions/# Competitions and placings
//! │   ├── prefects/    # Prefect appointments
//! │   ├── staff/       # Teachers and staff roles
//! │   ├── users/       # Application users
//! │   ├── roles/       # Access roles
//! │   └── reports/     # Read-only dashboards
//! └── utils/            # Table rendering and prompts
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `model.rs`: data models and DTOs
//! - `service.rs`: endpoint wrappers
//! - `commands.rs`: screen logic and rendering
//!
//! ## Attendance policy
//!
//! Attendance is marked for Sundays only, inside a 07:30-13:00 window on
//! the marking Sunday itself; past Sundays are immutable. The policy lives
//! in [`rollbook_core::attendance`] as pure functions and is enforced
//! before any write is attempted.
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! ROLLBOOK_API_URL=http://localhost:8000/api
//! ROLLBOOK_API_TOKEN=...       # bearer token, never stored
//! ROLLBOOK_API_TIMEOUT=30
//! ROLLBOOK_LOG_DIR=storage/logs
//! ```
//!
//! ### Examples
//!
//! ```bash
//! rollbook students list --search perera
//! rollbook attendance status
//! rollbook attendance mark --grade <id>
//! rollbook reports attendance --month 6 --year 2024
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: command tree and dispatch
//! - [`logging`]: tracing setup
//! - [`modules`]: feature modules
//! - [`state`]: shared application state
//! - [`utils`]: rendering and prompt helpers
//! - [`validator`]: request validation utilities

pub mod cli;
pub mod logging;
pub mod modules;
pub mod state;
pub mod utils;
pub mod validator;

// Re-export workspace crates for convenience
pub use rollbook_api;
pub use rollbook_config;
pub use rollbook_core;
pub use rollbook_models;
