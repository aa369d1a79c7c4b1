pub mod commands;
pub mod model;
pub mod service;

pub use commands::GradesCommand;
