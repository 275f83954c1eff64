/// Module containing environment variable helpers
pub mod config;
/// Module containing formatting helpers for log output
pub mod format;
/// Module containing logging utilities
pub mod logger;

pub use config::*;
pub use format::*;
pub use logger::*;
