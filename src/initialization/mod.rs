//! Application initialization.
//!
//! Logger setup for the CLI binary and tests.

mod logger;

pub use logger::init_logger_with;
