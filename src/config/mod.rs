//! Application configuration.
//!
//! This module provides:
//! - The library [`Config`] struct
//! - Log level and format option types shared with the CLI

mod types;

pub use types::{Config, LogFormat, LogLevel};
