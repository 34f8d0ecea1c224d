//! Error type definitions.
//!
//! All failures are fatal and propagate unrecovered to the process boundary;
//! the only non-error "failure" in this tool is an anchor literal missing
//! from the target file, which makes the corresponding rule a no-op.

mod types;

pub use types::{InitializationError, PatchError};
