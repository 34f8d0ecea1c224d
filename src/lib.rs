//! report_patch library: scan-report-driven source patching
//!
//! This library reads a Burp-style HTML scan report, derives a fixed set of
//! vulnerability findings from `<h2>` heading text, and rewrites a Node.js
//! source file with mitigating response headers or cookie flags inserted at
//! known anchor lines.
//!
//! # Example
//!
//! ```no_run
//! use report_patch::{run_fix, Config};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     report: PathBuf::from("scan-results/burp-report.html"),
//!     target: PathBuf::from("app1/index.js"),
//!     ..Default::default()
//! };
//!
//! let report = run_fix(&config)?;
//! println!("{} findings, {} patches applied", report.findings.len(), report.applied.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
mod patch;
mod report;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::PatchError;
pub use patch::{apply_patches, PatchOutcome, PatchRule};
pub use report::{scan_report, Finding};
pub use run::{run_fix, FixReport};

// Internal run module (contains the read-scan-patch-write pipeline)
mod run {
    use std::fs;

    use log::{debug, info};

    use crate::config::Config;
    use crate::error_handling::PatchError;
    use crate::patch::apply_patches;
    use crate::report::{scan_report, Finding};

    /// Results of a patching run.
    #[derive(Debug, Clone)]
    pub struct FixReport {
        /// Findings detected in the scan report, in evaluation order
        pub findings: Vec<Finding>,
        /// Findings whose patch rule actually changed the target text
        pub applied: Vec<Finding>,
        /// Whether the written file differs from what was read
        pub modified: bool,
    }

    /// Reads the scan report, derives findings, and patches the target file
    /// in place.
    ///
    /// The target is read fully into memory, mutated by at most one literal
    /// substitution per finding, and written back in a single truncating
    /// write. Absent anchors make the corresponding rule a silent no-op; the
    /// file is rewritten even when no rule changed anything, so the on-disk
    /// content is byte-identical in that case.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError`] if the report or target cannot be read, or the
    /// target cannot be written. No error is raised for unmatched markers or
    /// anchors.
    pub fn run_fix(config: &Config) -> Result<FixReport, PatchError> {
        let report_html =
            fs::read_to_string(&config.report).map_err(|source| PatchError::ReportRead {
                path: config.report.clone(),
                source,
            })?;

        let findings = scan_report(&report_html);
        info!(
            "Scan report {} contains {} finding(s): {:?}",
            config.report.display(),
            findings.len(),
            findings
        );

        let source = fs::read_to_string(&config.target).map_err(|source| PatchError::TargetRead {
            path: config.target.clone(),
            source,
        })?;

        let outcome = apply_patches(&findings, &source);
        for finding in &outcome.applied {
            debug!("Applied patch for {}", finding);
        }

        let modified = outcome.text != source;
        fs::write(&config.target, &outcome.text).map_err(|source| PatchError::TargetWrite {
            path: config.target.clone(),
            source,
        })?;

        info!(
            "Wrote {} ({} patch(es) applied)",
            config.target.display(),
            outcome.applied.len()
        );

        Ok(FixReport {
            findings,
            applied: outcome.applied,
            modified,
        })
    }
}
