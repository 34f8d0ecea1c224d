//! Patch rule application.
//!
//! Patching is pure text substitution over the whole document; there is no
//! structural awareness of the target source. I/O stays at the `run_fix`
//! boundary so this core is testable as `(findings, source) -> text`.

mod rules;
#[cfg(test)]
mod tests;

use crate::report::Finding;

pub use rules::{PatchRule, COOKIE_ANCHOR, RULES, WRITE_ANCHOR};

/// Result of applying patch rules to a source document.
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    /// The fully mutated source text
    pub text: String,
    /// Findings whose rule changed the text (absent-anchor no-ops excluded)
    pub applied: Vec<Finding>,
}

/// Applies the patch rule for each active finding to the source text.
///
/// Rules run in [`RULES`] order, each performing a whole-document
/// replace-all of its anchor literal. Later rules match against the text as
/// already mutated by earlier rules: header insertions stack above the
/// shared write anchor in rule order, and once one cookie rule has rewritten
/// the cookie anchor the other no longer matches. An anchor absent from the
/// text makes that rule a silent no-op.
pub fn apply_patches(findings: &[Finding], source: &str) -> PatchOutcome {
    let mut text = source.to_string();
    let mut applied = Vec::new();

    for rule in RULES {
        if !findings.contains(&rule.finding) {
            continue;
        }
        if !text.contains(rule.anchor) {
            log::debug!(
                "Anchor for {} not found in target, skipping",
                rule.finding
            );
            continue;
        }
        text = text.replace(rule.anchor, rule.replacement);
        applied.push(rule.finding);
    }

    PatchOutcome { text, applied }
}
