//! The static patch rule table.
//!
//! Anchors are exact literals expected to pre-exist in the target file; they
//! are the external contract with that file, placeholder names included.
//! Header-insertion replacements keep the anchor as their tail so repeated
//! insertions stack new lines immediately above it; cookie replacements
//! rewrite the anchor itself to add an options object.

use crate::report::Finding;

/// Anchor line for response-header insertions.
pub const WRITE_ANCHOR: &str = "res.write('Hello World! ' + os.hostname());";

/// Anchor line for cookie-flag rewrites (shared by both cookie rules).
pub const COOKIE_ANCHOR: &str = "res.cookie('nome_do_cookie', valor_do_cookie);";

/// The fixed association between a finding and its anchor/replacement pair.
#[derive(Debug, Clone, Copy)]
pub struct PatchRule {
    /// The finding that activates this rule
    pub finding: Finding,
    /// Literal expected verbatim in the target file
    pub anchor: &'static str,
    /// Literal substituted for every occurrence of the anchor
    pub replacement: &'static str,
}

/// Patch rules in application order. The order matches the heading-marker
/// table, so header lines for multiple findings land above the write anchor
/// in this order.
pub const RULES: &[PatchRule] = &[
    PatchRule {
        finding: Finding::HstsMissing,
        anchor: WRITE_ANCHOR,
        replacement: "res.setHeader('Strict-Transport-Security', 'max-age=31536000; includeSubDomains');\n  res.write('Hello World! ' + os.hostname());",
    },
    PatchRule {
        finding: Finding::Clickjacking,
        anchor: WRITE_ANCHOR,
        replacement: "res.setHeader('X-Frame-Options', 'DENY');\n  res.write('Hello World! ' + os.hostname());",
    },
    PatchRule {
        finding: Finding::CookieNotSecure,
        anchor: COOKIE_ANCHOR,
        replacement: "res.cookie('nome_do_cookie', valor_do_cookie, { secure: true });",
    },
    PatchRule {
        finding: Finding::CookieNotHttpOnly,
        anchor: COOKIE_ANCHOR,
        replacement: "res.cookie('nome_do_cookie', valor_do_cookie, { httpOnly: true });",
    },
    PatchRule {
        finding: Finding::CacheableResponse,
        anchor: WRITE_ANCHOR,
        replacement: "res.setHeader('Cache-Control', 'no-store, no-cache, must-revalidate, private');\n  res.setHeader('Pragma', 'no-cache');\n  res.write('Hello World! ' + os.hostname());",
    },
];
