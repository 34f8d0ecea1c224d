//! Finding definitions and the heading-marker table.

use strum_macros::EnumIter as EnumIterMacro;

/// A named vulnerability finding detected in the scan report.
///
/// Each finding corresponds to one issue heading the scanner emits and to
/// exactly one patch rule. Presence is boolean: duplicate headings in the
/// report do not change the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Finding {
    /// Strict-Transport-Security header not enforced
    HstsMissing,
    /// Response frameable, missing X-Frame-Options
    Clickjacking,
    /// TLS cookie set without the secure flag
    CookieNotSecure,
    /// Cookie set without the HttpOnly flag
    CookieNotHttpOnly,
    /// HTTPS response cacheable, missing Cache-Control/Pragma
    CacheableResponse,
}

/// Marker substrings matched against `<h2>` heading text, in evaluation
/// order. Matching is case-sensitive containment, and the order here is
/// observable: it fixes the order patch rules are applied, which determines
/// the relative order of inserted header lines.
pub const HEADING_MARKERS: &[(&str, Finding)] = &[
    ("Strict transport security not enforced", Finding::HstsMissing),
    (
        "Frameable response (potential Clickjacking)",
        Finding::Clickjacking,
    ),
    ("TLS cookie without secure flag set", Finding::CookieNotSecure),
    (
        "Cookie without HttpOnly flag set",
        Finding::CookieNotHttpOnly,
    ),
    ("Cacheable HTTPS response", Finding::CacheableResponse),
];

impl Finding {
    /// Returns a human-readable string representation of the finding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Finding::HstsMissing => "Strict transport security not enforced",
            Finding::Clickjacking => "Frameable response (potential Clickjacking)",
            Finding::CookieNotSecure => "TLS cookie without secure flag set",
            Finding::CookieNotHttpOnly => "Cookie without HttpOnly flag set",
            Finding::CacheableResponse => "Cacheable HTTPS response",
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
