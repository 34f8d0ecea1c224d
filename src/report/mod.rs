//! Scan report parsing and finding detection.
//!
//! The scanner report is an HTML document in which each issue is introduced
//! by an `<h2>` heading. Detection is substring containment of a fixed,
//! case-sensitive marker against the heading's text content; nested markup
//! inside a heading is flattened before matching.

use std::sync::LazyLock;

use scraper::{Html, Selector};

mod findings;

pub use findings::{Finding, HEADING_MARKERS};

const ISSUE_HEADING_SELECTOR_STR: &str = "h2";

static ISSUE_HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(ISSUE_HEADING_SELECTOR_STR)
        .expect("issue heading selector is a compile-time constant")
});

/// Scans an HTML report for known vulnerability findings.
///
/// Parses the document (leniently; html5ever recovers from malformed
/// markup), collects the text content of every `<h2>` element, and tests
/// each marker in [`HEADING_MARKERS`] against every heading. A first match
/// is sufficient; duplicate headings do not produce duplicate findings.
///
/// # Returns
///
/// The detected findings in marker-table order, each at most once.
pub fn scan_report(html: &str) -> Vec<Finding> {
    let document = Html::parse_document(html);

    let headings: Vec<String> = document
        .select(&ISSUE_HEADING_SELECTOR)
        .map(|element| element.text().collect::<String>())
        .collect();
    log::debug!("Found {} issue heading(s) in report", headings.len());

    HEADING_MARKERS
        .iter()
        .filter(|(marker, _)| headings.iter().any(|heading| heading.contains(*marker)))
        .map(|(_, finding)| *finding)
        .collect()
}
