//! Patch module tests.

use super::*;

const SERVER_SOURCE: &str = "\
const http = require('http');
const os = require('os');

http.createServer((req, res) => {
  res.writeHead(200, { 'Content-Type': 'text/plain' });
  res.write('Hello World! ' + os.hostname());
  res.end();
}).listen(8080);
";

#[test]
fn test_hsts_insertion_above_write_anchor() {
    let outcome = apply_patches(&[Finding::HstsMissing], SERVER_SOURCE);
    assert!(outcome.text.contains(
        "res.setHeader('Strict-Transport-Security', 'max-age=31536000; includeSubDomains');\n  res.write('Hello World! ' + os.hostname());"
    ));
    // The anchor survives as the tail of the replacement
    assert!(outcome.text.contains(WRITE_ANCHOR));
    assert_eq!(outcome.applied, vec![Finding::HstsMissing]);
}

#[test]
fn test_clickjacking_insertion() {
    let outcome = apply_patches(&[Finding::Clickjacking], SERVER_SOURCE);
    assert!(outcome
        .text
        .contains("res.setHeader('X-Frame-Options', 'DENY');\n  res.write"));
}

#[test]
fn test_cacheable_response_inserts_two_headers() {
    let outcome = apply_patches(&[Finding::CacheableResponse], SERVER_SOURCE);
    assert!(outcome.text.contains(
        "res.setHeader('Cache-Control', 'no-store, no-cache, must-revalidate, private');\n  res.setHeader('Pragma', 'no-cache');\n  res.write"
    ));
}

#[test]
fn test_header_insertions_stack_in_rule_order() {
    // Each insertion re-matches the anchor, so the HSTS line (applied first)
    // ends up above the X-Frame-Options line
    let outcome = apply_patches(
        &[Finding::HstsMissing, Finding::Clickjacking],
        SERVER_SOURCE,
    );
    let hsts_pos = outcome
        .text
        .find("Strict-Transport-Security")
        .expect("HSTS header should be inserted");
    let xfo_pos = outcome
        .text
        .find("X-Frame-Options")
        .expect("X-Frame-Options header should be inserted");
    let anchor_pos = outcome.text.find(WRITE_ANCHOR).expect("anchor survives");
    assert!(hsts_pos < xfo_pos);
    assert!(xfo_pos < anchor_pos);
    assert_eq!(
        outcome.applied,
        vec![Finding::HstsMissing, Finding::Clickjacking]
    );
}

#[test]
fn test_secure_cookie_rewrite() {
    let source = "  res.cookie('nome_do_cookie', valor_do_cookie);\n";
    let outcome = apply_patches(&[Finding::CookieNotSecure], source);
    assert_eq!(
        outcome.text,
        "  res.cookie('nome_do_cookie', valor_do_cookie, { secure: true });\n"
    );
}

#[test]
fn test_httponly_cookie_rewrite() {
    let source = "  res.cookie('nome_do_cookie', valor_do_cookie);\n";
    let outcome = apply_patches(&[Finding::CookieNotHttpOnly], source);
    assert_eq!(
        outcome.text,
        "  res.cookie('nome_do_cookie', valor_do_cookie, { httpOnly: true });\n"
    );
}

#[test]
fn test_second_cookie_rule_is_noop_after_first() {
    // The secure rule rewrites the cookie anchor, so the httpOnly rule no
    // longer finds it and silently does nothing
    let source = "  res.cookie('nome_do_cookie', valor_do_cookie);\n";
    let outcome = apply_patches(
        &[Finding::CookieNotSecure, Finding::CookieNotHttpOnly],
        source,
    );
    assert!(outcome.text.contains("{ secure: true }"));
    assert!(!outcome.text.contains("httpOnly"));
    assert_eq!(outcome.applied, vec![Finding::CookieNotSecure]);
}

#[test]
fn test_absent_anchor_is_silent_noop() {
    let source = "console.log('no anchors here');\n";
    let outcome = apply_patches(&[Finding::HstsMissing, Finding::CookieNotSecure], source);
    assert_eq!(outcome.text, source);
    assert!(outcome.applied.is_empty());
}

#[test]
fn test_no_findings_is_identity() {
    let outcome = apply_patches(&[], SERVER_SOURCE);
    assert_eq!(outcome.text, SERVER_SOURCE);
    assert!(outcome.applied.is_empty());
}

#[test]
fn test_replace_all_patches_every_anchor_occurrence() {
    let source = format!("  {}\n  {}\n", WRITE_ANCHOR, WRITE_ANCHOR);
    let outcome = apply_patches(&[Finding::Clickjacking], &source);
    assert_eq!(outcome.text.matches("X-Frame-Options").count(), 2);
    assert_eq!(outcome.text.matches(WRITE_ANCHOR).count(), 2);
}

#[test]
fn test_cookie_rules_independent_of_header_rules() {
    let source = format!("  {}\n  {}\n", WRITE_ANCHOR, COOKIE_ANCHOR);
    let outcome = apply_patches(
        &[Finding::CacheableResponse, Finding::CookieNotHttpOnly],
        &source,
    );
    assert!(outcome.text.contains("Cache-Control"));
    assert!(outcome.text.contains("{ httpOnly: true }"));
    assert_eq!(
        outcome.applied,
        vec![Finding::CookieNotHttpOnly, Finding::CacheableResponse]
    );
}

#[test]
fn test_every_rule_has_matching_anchor_in_replacement_semantics() {
    // Header rules keep their anchor; cookie rules must not, or they would
    // re-match on a second run
    for rule in RULES {
        match rule.anchor {
            WRITE_ANCHOR => assert!(rule.replacement.ends_with(WRITE_ANCHOR)),
            COOKIE_ANCHOR => assert!(!rule.replacement.contains(COOKIE_ANCHOR)),
            other => panic!("unexpected anchor: {}", other),
        }
    }
}
