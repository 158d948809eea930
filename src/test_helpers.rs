//! Shared test utilities for the skills-blog test suite.
//!
//! ```rust
//! use crate::breadcrumbs::render;
//! use crate::test_helpers::*;
//!
//! let html = render(&article_trail_fixture(), "").render().into_string();
//! let json = extract_json_ld(&html);
//! assert_eq!(json["itemListElement"][0]["item"], "/");
//! assert_eq!(count_occurrences(&html, r#"aria-current="page""#), 1);
//! ```

use crate::breadcrumbs::{NavigationStep, NavigationTrail};

const JSON_LD_OPEN: &str = r#"<script type="application/ld+json">"#;
const SCRIPT_CLOSE: &str = "</script>";

/// The article trail: หน้าแรก (/) › บทความ (/blog) › current post.
pub fn article_trail_fixture() -> NavigationTrail {
    NavigationTrail::from(vec![
        NavigationStep::link("หน้าแรก", "/"),
        NavigationStep::link("บทความ", "/blog"),
        NavigationStep::current("วิธีใช้ Agent Skills ใน AntiGravity"),
    ])
}

/// Parse the first JSON-LD block in an HTML document. Panics if absent.
pub fn extract_json_ld(html: &str) -> serde_json::Value {
    let start = html
        .find(JSON_LD_OPEN)
        .unwrap_or_else(|| panic!("no JSON-LD script in:\n{html}"))
        + JSON_LD_OPEN.len();
    let len = html[start..]
        .find(SCRIPT_CLOSE)
        .expect("unterminated JSON-LD script");
    serde_json::from_str(&html[start..start + len]).expect("JSON-LD must parse")
}

/// Non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
