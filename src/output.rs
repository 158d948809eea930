//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! 001 Learn Agent Skills | เรียนรู้การใช้งาน Agent Skills → index.html
//! 002 บทความ → blog/index.html (2 crumbs)
//! 003 วิธีใช้ Agent Skills ใน AntiGravity → blog/how-to-use-agent-skills/index.html (3 crumbs)
//!
//! Generated 3 pages
//! ```
//!
//! ## Trail
//!
//! ```text
//! 001 หน้าแรก → https://example.com/
//! 002 บทความ → https://example.com/blog
//! 003 วิธีใช้ Agent Skills ใน AntiGravity (current page)
//! ```
//!
//! ## Check
//!
//! ```text
//! /blog: ok
//! /blog/how-to-use-agent-skills: 1 issue
//!     Breadcrumb step 2 has an empty label
//! ```

use crate::breadcrumbs::StructuredTrail;
use crate::content::PageTrail;
use crate::generate::GenerateReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the pages written by a build.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .pages
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let crumbs = if page.breadcrumbs > 0 {
                format!(" ({})", plural(page.breadcrumbs, "crumb", "crumbs"))
            } else {
                String::new()
            };
            format!(
                "{} {} \u{2192} {}{}",
                format_index(i + 1),
                page.title,
                page.output,
                crumbs
            )
        })
        .collect();

    lines.push(String::new());
    lines.push(format!(
        "Generated {}",
        plural(report.pages.len(), "page", "pages")
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Trail
// ============================================================================

/// Format a structured trail, one line per entry.
pub fn format_trail_output(structured: &StructuredTrail) -> Vec<String> {
    structured
        .entries
        .iter()
        .map(|entry| match &entry.item_url {
            Some(url) => format!(
                "{} {} \u{2192} {}",
                format_index(entry.position),
                entry.name,
                url
            ),
            None => format!("{} {} (current page)", format_index(entry.position), entry.name),
        })
        .collect()
}

pub fn print_trail_output(structured: &StructuredTrail) {
    for line in format_trail_output(structured) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format validation results for every page trail.
pub fn format_check_output(pages: &[PageTrail]) -> Vec<String> {
    let mut lines = Vec::new();
    for page in pages {
        let issues = page.trail.issues();
        if issues.is_empty() {
            lines.push(format!("{}: ok", page.path));
            continue;
        }
        lines.push(format!(
            "{}: {}",
            page.path,
            plural(issues.len(), "issue", "issues")
        ));
        for issue in issues {
            lines.push(format!("    {}", issue));
        }
    }
    lines
}

pub fn print_check_output(pages: &[PageTrail]) {
    for line in format_check_output(pages) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breadcrumbs::NavigationTrail;
    use crate::generate::GeneratedPage;
    use crate::test_helpers::*;

    #[test]
    fn generate_output_lists_pages_with_crumb_counts() {
        let report = GenerateReport {
            pages: vec![
                GeneratedPage {
                    title: "Home".to_string(),
                    output: "index.html".to_string(),
                    breadcrumbs: 0,
                },
                GeneratedPage {
                    title: "บทความ".to_string(),
                    output: "blog/index.html".to_string(),
                    breadcrumbs: 2,
                },
            ],
        };
        let lines = format_generate_output(&report);
        assert_eq!(
            lines,
            vec![
                "001 Home \u{2192} index.html",
                "002 บทความ \u{2192} blog/index.html (2 crumbs)",
                "",
                "Generated 2 pages",
            ]
        );
    }

    #[test]
    fn trail_output_marks_current_page() {
        let structured = article_trail_fixture().structured_data("https://example.com");
        let lines = format_trail_output(&structured);
        assert_eq!(
            lines,
            vec![
                "001 หน้าแรก \u{2192} https://example.com/",
                "002 บทความ \u{2192} https://example.com/blog",
                "003 วิธีใช้ Agent Skills ใน AntiGravity (current page)",
            ]
        );
    }

    #[test]
    fn check_output_reports_issues_under_page() {
        let pages = vec![
            PageTrail {
                path: "/blog".to_string(),
                trail: NavigationTrail::new().link("หน้าแรก", "/").current("บทความ"),
            },
            PageTrail {
                path: "/broken".to_string(),
                trail: NavigationTrail::new().current("หน้าแรก").current(""),
            },
        ];
        let lines = format_check_output(&pages);
        assert_eq!(
            lines,
            vec![
                "/blog: ok",
                "/broken: 2 issues",
                "    Breadcrumb step 1 has no link but is not the current page",
                "    Breadcrumb step 2 has an empty label",
            ]
        );
    }

    #[test]
    fn singular_counts() {
        assert_eq!(plural(1, "page", "pages"), "1 page");
        assert_eq!(plural(0, "page", "pages"), "0 pages");
    }
}
