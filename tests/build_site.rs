//! End-to-end site build: renders into a temp directory and inspects the
//! written pages.

use skills_blog::breadcrumbs::TrailPolicy;
use skills_blog::config::{BreadcrumbConfig, SiteConfig};
use skills_blog::generate::{self, GenerateError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const JSON_LD_OPEN: &str = r#"<script type="application/ld+json">"#;

fn json_ld(html: &str) -> serde_json::Value {
    let start = html.find(JSON_LD_OPEN).expect("page has JSON-LD") + JSON_LD_OPEN.len();
    let len = html[start..].find("</script>").unwrap();
    serde_json::from_str(&html[start..start + len]).unwrap()
}

fn read(dir: &Path, relative: &str) -> String {
    fs::read_to_string(dir.join(relative))
        .unwrap_or_else(|e| panic!("can't read {relative}: {e}"))
}

fn build(config: &SiteConfig) -> (TempDir, generate::GenerateReport) {
    let tmp = TempDir::new().unwrap();
    let report = generate::generate(config, tmp.path()).unwrap();
    (tmp, report)
}

#[test]
fn writes_every_page() {
    let (tmp, report) = build(&SiteConfig::default());
    let outputs: Vec<&str> = report.pages.iter().map(|p| p.output.as_str()).collect();
    assert_eq!(
        outputs,
        vec![
            "index.html",
            "blog/index.html",
            "blog/how-to-use-agent-skills/index.html",
        ]
    );
    for output in outputs {
        assert!(tmp.path().join(output).is_file(), "{output} missing");
    }
}

#[test]
fn report_counts_breadcrumb_steps() {
    let (_tmp, report) = build(&SiteConfig::default());
    let counts: Vec<usize> = report.pages.iter().map(|p| p.breadcrumbs).collect();
    assert_eq!(counts, vec![0, 2, 3]);
}

#[test]
fn article_page_has_json_ld_and_nav() {
    let (tmp, _) = build(&SiteConfig::default());
    let html = read(tmp.path(), "blog/how-to-use-agent-skills/index.html");

    assert!(html.contains(r#"<nav class="breadcrumbs" aria-label="Breadcrumb">"#));
    assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);

    let json = json_ld(&html);
    assert_eq!(json["@context"], "https://schema.org");
    assert_eq!(json["@type"], "BreadcrumbList");
    let items = json["itemListElement"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    for (index, item) in items.iter().enumerate() {
        assert_eq!(item["@type"], "ListItem");
        assert_eq!(item["position"], index + 1);
    }
    assert_eq!(items[0]["item"], "/");
    assert_eq!(items[1]["item"], "/blog");
    assert!(items[2].get("item").is_none());
}

#[test]
fn site_url_prefixes_structured_items_only() {
    let config = SiteConfig {
        site_url: "https://example.com".to_string(),
        ..SiteConfig::default()
    };
    let (tmp, _) = build(&config);
    let html = read(tmp.path(), "blog/index.html");

    let json = json_ld(&html);
    assert_eq!(json["itemListElement"][0]["item"], "https://example.com/");
    assert!(json["itemListElement"][1].get("item").is_none());
    // Visual breadcrumb link stays relative
    assert!(html.contains(r#"<a href="/">หน้าแรก</a>"#));
}

#[test]
fn builds_are_byte_identical() {
    let config = SiteConfig::default();
    let (first, _) = build(&config);
    let (second, _) = build(&config);
    for page in [
        "index.html",
        "blog/index.html",
        "blog/how-to-use-agent-skills/index.html",
    ] {
        assert_eq!(read(first.path(), page), read(second.path(), page), "{page}");
    }
}

#[test]
fn strict_policy_builds_well_formed_site() {
    let config = SiteConfig {
        breadcrumbs: BreadcrumbConfig {
            policy: TrailPolicy::Strict,
        },
        ..SiteConfig::default()
    };
    let tmp = TempDir::new().unwrap();
    let report = match generate::generate(&config, tmp.path()) {
        Ok(report) => report,
        Err(GenerateError::Trail { page, source }) => {
            panic!("strict policy rejected the trail on {page}: {source}")
        }
        Err(err) => panic!("build failed: {err}"),
    };
    assert_eq!(report.pages.len(), 3);
    assert!(report.pages.iter().skip(1).all(|page| page.breadcrumbs > 0));
}

#[test]
fn stylesheet_is_inlined_with_config_colors() {
    let mut config = SiteConfig::default();
    config.colors.light.primary = "#abcdef".to_string();
    let (tmp, _) = build(&config);
    let html = read(tmp.path(), "index.html");
    assert!(html.contains("--color-primary: #abcdef;"));
    assert!(html.contains(".breadcrumb-separator"));
}
