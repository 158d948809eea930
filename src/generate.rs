//! HTML site generation.
//!
//! Renders every page of the site with the shared root layout and writes the
//! result to the output directory.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): site name, tagline, latest posts
//! - **Blog index** (`/blog/index.html`): breadcrumbs and a card per post
//! - **Articles** (`/blog/{slug}/index.html`): breadcrumbs, header, table of
//!   contents, Markdown body, author footer
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! └── blog/
//!     ├── index.html
//!     └── how-to-use-agent-skills/
//!         └── index.html
//! ```
//!
//! Every page with breadcrumbs embeds the trail's JSON-LD `BreadcrumbList`
//! right before the `<nav aria-label="Breadcrumb">` landmark.
//!
//! ## CSS
//!
//! `static/style.css` is embedded at compile time; color custom properties
//! are generated from config and prepended.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::breadcrumbs::{self, NavigationTrail, TrailError};
use crate::config::{self, SiteConfig};
use crate::content::{self, BLOG_INTRO, BLOG_LABEL, BLOG_PATH, BlogPost};
use crate::markdown;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Breadcrumb error on {page}: {source}")]
    Trail {
        page: String,
        #[source]
        source: TrailError,
    },
}

/// A page written by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub title: String,
    /// Output path relative to the output directory.
    pub output: String,
    /// Number of breadcrumb steps rendered on the page (0 = none).
    pub breadcrumbs: usize,
}

#[derive(Debug, Default)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const TOC_HEADING: &str = "สารบัญ";
const LATEST_HEADING: &str = "บทความล่าสุด";
const ALL_POSTS_LINK: &str = "อ่านบทความทั้งหมด";

/// Full stylesheet: config colors followed by the static rules.
pub fn site_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    )
}

pub fn generate(config: &SiteConfig, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let css = site_css(config);
    let posts = content::posts();
    let mut report = GenerateReport::default();

    fs::create_dir_all(output_dir)?;

    write_page(output_dir, "index.html", render_home(config, posts, &css))?;
    report.pages.push(GeneratedPage {
        title: config.default_title.clone(),
        output: "index.html".to_string(),
        breadcrumbs: 0,
    });

    let blog_trail = content::blog_index_trail();
    let blog_index =
        render_blog_index(config, posts, &blog_trail, &css).map_err(|source| {
            GenerateError::Trail {
                page: BLOG_PATH.to_string(),
                source,
            }
        })?;
    write_page(output_dir, "blog/index.html", blog_index)?;
    report.pages.push(GeneratedPage {
        title: BLOG_LABEL.to_string(),
        output: "blog/index.html".to_string(),
        breadcrumbs: blog_trail.len(),
    });

    for post in posts {
        let trail = content::article_trail(post);
        let article = render_article(config, post, &trail, &css).map_err(|source| {
            GenerateError::Trail {
                page: post.path(),
                source,
            }
        })?;
        let output = format!("blog/{}/index.html", post.slug);
        write_page(output_dir, &output, article)?;
        report.pages.push(GeneratedPage {
            title: post.title.to_string(),
            output,
            breadcrumbs: trail.len(),
        });
    }

    tracing::info!(
        pages = report.pages.len(),
        output = %output_dir.display(),
        "site generated"
    );
    Ok(report)
}

fn write_page(output_dir: &Path, relative: &str, markup: Markup) -> std::io::Result<()> {
    let path = output_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, markup.into_string())?;
    tracing::debug!(path = %path.display(), "wrote page");
    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the root layout shared by every page.
fn base_document(config: &SiteConfig, title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(config.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders a trail under the configured origin and policy.
fn breadcrumb_block(config: &SiteConfig, trail: &NavigationTrail) -> Result<Markup, TrailError> {
    let rendered =
        breadcrumbs::render_with_policy(trail, &config.site_url, config.breadcrumbs.policy)?;
    Ok(html! { (rendered) })
}

/// Date and read time line shared by post cards and article headers.
fn post_meta(post: &BlogPost) -> Markup {
    html! {
        div.post-meta {
            time datetime=(post.published) { (post.date_label) }
            span aria-hidden="true" { "•" }
            span { "อ่าน " (post.read_time) }
        }
    }
}

fn post_list(posts: &[BlogPost]) -> Markup {
    html! {
        ul.post-list {
            @for post in posts {
                li {
                    a.post-card href=(post.path()) {
                        article {
                            (post_meta(post))
                            h2 { (post.title) }
                            p { (post.description) }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the home page.
fn render_home(config: &SiteConfig, posts: &[BlogPost], css: &str) -> Markup {
    let content = html! {
        main.page {
            div.container {
                header.page-header {
                    h1 { (config.site_name) }
                    p.lead { (config.tagline) }
                }
                section {
                    h2.section-title { (LATEST_HEADING) }
                    (post_list(posts))
                    a.more-link href=(BLOG_PATH) { (ALL_POSTS_LINK) }
                }
            }
        }
    };

    base_document(config, &config.default_title, css, content)
}

/// Renders the blog index with its breadcrumbs and post cards.
fn render_blog_index(
    config: &SiteConfig,
    posts: &[BlogPost],
    trail: &NavigationTrail,
    css: &str,
) -> Result<Markup, TrailError> {
    let crumbs = breadcrumb_block(config, trail)?;

    let content = html! {
        main.page {
            div.container {
                (crumbs)
                header.page-header {
                    h1 { (BLOG_LABEL) }
                    p.lead { (BLOG_INTRO) }
                }
                section {
                    (post_list(posts))
                }
            }
        }
    };

    Ok(base_document(config, &config.page_title(BLOG_LABEL), css, content))
}

/// Renders a single article.
fn render_article(
    config: &SiteConfig,
    post: &BlogPost,
    trail: &NavigationTrail,
    css: &str,
) -> Result<Markup, TrailError> {
    let crumbs = breadcrumb_block(config, trail)?;
    let toc = markdown::table_of_contents(post.body);
    let body_html = markdown::render_markdown(post.body);

    let content = html! {
        main.page {
            article.container {
                (crumbs)
                header.article-header {
                    (post_meta(post))
                    h1 { (post.title) }
                    p.lead { (post.lead) }
                }
                @if !toc.is_empty() {
                    nav.toc aria-label=(TOC_HEADING) {
                        h2 { (TOC_HEADING) }
                        ol {
                            @for entry in &toc {
                                li {
                                    a href={ "#" (entry.id) } { (entry.title) }
                                }
                            }
                        }
                    }
                }
                div.article-body {
                    (PreEscaped(body_html))
                }
                footer.article-footer {
                    p.author { (post.author) }
                    p.author-bio { (post.author_bio) }
                }
            }
        }
    };

    Ok(base_document(config, &config.page_title(post.title), css, content))
}

// ============================================================================
// Tests
// ============================================================================
