//! # Skills Blog
//!
//! Static renderer for the Learn Agent Skills blog: a home page, a blog index
//! and articles, all sharing one root layout. The reusable piece is the
//! breadcrumb component, which turns a page's position in the site into both
//! accessible navigation and a schema.org `BreadcrumbList` for search engines.
//!
//! # Breadcrumbs
//!
//! ```text
//! NavigationTrail ──render──┬──▶ <nav aria-label="Breadcrumb"><ol>…</ol></nav>
//!   [{label, href?}]        └──▶ <script type="application/ld+json">BreadcrumbList</script>
//! ```
//!
//! Rendering is a pure function of the trail and the configured site origin:
//! no I/O, no shared state, identical input gives byte-identical output. See
//! [`breadcrumbs`] for the exact contract.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`breadcrumbs`] | Trail types, visual + JSON-LD rendering, validation policy |
//! | [`config`] | `config.toml` + environment layering, validation, color CSS |
//! | [`content`] | Compiled-in posts and the per-page breadcrumb trails |
//! | [`markdown`] | Article Markdown rendering with heading anchors and TOC |
//! | [`generate`] | Maud page templates and writing the site to disk |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Permissive by Default
//!
//! Trails are authored by hand per page, so a malformed one (a blank label, a
//! middle step without a link) is a content bug, not a runtime fault. By
//! default it is logged and rendered as written. Setting
//! `breadcrumbs.policy = "strict"` turns the same issues into build failures,
//! and `skills-blog check` reports them without building.
//!
//! ## Site Origin
//!
//! Visual links stay root-relative. Only the structured data uses the
//! configured `site_url` (or `SITE_URL`), prefixed verbatim, because crawlers
//! expect absolute URLs there. An empty origin yields root-relative items.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): templates are Rust
//! code, checked at compile time, and all interpolation is auto-escaped.

pub mod breadcrumbs;
pub mod config;
pub mod content;
pub mod generate;
pub mod logging;
pub mod markdown;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
