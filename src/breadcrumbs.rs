//! Breadcrumb trails.
//!
//! A [`NavigationTrail`] is the ordered path from the site root to the page
//! being rendered. Rendering a trail produces two outputs from one pass:
//!
//! - **Visual markup**: a `<nav aria-label="Breadcrumb">` landmark wrapping an
//!   ordered list. Linked steps become anchors, the step without a link is
//!   plain text marked `aria-current="page"`, and a decorative `/` separator
//!   (hidden from assistive technology) sits before every step but the first.
//! - **Structured data**: a schema.org `BreadcrumbList` ([`StructuredTrail`])
//!   emitted as a `<script type="application/ld+json">` block.
//!
//! ## Structured Data Shape
//!
//! ```json
//! {"@context":"https://schema.org","@type":"BreadcrumbList","itemListElement":[
//!   {"@type":"ListItem","position":1,"name":"หน้าแรก","item":"/"},
//!   {"@type":"ListItem","position":2,"name":"บทความ","item":"/blog"},
//!   {"@type":"ListItem","position":3,"name":"วิธีใช้ Agent Skills ใน AntiGravity"}
//! ]}
//! ```
//!
//! `item` is the site origin concatenated with the step's target, verbatim.
//! Steps without a target carry no `item` key at all: crawlers treat an empty
//! value differently from an absent one.
//!
//! ## Malformed Trails
//!
//! [`render`] accepts any trail and never fails. Callers that want stronger
//! guarantees go through [`render_with_policy`]: under [`TrailPolicy::Strict`]
//! the first [`TrailError`] aborts the render, under
//! [`TrailPolicy::Permissive`] issues are logged and the trail renders anyway.

use maud::{Markup, PreEscaped, Render, html};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SCHEMA_CONTEXT: &str = "https://schema.org";
const LIST_TYPE: &str = "BreadcrumbList";
const ITEM_TYPE: &str = "ListItem";
const SEPARATOR: &str = "/";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrailError {
    #[error("Breadcrumb trail has no steps")]
    Empty,
    #[error("Breadcrumb step {position} has an empty label")]
    EmptyLabel { position: usize },
    #[error("Breadcrumb step {position} has no link but is not the current page")]
    UnlinkedStep { position: usize },
}

/// How malformed trails are handled at render time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailPolicy {
    /// Log every issue and render best-effort.
    #[default]
    Permissive,
    /// Reject the trail on the first issue.
    Strict,
}

impl TrailPolicy {
    /// Parse a policy name as written in config files and the environment.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "permissive" => Some(Self::Permissive),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

/// One entry in a breadcrumb trail.
///
/// Serialized as `{"label": ..., "href": ...}`; `target` is accepted as an
/// alias for `href` when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationStep {
    pub label: String,
    #[serde(
        rename = "href",
        alias = "target",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub target: Option<String>,
}

impl NavigationStep {
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: Some(target.into()),
        }
    }

    /// A step with no link: the page being rendered.
    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: None,
        }
    }

    pub fn is_current(&self) -> bool {
        self.target.is_none()
    }
}

/// Ordered steps from the site root to the current page.
///
/// Order is meaningful; labels and targets may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationTrail {
    steps: Vec<NavigationStep>,
}

impl NavigationTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a linked step.
    pub fn link(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.steps.push(NavigationStep::link(label, target));
        self
    }

    /// Append the unlinked current-page step.
    pub fn current(mut self, label: impl Into<String>) -> Self {
        self.steps.push(NavigationStep::current(label));
        self
    }

    pub fn steps(&self) -> &[NavigationStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Every problem with the trail, in step order.
    ///
    /// A well-formed trail has at least one step, no blank labels, and a
    /// target on every step except optionally the last.
    pub fn issues(&self) -> Vec<TrailError> {
        if self.steps.is_empty() {
            return vec![TrailError::Empty];
        }

        let last = self.steps.len() - 1;
        let mut issues = Vec::new();
        for (index, step) in self.steps.iter().enumerate() {
            let position = index + 1;
            if step.label.trim().is_empty() {
                issues.push(TrailError::EmptyLabel { position });
            }
            if index < last && step.is_current() {
                issues.push(TrailError::UnlinkedStep { position });
            }
        }
        issues
    }

    /// First problem with the trail, if any.
    pub fn validate(&self) -> Result<(), TrailError> {
        match self.issues().into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }

    /// Derive the schema.org `BreadcrumbList` for this trail.
    pub fn structured_data(&self, site_origin: &str) -> StructuredTrail {
        let entries = self
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| TrailEntry {
                kind: ITEM_TYPE,
                position: index + 1,
                name: step.label.clone(),
                item_url: step
                    .target
                    .as_ref()
                    .map(|target| format!("{site_origin}{target}")),
            })
            .collect();

        StructuredTrail {
            context: SCHEMA_CONTEXT,
            kind: LIST_TYPE,
            entries,
        }
    }
}

impl From<Vec<NavigationStep>> for NavigationTrail {
    fn from(steps: Vec<NavigationStep>) -> Self {
        Self { steps }
    }
}

/// schema.org `BreadcrumbList` document.
///
/// Field order matches the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredTrail {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "itemListElement")]
    pub entries: Vec<TrailEntry>,
}

/// A single `ListItem` of a [`StructuredTrail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrailEntry {
    #[serde(rename = "@type")]
    kind: &'static str,
    /// 1-based position in the trail.
    pub position: usize,
    pub name: String,
    /// Site origin + step target. Absent for the current page.
    #[serde(rename = "item", skip_serializing_if = "Option::is_none")]
    pub item_url: Option<String>,
}

impl StructuredTrail {
    /// Compact JSON, non-ASCII left as-is.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("breadcrumb list must serialize")
    }

    /// JSON safe to place inside a `<script>` element.
    ///
    /// `<` becomes the JSON escape `\u003c`, so a label can never close the
    /// element. The decoded value is identical to [`Self::to_json`].
    pub fn to_script_json(&self) -> String {
        self.to_json().replace('<', "\\u003c")
    }

    /// The `<script type="application/ld+json">` block.
    pub fn script(&self) -> Markup {
        html! {
            script type="application/ld+json" { (PreEscaped(self.to_script_json())) }
        }
    }
}

/// Both outputs of one render pass.
#[derive(Debug)]
pub struct RenderedTrail {
    pub nav: Markup,
    pub structured: StructuredTrail,
}

impl Render for RenderedTrail {
    fn render(&self) -> Markup {
        html! {
            (self.structured.script())
            (self.nav)
        }
    }
}

/// Render a trail. Never fails; malformed trails render as given.
pub fn render(trail: &NavigationTrail, site_origin: &str) -> RenderedTrail {
    RenderedTrail {
        nav: render_nav(trail),
        structured: trail.structured_data(site_origin),
    }
}

/// Render a trail, checking it first according to `policy`.
pub fn render_with_policy(
    trail: &NavigationTrail,
    site_origin: &str,
    policy: TrailPolicy,
) -> Result<RenderedTrail, TrailError> {
    match policy {
        TrailPolicy::Strict => trail.validate()?,
        TrailPolicy::Permissive => {
            for issue in trail.issues() {
                tracing::warn!(%issue, steps = trail.len(), "rendering malformed breadcrumb trail");
            }
        }
    }
    Ok(render(trail, site_origin))
}

fn render_nav(trail: &NavigationTrail) -> Markup {
    html! {
        nav.breadcrumbs aria-label="Breadcrumb" {
            ol {
                @for (index, step) in trail.steps().iter().enumerate() {
                    li {
                        @if index > 0 {
                            span.breadcrumb-separator aria-hidden="true" { (SEPARATOR) }
                        }
                        @if let Some(target) = &step.target {
                            a href=(target) { (step.label) }
                        } @else {
                            span.breadcrumb-current aria-current="page" { (step.label) }
                        }
                    }
                }
            }
        }
    }
}
