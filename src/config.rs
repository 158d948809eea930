//! Site configuration module.
//!
//! Handles loading, validating, and layering site settings. Three layers are
//! applied in order, each overriding the one before:
//!
//! ```text
//! stock defaults  →  config.toml  →  environment (SITE_URL, BREADCRUMB_POLICY)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_url = ""                 # Origin prefixed to breadcrumb structured data
//! site_name = "Learn Agent Skills"
//! default_title = "Learn Agent Skills | เรียนรู้การใช้งาน Agent Skills"
//! tagline = "..."
//! lang = "th"
//!
//! [breadcrumbs]
//! policy = "permissive"         # or "strict"
//!
//! [colors.light]
//! background = "#ffffff"
//! foreground = "#171717"
//! muted = "#6b7280"             # Post meta, breadcrumbs, intro text
//! border = "#e5e7eb"
//! primary = "#2563eb"
//! card = "#f9fafb"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! foreground = "#ededed"
//! muted = "#9ca3af"
//! border = "#262626"
//! primary = "#60a5fa"
//! card = "#171717"
//! ```
//!
//! ## Site URL
//!
//! `site_url` is concatenated verbatim with each breadcrumb target (`/`,
//! `/blog`, ...) to build the `item` URLs search engines read. Leave it empty
//! for root-relative URLs. It must not end with `/`, otherwise every item
//! would contain a double slash.
//!
//! Unknown keys are rejected to catch typos early.

use crate::breadcrumbs::TrailPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable overriding [`SiteConfig::site_url`].
pub const SITE_URL_ENV: &str = "SITE_URL";
/// Environment variable overriding [`BreadcrumbConfig::policy`].
pub const BREADCRUMB_POLICY_ENV: &str = "BREADCRUMB_POLICY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Invalid value for {var}: {value:?}")]
    Env { var: &'static str, value: String },
}

/// Site configuration loaded from `config.toml` and the environment.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Origin prepended to breadcrumb targets in structured data.
    pub site_url: String,
    /// Site name, appended to every page title.
    pub site_name: String,
    /// Full title of the home page.
    pub default_title: String,
    /// Intro line on the home page.
    pub tagline: String,
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// Breadcrumb rendering settings.
    pub breadcrumbs: BreadcrumbConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: String::new(),
            site_name: "Learn Agent Skills".to_string(),
            default_title: "Learn Agent Skills | เรียนรู้การใช้งาน Agent Skills".to_string(),
            tagline: "เรียนรู้วิธีใช้งาน Agent Skills ใน AntiGravity เพื่อเพิ่มประสิทธิภาพการพัฒนาซอฟต์แวร์ด้วย AI"
                .to_string(),
            lang: "th".to_string(),
            breadcrumbs: BreadcrumbConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.site_url.is_empty() {
            if !(self.site_url.starts_with("http://") || self.site_url.starts_with("https://")) {
                return Err(ConfigError::Validation(format!(
                    "site_url must start with http:// or https:// (got {:?})",
                    self.site_url
                )));
            }
            if self.site_url.ends_with('/') {
                return Err(ConfigError::Validation(format!(
                    "site_url must not end with '/' (got {:?})",
                    self.site_url
                )));
            }
        }
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site_name must not be empty".into(),
            ));
        }
        if self.lang.trim().is_empty() {
            return Err(ConfigError::Validation("lang must not be empty".into()));
        }
        Ok(())
    }

    /// Page title following the `"%s | site name"` template.
    pub fn page_title(&self, title: &str) -> String {
        format!("{} | {}", title, self.site_name)
    }
}

/// Breadcrumb rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreadcrumbConfig {
    /// What to do with malformed trails: log and render, or fail the build.
    pub policy: TrailPolicy,
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Headings and body text.
    pub foreground: String,
    /// Secondary text: post meta, breadcrumbs, intro paragraphs.
    pub muted: String,
    /// Card borders and breadcrumb separators.
    pub border: String,
    /// Links and hover accents.
    pub primary: String,
    /// Card and callout background.
    pub card: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#171717".to_string(),
            muted: "#6b7280".to_string(),
            border: "#e5e7eb".to_string(),
            primary: "#2563eb".to_string(),
            card: "#f9fafb".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            foreground: "#ededed".to_string(),
            muted: "#9ca3af".to_string(),
            border: "#262626".to_string(),
            primary: "#60a5fa".to_string(),
            card: "#171717".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Apply environment overrides to a resolved config.
///
/// `lookup` returns the value of an environment variable; [`load_config`]
/// passes the process environment.
pub fn apply_env_overrides<F>(mut config: SiteConfig, lookup: F) -> Result<SiteConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(site_url) = lookup(SITE_URL_ENV) {
        config.site_url = site_url;
    }
    if let Some(raw) = lookup(BREADCRUMB_POLICY_ENV) {
        config.breadcrumbs.policy =
            TrailPolicy::from_name(&raw).ok_or(ConfigError::Env {
                var: BREADCRUMB_POLICY_ENV,
                value: raw,
            })?;
    }
    Ok(config)
}

/// Load config with an explicit environment lookup.
pub fn load_config_with<F>(dir: &Path, lookup: F) -> Result<SiteConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let base = stock_defaults_value();
    let merged = match load_raw_config(dir)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    let config = apply_env_overrides(config, lookup)?;
    config.validate()?;
    tracing::debug!(
        dir = %dir.display(),
        site_url = %config.site_url,
        policy = ?config.breadcrumbs.policy,
        "loaded site config"
    );
    Ok(config)
}

/// Load config from `config.toml` in `dir`, then the process environment.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    load_config_with(dir, |var| std::env::var(var).ok())
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Learn Agent Skills site configuration
# =====================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Environment variables override this file:
#   SITE_URL            -> site_url
#   BREADCRUMB_POLICY   -> breadcrumbs.policy

# Origin prefixed to breadcrumb targets in the JSON-LD structured data,
# e.g. "https://example.com". Empty keeps URLs root-relative.
# Must start with http:// or https:// and must not end with "/".
site_url = ""

# Site name, appended to page titles as "<page> | <site_name>".
site_name = "Learn Agent Skills"

# Title of the home page.
default_title = "Learn Agent Skills | เรียนรู้การใช้งาน Agent Skills"

# Intro line shown on the home page.
tagline = "เรียนรู้วิธีใช้งาน Agent Skills ใน AntiGravity เพื่อเพิ่มประสิทธิภาพการพัฒนาซอฟต์แวร์ด้วย AI"

# <html lang> attribute.
lang = "th"

# ---------------------------------------------------------------------------
# Breadcrumbs
# ---------------------------------------------------------------------------
[breadcrumbs]
# "permissive": log malformed trails and render them anyway.
# "strict":     fail the build on a malformed trail (empty label, or a step
#               other than the last without a link).
policy = "permissive"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
foreground = "#171717"
muted = "#6b7280"         # Post meta, breadcrumbs, intro text
border = "#e5e7eb"
primary = "#2563eb"
card = "#f9fafb"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
foreground = "#ededed"
muted = "#9ca3af"
border = "#262626"
primary = "#60a5fa"
card = "#171717"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = color_variables(&colors.light, "    "),
        dark = color_variables(&colors.dark, "        "),
    )
}

fn color_variables(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("background", &scheme.background),
        ("foreground", &scheme.foreground),
        ("muted", &scheme.muted),
        ("border", &scheme.border),
        ("primary", &scheme.primary),
        ("card", &scheme.card),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}--color-{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

// =============================================================================
// Tests
// =============================================================================
