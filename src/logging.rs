//! Diagnostic logging.
//!
//! Built on `tracing`: library code emits events (`warn!` for malformed
//! breadcrumb trails, `info!` for the build summary, `debug!` per written
//! page) and the binary installs a `tracing_subscriber` fmt layer writing to
//! stderr. Stdout stays reserved for command output.
//!
//! The filter defaults to `info` and can be overridden with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=debug skills-blog build
//! RUST_LOG=warn skills-blog build
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_FILTER`].
pub fn build_filter() -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

/// Filter for a raw directive string; missing or unparsable falls back to
/// [`DEFAULT_FILTER`].
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(build_filter())
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_filter_shows_build_summary() {
        assert_eq!(filter_from(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn rust_log_overrides_default() {
        assert_eq!(
            filter_from(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            filter_from(Some("warn")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn invalid_rust_log_falls_back_to_default() {
        assert_eq!(
            filter_from(Some("skills_blog=loud")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
