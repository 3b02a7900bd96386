//! Test logging shared by the solitaire unit and integration test binaries.
//!
//! ```bash
//! TEST_LOG=solitaire=debug cargo test -p solitaire -- --nocapture
//! ```

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Directive used when neither variable is set.
pub const DEFAULT_DIRECTIVE: &str = "warn";

static INSTALLED: OnceCell<String> = OnceCell::new();

/// Pick the filter directive: `TEST_LOG`, then `RUST_LOG`, then `warn`.
/// Blank values are skipped.
pub fn directive_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ["TEST_LOG", "RUST_LOG"]
        .iter()
        .filter_map(|name| lookup(name))
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// Install a test-writer subscriber once per process. Later calls are
/// no-ops, and a subscriber installed by someone else is left alone.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let directive = directive_from(|name| std::env::var(name).ok());
        let filter =
            EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init();
        directive
    });
}

/// Directive chosen by the first `init` call, if any.
pub fn installed_directive() -> Option<&'static str> {
    INSTALLED.get().map(String::as_str)
}
