//! Unique names for scratch files written by tests.

use ulid::Ulid;

/// Generate a unique string with the given prefix, `{prefix}-{ulid}`.
///
/// ```
/// use solitaire_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("game");
/// let b = unique_str("game");
/// assert_ne!(a, b);
/// assert!(a.starts_with("game-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique save file name, `{prefix}-{ulid}.save.json`.
///
/// ```
/// use solitaire_test_support::unique_helpers::unique_save_name;
///
/// let name = unique_save_name("roundtrip");
/// assert!(name.starts_with("roundtrip-"));
/// assert!(name.ends_with(".save.json"));
/// ```
pub fn unique_save_name(prefix: &str) -> String {
    format!("{}.save.json", unique_str(prefix))
}
