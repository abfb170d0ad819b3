use regex::Regex;
use std::sync::LazyLock;

/// Namespace searched for built-in changes when none is configured.
pub const DEFAULT_NAMESPACE: &str = "delta.change";

static NAMESPACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("namespace pattern is valid")
});

/// Whether `namespace` is a dotted identifier path such as `delta.change`.
pub fn is_valid(namespace: &str) -> bool {
    NAMESPACE_PATTERN.is_match(namespace)
}

/// Whether `path` lies inside `namespace` (equal to it, or nested below it).
pub fn contains(namespace: &str, path: &str) -> bool {
    match path.strip_prefix(namespace) {
        Some("") => true,
        Some(rest) => rest.starts_with('.'),
        None => false,
    }
}
