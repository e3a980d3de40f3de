//! Path utilities for validation and normalization
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use exchange_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/exchange"));
/// assert!(is_valid_path("/order/123"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("kyc"));
/// assert!(!is_valid_path("/kyc/"));
/// assert!(!is_valid_path("/docs//how-it-works"));
/// assert!(!is_valid_path("/docs\\how-it-works"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations),
/// `Cow::Owned` when normalization was needed.
///
/// - Trailing slashes: `/terms/` → `/terms`
/// - Double slashes: `/docs//how-it-works` → `/docs/how-it-works`
/// - Backslashes: `\order\7` → `/order/7`
/// - Empty input: `""` → `/`
///
/// # Examples
///
/// ```
/// use exchange_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/about-us");
/// assert!(matches!(path, Cow::Borrowed("/about-us")));
///
/// assert_eq!(normalize_path("/about-us/"), "/about-us");
/// assert_eq!(normalize_path("\\order\\7"), "/order/7");
/// assert_eq!(normalize_path("/docs//how-it-works"), "/docs/how-it-works");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Splits a canonical path into its non-empty segments
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Joins a base path and a route path, keeping the result canonical
///
/// ```
/// use exchange_router::path::join_base;
///
/// assert_eq!(join_base("/app", "/kyc"), "/app/kyc");
/// assert_eq!(join_base("/app", "/"), "/app");
/// assert_eq!(join_base("", "/kyc"), "/kyc");
/// ```
pub fn join_base(base: &str, path: &str) -> String {
    let base = normalize_path(base);
    match (&*base, path) {
        ("/", p) => normalize_path(p).into_owned(),
        (b, "/") => b.to_string(),
        (b, p) => format!("{}{}", b, normalize_path(p)),
    }
}

/// Strips a base path prefix, returning the base-relative path
///
/// Returns `None` when `path` is not under `base`. The match is on whole
/// segments: `/application` is not under `/app`.
///
/// ```
/// use exchange_router::path::strip_base;
///
/// assert_eq!(strip_base("/app", "/app/kyc").as_deref(), Some("/kyc"));
/// assert_eq!(strip_base("/app", "/app").as_deref(), Some("/"));
/// assert_eq!(strip_base("/app", "/application"), None);
/// ```
pub fn strip_base(base: &str, path: &str) -> Option<String> {
    let base = normalize_path(base);
    let path = normalize_path(path);

    if base == "/" {
        return Some(path.into_owned());
    }

    let rest = path.strip_prefix(&*base)?;
    match rest {
        "" => Some("/".to_string()),
        r if r.starts_with('/') => Some(r.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_path() {
        assert!(is_valid_path("/"));
        assert!(is_valid_path("/vip-clients"));
        assert!(is_valid_path("/docs/how-it-works"));

        assert!(!is_valid_path(""));
        assert!(!is_valid_path("terms"));
        assert!(!is_valid_path("/terms/"));
        assert!(!is_valid_path("/terms//x"));
        assert!(!is_valid_path("/terms\\x"));
    }

    #[test]
    fn test_normalize_path_valid_is_borrowed() {
        assert!(matches!(normalize_path("/kyc"), Cow::Borrowed("/kyc")));
        assert!(matches!(normalize_path("/"), Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_path_repairs_input() {
        assert_eq!(normalize_path("/order/123/"), "/order/123");
        assert_eq!(normalize_path("/order///123"), "/order/123");
        assert_eq!(normalize_path("order/123"), "/order/123");
        assert_eq!(normalize_path("\\terms"), "/terms");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_segments() {
        let segs: Vec<&str> = segments("/docs/how-it-works").collect();
        assert_eq!(segs, vec!["docs", "how-it-works"]);
        assert_eq!(segments("/").count(), 0);
    }

    #[test]
    fn test_base_round_trip() {
        let full = join_base("/app/", "/order/9");
        assert_eq!(full, "/app/order/9");
        assert_eq!(strip_base("/app", &full).as_deref(), Some("/order/9"));
        assert_eq!(strip_base("/", "/order/9").as_deref(), Some("/order/9"));
        assert_eq!(strip_base("/app", "/other"), None);
    }
}
