//! Path resolution for resource URLs.

/// Resolves a resource path of the form `resource_uri[/suffix][/key]`.
///
/// The optional suffix comes before the optional key. A segment is appended
/// only when it is present and non-empty, so no double slashes or dangling
/// separators are produced.
///
/// The source this client descends from also dropped numeric-zero keys (a
/// loose truthiness check); here only the empty string counts as absent, so
/// a key of `0` renders as a real `/0` segment.
///
/// # Example
///
/// ```rust
/// use restkit::resolve_path;
///
/// assert_eq!(resolve_path("orders", None, None), "orders");
/// assert_eq!(resolve_path("orders", None, Some("42")), "orders/42");
/// assert_eq!(resolve_path("orders", Some("draft"), Some("42")), "orders/draft/42");
/// ```
#[must_use]
pub fn resolve_path(resource_uri: &str, suffix: Option<&str>, key: Option<&str>) -> String {
    let mut resolved = resource_uri.to_string();
    if let Some(suffix) = suffix.filter(|s| !s.is_empty()) {
        resolved.push('/');
        resolved.push_str(suffix);
    }
    if let Some(key) = key.filter(|k| !k.is_empty()) {
        resolved.push('/');
        resolved.push_str(key);
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_resource_uri() {
        assert_eq!(resolve_path("orders", None, None), "orders");
    }

    #[test]
    fn test_key_only() {
        assert_eq!(resolve_path("orders", None, Some("42")), "orders/42");
    }

    #[test]
    fn test_suffix_only() {
        assert_eq!(resolve_path("orders", Some("archived"), None), "orders/archived");
    }

    #[test]
    fn test_suffix_then_key_order() {
        assert_eq!(
            resolve_path("orders", Some("draft"), Some("42")),
            "orders/draft/42"
        );
    }

    #[test]
    fn test_empty_suffix_is_omitted() {
        assert_eq!(resolve_path("orders", Some(""), Some("42")), "orders/42");
    }

    #[test]
    fn test_empty_key_is_omitted() {
        assert_eq!(resolve_path("orders", None, Some("")), "orders");
    }

    #[test]
    fn test_zero_key_is_kept() {
        // Unlike the loose-truthiness original, "0" is a real key.
        assert_eq!(resolve_path("orders", None, Some("0")), "orders/0");
    }

    #[test]
    fn test_no_trailing_slash_artifacts() {
        let resolved = resolve_path("orders", Some(""), Some(""));
        assert!(!resolved.ends_with('/'));
        assert!(!resolved.contains("//"));
    }
}
