// src/crawl/resolve.rs
// =============================================================================
// Turns raw href values into absolute URLs.
//
// The rules are deliberately narrow:
// - "/path"       -> "<scheme>://<host>[:port]/path"
// - "http..."     -> kept exactly as written
// - "//host/path" -> dropped (protocol-relative)
// - anything else -> dropped (relative paths, mailto:, javascript:, #frag)
//
// Nothing is decoded or normalized. Two links that differ only by a
// trailing slash or a fragment are two different URLs.
// =============================================================================

use super::origin::Origin;

// Resolves one raw href against the origin of the page it was found on
//
// Returns None when the href is not something we follow
pub fn resolve(raw_href: &str, base: &Origin) -> Option<String> {
    if raw_href.starts_with("//") {
        return None;
    }

    if raw_href.starts_with('/') {
        return Some(format!("{}{}", base, raw_href));
    }

    if raw_href.starts_with("http") {
        return Some(raw_href.to_string());
    }

    None
}

// Resolves every href, silently dropping the ones we don't follow
pub fn resolve_all<I, S>(raw_hrefs: I, base: &Origin) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_hrefs
        .into_iter()
        .filter_map(|href| resolve(href.as_ref(), base))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Origin {
        Origin::parse("https://ex.com/some/page").unwrap()
    }

    #[test]
    fn test_root_relative_link() {
        assert_eq!(resolve("/a", &base()), Some("https://ex.com/a".to_string()));
        assert_eq!(
            resolve("/a/b?x=1#top", &base()),
            Some("https://ex.com/a/b?x=1#top".to_string())
        );
    }

    #[test]
    fn test_root_relative_keeps_port() {
        let base = Origin::parse("http://127.0.0.1:3000/").unwrap();
        assert_eq!(resolve("/x", &base), Some("http://127.0.0.1:3000/x".to_string()));
    }

    #[test]
    fn test_absolute_link_is_unchanged() {
        assert_eq!(
            resolve("https://other.com/c", &base()),
            Some("https://other.com/c".to_string())
        );
        assert_eq!(resolve("http://ex.com", &base()), Some("http://ex.com".to_string()));
    }

    #[test]
    fn test_http_prefix_is_case_sensitive() {
        assert_eq!(resolve("HTTPS://ex.com/a", &base()), None);
    }

    #[test]
    fn test_discarded_forms() {
        for href in [
            "about",
            "./about",
            "../up",
            "mailto:x@y.com",
            "javascript:void(0)",
            "#section",
            "//cdn.ex.com/lib.js",
            "tel:+123",
            "",
        ] {
            assert_eq!(resolve(href, &base()), None, "{} should be discarded", href);
        }
    }

    #[test]
    fn test_resolve_all_drops_unresolvable() {
        let links = resolve_all(["/a", "mailto:x@y.com", "https://ex.com/b"], &base());
        assert_eq!(links, vec!["https://ex.com/a", "https://ex.com/b"]);
    }
}
