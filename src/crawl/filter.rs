// src/crawl/filter.rs
// =============================================================================
// Keeps only the links that stay on the site we are mapping.
//
// A link is kept when its parsed origin (scheme, host, port) equals the
// reference origin. Links that don't parse as URLs are dropped.
// =============================================================================

use super::origin::Origin;

pub fn filter_same_origin<I>(candidates: I, base: &Origin) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    candidates
        .into_iter()
        .filter(|candidate| Origin::parse(candidate).as_ref() == Some(base))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keeps_same_origin() {
        let base = Origin::parse("https://ex.com/").unwrap();
        let kept = filter_same_origin(
            strings(&["https://ex.com/a", "https://other.com/c", "https://ex.com/b"]),
            &base,
        );
        assert_eq!(kept, strings(&["https://ex.com/a", "https://ex.com/b"]));
    }

    #[test]
    fn test_rejects_lookalike_host() {
        let base = Origin::parse("https://example.com/").unwrap();
        let kept = filter_same_origin(
            strings(&[
                "https://example.com.evil.com/",
                "https://example.community/",
                "https://sub.example.com/",
            ]),
            &base,
        );
        assert!(kept.is_empty(), "unexpected matches: {:?}", kept);
    }

    #[test]
    fn test_rejects_other_scheme_and_port() {
        let base = Origin::parse("https://ex.com/").unwrap();
        let kept = filter_same_origin(
            strings(&["http://ex.com/a", "https://ex.com:8443/a", "https://ex.com:443/a"]),
            &base,
        );
        // The explicit default port is the same origin
        assert_eq!(kept, strings(&["https://ex.com:443/a"]));
    }

    #[test]
    fn test_drops_unparseable() {
        let base = Origin::parse("https://ex.com/").unwrap();
        let kept = filter_same_origin(strings(&["httpfoo", "http://"]), &base);
        assert!(kept.is_empty());
    }
}
