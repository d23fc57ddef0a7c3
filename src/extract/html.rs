// src/extract/html.rs
// =============================================================================
// This module extracts href values from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which recovers from broken markup the same way
//   browsers do (so parsing never fails)
//
// Rust concepts:
// - LazyLock: a static that is built the first time it is used
// - Iterators: filter_map over the selected elements
// =============================================================================

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::LinkExtractor;

// All <a> tags that carry an href attribute
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("`a[href]` is a valid selector"));

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    // Returns hrefs in document order, exactly as written
    fn extract_hrefs(&self, body: &str) -> Vec<String> {
        let document = Html::parse_document(body);

        let hrefs = document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect();

        hrefs
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a unit struct (`struct HtmlLinkExtractor;`)?
//    - It has no data, but it gives us a type to implement the trait on
//    - Tests can swap in another LinkExtractor without touching the crawler
//
// 2. Why is expect() OK on the selector?
//    - "a[href]" is a constant, so it either always parses or never does
//    - A failure here is a programmer error, not bad user input
//
// 3. Why doesn't this return a Result?
//    - html5ever repairs malformed markup instead of rejecting it
//    - There is no input we could get that makes extraction "fail"
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(html: &str) -> Vec<String> {
        HtmlLinkExtractor.extract_hrefs(html)
    }

    #[test]
    fn test_extract_raw_hrefs_in_order() {
        let html = r#"
            <a href="/a">A</a>
            <a href="https://ex.com/b">B</a>
            <a href="https://other.com/c">C</a>
            <a href="mailto:x@y.com">Mail</a>
        "#;
        assert_eq!(
            hrefs(html),
            vec!["/a", "https://ex.com/b", "https://other.com/c", "mailto:x@y.com"]
        );
    }

    #[test]
    fn test_anchor_without_href_is_ignored() {
        let html = r#"<a name="top">Top</a><a href="/x">X</a><link href="/style.css">"#;
        assert_eq!(hrefs(html), vec!["/x"]);
    }

    #[test]
    fn test_malformed_markup_degrades_gracefully() {
        let html = r#"<div><a href="/one">one<p><a href="/two">two</div></span><a href="/three"#;
        let links = hrefs(html);
        assert!(links.contains(&"/one".to_string()));
        assert!(links.contains(&"/two".to_string()));
    }

    #[test]
    fn test_non_html_body() {
        assert!(hrefs("{\"not\": \"html\"}").is_empty());
        assert!(hrefs("").is_empty());
    }

    #[test]
    fn test_href_is_not_rewritten() {
        assert_eq!(hrefs(r#"<a href="about#team">s</a>"#), vec!["about#team"]);
    }
}
