// src/sitemap/xml.rs
// =============================================================================
// Serializes a SiteMap as sitemaps.org XML:
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://example.com/</loc>
//     </url>
//   </urlset>
//
// quick-xml's serde serializer does the escaping and the two-space indent.
// Fields named "@..." become attributes, everything else becomes elements.
// =============================================================================

use quick_xml::se::Serializer;
use serde::Serialize;

use super::SiteMap;
use crate::error::SiteMapError;

const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Serialize)]
#[serde(rename = "urlset")]
struct UrlSet<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "url")]
    urls: Vec<UrlEntry<'a>>,
}

#[derive(Serialize)]
struct UrlEntry<'a> {
    loc: &'a str,
}

pub(super) fn render(sitemap: &SiteMap) -> Result<String, SiteMapError> {
    let urlset = UrlSet {
        xmlns: SITEMAP_XMLNS,
        urls: sitemap.urls().iter().map(|loc| UrlEntry { loc }).collect(),
    };

    let mut body = String::new();
    let mut serializer = Serializer::new(&mut body);
    serializer.indent(' ', 2);
    urlset
        .serialize(serializer)
        .map_err(|e| SiteMapError::Xml(e.to_string()))?;

    Ok(format!("{}\n{}", XML_HEADER, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sitemap() {
        let sitemap = SiteMap::new(vec![
            "https://ex.com/a".to_string(),
            "https://ex.com/".to_string(),
        ]);
        let xml = render(&sitemap).unwrap();

        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://ex.com/</loc>
  </url>
  <url>
    <loc>https://ex.com/a</loc>
  </url>
</urlset>"#;
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_loc_text_is_escaped() {
        let sitemap = SiteMap::new(vec!["https://ex.com/search?a=1&b=<2>".to_string()]);
        let xml = render(&sitemap).unwrap();

        assert!(
            xml.contains("<loc>https://ex.com/search?a=1&amp;b=&lt;2&gt;</loc>"),
            "{}",
            xml
        );
    }
}
