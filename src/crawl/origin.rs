// src/crawl/origin.rs
// =============================================================================
// The Origin of a URL: its (scheme, host, port) triple.
//
// Origins decide whether a link is "on-site". We parse URLs with the `url`
// crate and compare the three fields exactly, so look-alike hosts such as
// `example.com.evil.com` never match `example.com`.
//
// Default ports are folded by the url crate: `https://a.com:443/` and
// `https://a.com/` have the same origin.
// =============================================================================

use std::fmt;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl Origin {
    // Builds the origin of an already parsed URL
    // Returns None for URLs without a host (mailto:, data:, file:///...)
    pub fn of(url: &Url) -> Option<Self> {
        let host = url.host_str()?;
        Some(Self {
            scheme: url.scheme().to_string(),
            host: host.to_string(),
            port: url.port(),
        })
    }

    // Parses a URL string and returns its origin
    pub fn parse(url: &str) -> Option<Self> {
        Url::parse(url).ok().as_ref().and_then(Self::of)
    }
}

// Renders as `scheme://host[:port]`, which is exactly the prefix we glue
// root-relative links onto
impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}
