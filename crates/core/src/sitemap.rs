//! Sitemap discovery.
//!
//! A sitemap declared in robots.txt is tried first; otherwise the usual
//! locations at the site root are probed in order.

use serde::{Deserialize, Serialize};

/// File names probed at the site root when robots.txt declares no sitemap.
pub const STANDARD_SITEMAP_PATHS: [&str; 3] = ["sitemap.xml", "sitemap_index.xml", "sitemaps.xml"];

/// A sitemap that was found and downloaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sitemap {
    pub url: String,
    pub content: String,
    /// Number of `<loc>` entries; 0 when the body is not XML.
    pub url_count: usize,
}

impl Sitemap {
    pub fn new(url: String, content: String) -> Self {
        let url_count = count_sitemap_urls(&content);
        Self { url, content, url_count }
    }
}

/// Counts `<loc>` elements in a sitemap or sitemap index.
#[cfg(feature = "sitemap")]
pub fn count_sitemap_urls(xml: &str) -> usize {
    match roxmltree::Document::parse(xml) {
        Ok(doc) => doc.descendants().filter(|node| node.has_tag_name("loc")).count(),
        Err(e) => {
            tracing::debug!(error = %e, "sitemap body is not valid XML");
            0
        }
    }
}

#[cfg(not(feature = "sitemap"))]
pub fn count_sitemap_urls(_xml: &str) -> usize {
    0
}

#[cfg(feature = "fetch")]
pub use locate::locate_sitemap;

#[cfg(feature = "fetch")]
mod locate {
    use reqwest::Client;
    use url::Url;

    use super::{STANDARD_SITEMAP_PATHS, Sitemap};
    use crate::fetch::fetch_optional_text;
    use crate::robots::parse_sitemap_directives;

    /// Finds and downloads the sitemap of the site `page_url` belongs to.
    ///
    /// Failed requests are logged and skipped; only the absence of any
    /// reachable sitemap yields `None`.
    pub async fn locate_sitemap(client: &Client, page_url: &Url, robots: Option<&str>) -> Option<Sitemap> {
        if let Some(declared) = robots.map(parse_sitemap_directives).and_then(|urls| urls.into_iter().next())
            && let Some(sitemap) = try_fetch(client, page_url.join(&declared).ok()).await
        {
            return Some(sitemap);
        }

        for path in STANDARD_SITEMAP_PATHS {
            let candidate = page_url.join(&format!("/{}", path)).ok();
            if let Some(sitemap) = try_fetch(client, candidate).await {
                return Some(sitemap);
            }
        }

        tracing::info!(url = %page_url, "no sitemap found");
        None
    }

    async fn try_fetch(client: &Client, url: Option<Url>) -> Option<Sitemap> {
        let url = url?;
        match fetch_optional_text(client, &url).await {
            Ok(Some(content)) => {
                tracing::debug!(url = %url, bytes = content.len(), "sitemap found");
                Some(Sitemap::new(url.to_string(), content))
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "sitemap request failed");
                None
            }
        }
    }
}
