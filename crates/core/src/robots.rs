//! robots.txt retrieval and `Sitemap:` directive parsing.

use url::Url;

#[cfg(feature = "fetch")]
use crate::Result;

/// The robots.txt location for the origin of `page_url`.
///
/// Path, query and fragment of the page are dropped.
pub fn robots_url(page_url: &Url) -> Option<Url> {
    page_url.join("/robots.txt").ok()
}

/// Sitemap URLs declared in a robots.txt body, in file order.
///
/// Directive names are matched case-insensitively; the value is everything
/// after the first colon, trimmed.
pub fn parse_sitemap_directives(robots: &str) -> Vec<String> {
    robots
        .lines()
        .map(str::trim)
        .filter(|line| line.to_lowercase().starts_with("sitemap:"))
        .filter_map(|line| line.split_once(':').map(|(_, value)| value.trim().to_string()))
        .filter(|value| !value.is_empty())
        .collect()
}

/// Fetches the robots.txt of the site `page_url` belongs to.
///
/// Returns `Ok(None)` when the site answers with anything but 200.
#[cfg(feature = "fetch")]
pub async fn fetch_robots(client: &reqwest::Client, page_url: &Url) -> Result<Option<String>> {
    let Some(url) = robots_url(page_url) else {
        return Ok(None);
    };

    let robots = crate::fetch::fetch_optional_text(client, &url).await?;
    match &robots {
        Some(body) => tracing::debug!(url = %url, bytes = body.len(), "robots.txt found"),
        None => tracing::info!(url = %url, "no robots.txt found"),
    }
    Ok(robots)
}
