//! Page report assembly.
//!
//! This module provides the main entry points: [`SeoAnalyzer`] for fetching
//! and analyzing a live page, and [`analyze_html`] for HTML that is already
//! at hand.
//!
//! # Example
//!
//! ```rust,no_run
//! use seolens_core::{AnalyzerConfig, SeoAnalyzer};
//!
//! # async fn example() -> seolens_core::Result<()> {
//! let analyzer = SeoAnalyzer::new(AnalyzerConfig::default())?;
//! let report = analyzer.analyze_url("https://example.com").await?;
//! println!("{:?}", report.content.top_keywords.first());
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use url::Url;

use crate::content::{ContentConfig, ContentReport, analyze_text_content};
use crate::metadata::BasicInfo;
use crate::parse::Document;
use crate::sitemap::Sitemap;
use crate::structure::StructureReport;
use crate::{Result, SeoLensError};

#[cfg(feature = "fetch")]
use crate::fetch::FetchConfig;

/// Configuration for [`SeoAnalyzer`].
///
/// # Example
///
/// ```rust
/// use seolens_core::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder().top_n(20).include_sitemap(false).build();
/// assert_eq!(config.content.top_n, 20);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// HTTP settings for page, robots.txt and sitemap requests.
    #[cfg(feature = "fetch")]
    pub fetch: FetchConfig,

    /// Keyword extraction settings.
    pub content: ContentConfig,

    /// Whether to download robots.txt (default: true).
    pub include_robots: bool,

    /// Whether to look for a sitemap (default: true).
    pub include_sitemap: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            #[cfg(feature = "fetch")]
            fetch: FetchConfig::default(),
            content: ContentConfig::default(),
            include_robots: true,
            include_sitemap: true,
        }
    }
}

impl AnalyzerConfig {
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }
}

/// Builder for AnalyzerConfig.
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Sets the number of keywords reported.
    pub fn top_n(mut self, value: usize) -> Self {
        self.config.content.top_n = value;
        self
    }

    /// Sets the minimum keyword length.
    pub fn min_length(mut self, value: usize) -> Self {
        self.config.content.min_length = value;
        self
    }

    /// Sets the HTTP timeout in seconds.
    #[cfg(feature = "fetch")]
    pub fn timeout(mut self, secs: u64) -> Self {
        self.config.fetch.timeout = secs;
        self
    }

    /// Sets the User-Agent header.
    #[cfg(feature = "fetch")]
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Sets whether robots.txt is downloaded.
    pub fn include_robots(mut self, value: bool) -> Self {
        self.config.include_robots = value;
        self
    }

    /// Sets whether a sitemap is looked up.
    pub fn include_sitemap(mut self, value: bool) -> Self {
        self.config.include_sitemap = value;
        self
    }

    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport-level facts about a fetched page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalReport {
    /// Request plus download time in seconds, rounded to two decimals.
    pub load_time_seconds: f64,
    pub page_size_bytes: usize,
    pub status_code: u16,
    pub content_encoding: String,
    pub server: String,
    pub detected_encoding: String,
    /// robots.txt body, when the site has one.
    pub robots: Option<String>,
    pub sitemap: Option<Sitemap>,
}

/// The complete SEO report for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoReport {
    /// Page URL, if known.
    pub url: Option<String>,
    pub status: String,
    pub basic_info: BasicInfo,
    pub structure: StructureReport,
    pub content: ContentReport,
    /// Only present for pages fetched over HTTP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<TechnicalReport>,
}

impl SeoReport {
    fn from_document(doc: &Document, url: Option<String>, content: &ContentConfig) -> Self {
        let basic_info = doc.extract_basic_info();
        let structure = doc.analyze_structure();
        let content = analyze_text_content(doc, content);

        tracing::debug!(
            images = structure.total_images,
            keywords = content.keyword_density.len(),
            language = %content.language,
            "document analyzed"
        );

        Self {
            url,
            status: "success".to_string(),
            basic_info,
            structure,
            content,
            technical: None,
        }
    }

    /// Gets the report as a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(SeoLensError::from)
    }
}

/// Analyzes HTML that was obtained elsewhere (file, stdin, cache).
///
/// Runs every stage that needs no network access; the report has no
/// `technical` section.
///
/// # Example
///
/// ```rust
/// use seolens_core::{AnalyzerConfig, analyze_html};
///
/// let html = "<html><head><title>Docs</title></head><body><p>Rustaceans write rust code</p></body></html>";
/// let report = analyze_html(html, None, &AnalyzerConfig::default()).unwrap();
/// assert_eq!(report.basic_info.title.as_deref(), Some("Docs"));
/// ```
pub fn analyze_html(html: &str, url: Option<&str>, config: &AnalyzerConfig) -> Result<SeoReport> {
    let base_url = url
        .map(|u| Url::parse(u).map_err(|e| SeoLensError::InvalidUrl(format!("{}: {}", u, e))))
        .transpose()?;
    let doc = Document::parse_with_url(html, base_url)?;

    Ok(SeoReport::from_document(
        &doc,
        doc.base_url().map(|u| u.to_string()),
        &config.content,
    ))
}

#[cfg(feature = "fetch")]
pub use live::SeoAnalyzer;

#[cfg(feature = "fetch")]
mod live {
    use reqwest::Client;

    use super::{AnalyzerConfig, SeoReport, TechnicalReport};
    use crate::Result;
    use crate::fetch::{build_client, fetch_page};
    use crate::parse::Document;
    use crate::robots::fetch_robots;
    use crate::sitemap::locate_sitemap;

    /// Fetches pages and builds full reports.
    ///
    /// One analyzer holds one HTTP client; share it between requests.
    #[derive(Debug, Clone)]
    pub struct SeoAnalyzer {
        config: AnalyzerConfig,
        client: Client,
    }

    impl SeoAnalyzer {
        pub fn new(config: AnalyzerConfig) -> Result<Self> {
            let client = build_client(&config.fetch)?;
            Ok(Self { config, client })
        }

        pub fn config(&self) -> &AnalyzerConfig {
            &self.config
        }

        /// Fetches `url` and produces a report with all sections.
        ///
        /// Only the page request itself can fail the analysis; robots.txt and
        /// sitemap problems are logged and leave those fields empty.
        pub async fn analyze_url(&self, url: &str) -> Result<SeoReport> {
            tracing::info!(url = %url, "analyzing page");
            let page = fetch_page(&self.client, url, &self.config.fetch).await?;

            let mut report = {
                let doc = Document::parse_with_url(&page.html, Some(page.url.clone()))?;
                SeoReport::from_document(&doc, Some(url.to_string()), &self.config.content)
            };

            let robots = if self.config.include_robots {
                fetch_robots(&self.client, &page.url).await.unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "robots.txt request failed");
                    None
                })
            } else {
                None
            };

            let sitemap = if self.config.include_sitemap {
                locate_sitemap(&self.client, &page.url, robots.as_deref()).await
            } else {
                None
            };

            report.technical = Some(TechnicalReport {
                load_time_seconds: (page.load_time.as_secs_f64() * 100.0).round() / 100.0,
                page_size_bytes: page.size_bytes,
                status_code: page.status,
                content_encoding: page.content_encoding,
                server: page.server,
                detected_encoding: page.encoding,
                robots,
                sitemap,
            });

            tracing::info!(
                url = %url,
                words = report.content.word_count,
                language = %report.content.language,
                "analysis finished"
            );
            Ok(report)
        }
    }
}
