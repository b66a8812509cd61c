//! Single-page SEO analysis.
//!
//! A page goes through four independent stages: metadata extraction
//! ([`BasicInfo`]), structural counts ([`StructureReport`]), keyword and
//! language statistics ([`ContentReport`]) and, for live pages, transport
//! facts with robots.txt and sitemap discovery ([`TechnicalReport`]).
//!
//! ```rust
//! use seolens_core::{ContentConfig, Language, analyze_text};
//!
//! let report = analyze_text("Погода в Москве. Погода хорошая.", &ContentConfig::default());
//! assert_eq!(report.language, Language::Russian);
//! assert_eq!(report.top_keywords[0].word, "погода");
//! ```

pub mod content;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod metadata;
pub mod parse;
pub mod report;
pub mod robots;
pub mod sitemap;
pub mod structure;

pub use content::{
    ContentConfig, ContentReport, DensityEntry, KeywordEntry, Language, TextSource, analyze_text,
    analyze_text_content, clean_text, detect_language, get_word_frequency, is_stop_word, is_valid_word,
};
pub use error::{Result, SeoLensError};
pub use fetch::{fetch_file, fetch_stdin};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, FetchedPage, build_client, fetch_page};
pub use formatters::{TextConfig, report_to_json, report_to_text};
pub use metadata::BasicInfo;
pub use parse::{Document, Element};
#[cfg(feature = "fetch")]
pub use report::SeoAnalyzer;
pub use report::{AnalyzerConfig, AnalyzerConfigBuilder, SeoReport, TechnicalReport, analyze_html};
pub use robots::parse_sitemap_directives;
pub use sitemap::{Sitemap, count_sitemap_urls};
pub use structure::{HeadingStructure, StructureReport};
