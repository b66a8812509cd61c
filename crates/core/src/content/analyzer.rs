use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::clean::clean_text;
use super::filter::DEFAULT_MIN_LENGTH;
use super::frequency::{DEFAULT_TOP_N, KeywordEntry, get_word_frequency};
use super::language::{Language, detect_language};

/// Anything that can hand over the visible text of a document.
///
/// Implementations must already have left out `script` and `style` content.
/// Whitespace between elements may be kept or collapsed; the analysis treats
/// any whitespace run as a single separator.
pub trait TextSource {
    fn visible_text(&self) -> String;
}

impl TextSource for str {
    fn visible_text(&self) -> String {
        self.to_string()
    }
}

impl TextSource for String {
    fn visible_text(&self) -> String {
        self.clone()
    }
}

/// Tuning for keyword extraction.
///
/// # Example
///
/// ```rust
/// use seolens_core::ContentConfig;
///
/// let config = ContentConfig::builder().top_n(20).min_length(5).build();
/// assert_eq!(config.top_n, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Maximum number of keywords reported (default: 50).
    pub top_n: usize,
    /// Minimum keyword length in characters (default: 4).
    pub min_length: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self { top_n: DEFAULT_TOP_N, min_length: DEFAULT_MIN_LENGTH }
    }
}

impl ContentConfig {
    pub fn builder() -> ContentConfigBuilder {
        ContentConfigBuilder::default()
    }
}

/// Builder for [`ContentConfig`].
#[derive(Debug, Default)]
pub struct ContentConfigBuilder {
    config: ContentConfig,
}

impl ContentConfigBuilder {
    /// Sets the number of keywords to keep.
    pub fn top_n(mut self, value: usize) -> Self {
        self.config.top_n = value;
        self
    }

    /// Sets the minimum keyword length.
    pub fn min_length(mut self, value: usize) -> Self {
        self.config.min_length = value;
        self
    }

    pub fn build(self) -> ContentConfig {
        self.config
    }
}

/// A keyword with its share of the page's total word count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityEntry {
    pub word: String,
    pub count: usize,
    /// Percentage of all words, rounded to two decimals.
    pub density: f64,
}

/// Content statistics for one document.
///
/// `word_count` and `unique_words` come from the raw whitespace-split text,
/// so they describe the whole page; the keyword lists only cover filtered
/// candidates. When cleaning splits raw tokens apart (`rust-rust-rust`),
/// `word_count` is the cleaned token total instead, so keyword counts never
/// sum past it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentReport {
    pub word_count: usize,
    pub char_count: usize,
    pub unique_words: usize,
    pub language: Language,
    pub top_keywords: Vec<KeywordEntry>,
    pub keyword_density: Vec<DensityEntry>,
}

impl ContentReport {
    /// Report for text in which no keyword could be found.
    fn without_keywords(text: &str) -> Self {
        Self {
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
            unique_words: 0,
            language: Language::Unknown,
            top_keywords: Vec::new(),
            keyword_density: Vec::new(),
        }
    }
}

/// Compute content statistics for the visible text of a document.
///
/// # Example
///
/// ```rust
/// use seolens_core::{ContentConfig, Language, analyze_text_content};
///
/// let report = analyze_text_content("Rust keeps rust programmers happy", &ContentConfig::default());
/// assert_eq!(report.language, Language::English);
/// assert_eq!(report.top_keywords[0].word, "rust");
/// ```
pub fn analyze_text_content<S: TextSource + ?Sized>(source: &S, config: &ContentConfig) -> ContentReport {
    let text = source.visible_text();

    let frequency = get_word_frequency(&text, config.top_n, config.min_length);
    if frequency.is_empty() {
        return ContentReport::without_keywords(&text);
    }

    // keywords come from cleaned tokens, which can outnumber the raw ones
    let raw_words = text.split_whitespace().count();
    let total_words = raw_words.max(clean_text(&text).split_whitespace().count());
    let lowered = text.to_lowercase();
    let unique_words = lowered.split_whitespace().collect::<HashSet<_>>().len();

    let keyword_density = frequency
        .iter()
        .map(|entry| DensityEntry {
            word: entry.word.clone(),
            count: entry.count,
            density: density(entry.count, total_words),
        })
        .collect();

    ContentReport {
        word_count: total_words,
        char_count: text.chars().count(),
        unique_words,
        language: detect_language(&text),
        top_keywords: frequency,
        keyword_density,
    }
}

/// Shorthand for [`analyze_text_content`] over a plain string.
pub fn analyze_text(text: &str, config: &ContentConfig) -> ContentReport {
    analyze_text_content(text, config)
}

fn density(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = count as f64 / total as f64 * 100.0;
    // halves go to the even neighbour: 1 of 32 words is 3.12
    (percent * 100.0).round_ties_even() / 100.0
}
