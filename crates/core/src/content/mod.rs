//! Keyword and language statistics over the visible text of a page.
//!
//! The pipeline runs in four stages: [`detect_language`] classifies the raw
//! text, [`clean_text`] restricts it to letters and single spaces,
//! [`is_valid_word`] together with the stop-word sets filters tokens, and
//! [`get_word_frequency`] counts and ranks what survives.
//! [`analyze_text_content`] drives all of them and assembles a
//! [`ContentReport`].
//!
//! Every function here is pure. The stop-word sets and compiled patterns are
//! read-only statics, so the pipeline can run from any number of threads at
//! once.

pub mod analyzer;
pub mod clean;
pub mod filter;
pub mod frequency;
pub mod language;

pub use analyzer::{ContentConfig, ContentReport, DensityEntry, TextSource, analyze_text, analyze_text_content};
pub use clean::clean_text;
pub use filter::{DEFAULT_MIN_LENGTH, is_stop_word, is_valid_word, stop_words};
pub use frequency::{DEFAULT_TOP_N, KeywordEntry, get_word_frequency};
pub use language::{Language, detect_language};
