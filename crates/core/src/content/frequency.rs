use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::clean::clean_text;
use super::filter::{is_stop_word, is_valid_word};
use super::language::{Language, detect_language};

/// Default number of keywords kept by [`get_word_frequency`].
pub const DEFAULT_TOP_N: usize = 50;

/// A keyword with its raw occurrence count among filtered tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub word: String,
    pub count: usize,
}

/// Rank the most frequent keyword candidates of `text`.
///
/// The text is classified, cleaned, split on whitespace and lowercased.
/// Tokens that pass [`is_valid_word`] and are not stop words are counted.
/// At most `top_n` entries are returned, by descending count; equal counts
/// keep the order in which the words first appeared.
///
/// Returns an empty list when the language cannot be determined.
pub fn get_word_frequency(text: &str, top_n: usize, min_length: usize) -> Vec<KeywordEntry> {
    let language = detect_language(text);
    if language == Language::Unknown {
        return Vec::new();
    }

    let cleaned = clean_text(text);

    let mut entries: Vec<KeywordEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for token in cleaned.split_whitespace().map(str::to_lowercase) {
        if !is_valid_word(&token, language, min_length) || is_stop_word(&token, language) {
            continue;
        }

        match positions.get(&token) {
            Some(&index) => entries[index].count += 1,
            None => {
                positions.insert(token.clone(), entries.len());
                entries.push(KeywordEntry { word: token, count: 1 });
            }
        }
    }

    // sort_by is stable, ties stay in first-occurrence order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(top_n);
    entries
}
