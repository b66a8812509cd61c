use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse script-based language classification.
///
/// Only two buckets exist. Ukrainian, Belarusian and every other
/// Cyrillic-script text lands in [`Language::Russian`], every Latin-script
/// text in [`Language::English`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Language {
    /// Short code used in reports (`ru`, `en`, `unknown`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Russian => "ru",
            Self::English => "en",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Classify text by counting Cyrillic (`а`..`я`) and Latin (`a`..`z`) letters.
///
/// Characters are compared after lowercasing; anything outside the two ranges
/// (digits, punctuation, `ё`, other alphabets) is ignored. When both scripts
/// occur the larger count wins and a tie goes to English.
pub fn detect_language(text: &str) -> Language {
    let mut cyrillic = 0usize;
    let mut latin = 0usize;

    for c in text.chars() {
        // multi-char lowercasings (İ -> i + U+0307) only matter for their base letter
        let lower = c.to_lowercase().next().unwrap_or(c);
        match lower {
            'а'..='я' => cyrillic += 1,
            'a'..='z' => latin += 1,
            _ => {}
        }
    }

    match (cyrillic, latin) {
        (0, 0) => Language::Unknown,
        (_, 0) => Language::Russian,
        (0, _) => Language::English,
        (c, l) if c > l => Language::Russian,
        _ => Language::English,
    }
}
