use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::language::Language;

/// Default minimum token length (in characters) for keyword candidates.
pub const DEFAULT_MIN_LENGTH: usize = 4;

static CYRILLIC_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[а-яё]+$").expect("valid pattern"));
static LATIN_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]+$").expect("valid pattern"));

#[rustfmt::skip]
const RUSSIAN_STOP_WORDS: &[&str] = &[
    "и", "в", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она", "так", "его",
    "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее", "мне", "было", "вот",
    "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда", "даже", "ну", "вдруг", "ли",
    "если", "уже", "или", "ни", "быть", "был", "него", "до", "вас", "нибудь", "опять", "уж", "вам",
    "сказал", "ведь", "там", "потом", "себя", "ничего", "ей", "может", "они", "тут", "где", "есть",
    "надо", "ней", "для", "мы", "тебя", "их", "чем", "была", "сам", "чтоб", "без", "будто", "человек",
    "чего", "раз", "тоже", "себе", "под", "жизнь", "будет", "ж", "тогда", "кто", "этот", "того",
    "потому", "этого", "какой", "совсем", "ним", "здесь", "этом", "один", "почти", "мой", "тем",
    "чтобы", "нее", "были", "куда", "зачем", "всех", "никогда", "можно", "при", "наконец", "два",
    "об", "другой", "хоть", "после", "над", "больше", "тот", "через", "эти", "нас", "про", "всего",
    "них", "какая", "много", "разве", "три", "эту", "моя", "впрочем", "хорошо", "свою", "этой", "перед",
    "иногда", "лучше", "чуть", "том", "нельзя", "такой", "им", "более", "всегда", "конечно", "всю",
    "между", "также", "которые", "которых", "которой", "которую", "который", "которого", "которым",
    "которая", "которое", "это",
];

#[rustfmt::skip]
const ENGLISH_STOP_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on", "with",
    "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we", "say", "her",
    "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so", "up",
    "out", "if", "about", "who", "get", "which", "go", "me", "when", "make", "can", "like", "time",
    "no", "just", "him", "know", "take", "people", "into", "year", "your", "good", "some", "could",
    "them", "see", "other", "than", "then", "now", "look", "only", "come", "its", "over", "think",
    "also", "back", "after", "use", "two", "how", "our", "work", "first", "well", "way", "even",
    "new", "want", "because", "any", "these", "give", "day", "most", "us", "is", "was", "are", "been",
    "has", "had", "were", "said", "each", "where", "may", "find", "before", "right", "too", "here",
    "should", "such", "being", "made", "might", "must", "does", "did",
];

static RUSSIAN: LazyLock<HashSet<&'static str>> = LazyLock::new(|| RUSSIAN_STOP_WORDS.iter().copied().collect());
static ENGLISH: LazyLock<HashSet<&'static str>> = LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());
static NONE: LazyLock<HashSet<&'static str>> = LazyLock::new(HashSet::new);

/// The stop-word set for a language. [`Language::Unknown`] has an empty set.
pub fn stop_words(language: Language) -> &'static HashSet<&'static str> {
    match language {
        Language::Russian => &RUSSIAN,
        Language::English => &ENGLISH,
        Language::Unknown => &NONE,
    }
}

/// Whether `word` (already lowercased) is a stop word for `language`.
pub fn is_stop_word(word: &str, language: Language) -> bool {
    stop_words(language).contains(word)
}

/// Check that a token is usable as a keyword candidate.
///
/// A token qualifies when it has at least `min_length` characters and is made
/// only of letters of the alphabet belonging to `language`. Mixed-script
/// tokens fail for both languages, and nothing passes for
/// [`Language::Unknown`]. Stop words are checked separately.
pub fn is_valid_word(word: &str, language: Language, min_length: usize) -> bool {
    if word.chars().count() < min_length {
        return false;
    }

    let word = word.to_lowercase();
    match language {
        Language::Russian => CYRILLIC_WORD_RE.is_match(&word),
        Language::English => LATIN_WORD_RE.is_match(&word),
        Language::Unknown => false,
    }
}
