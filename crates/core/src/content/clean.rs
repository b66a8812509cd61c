use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static NON_LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^а-яёА-ЯЁa-zA-Z\s]").expect("valid letter pattern"));

/// Restrict text to Cyrillic and Latin letters separated by single spaces.
///
/// Steps, each over the whole string:
/// 1. drop residual `<...>` markup,
/// 2. collapse whitespace runs,
/// 3. replace every non-letter, non-whitespace character with a space,
/// 4. collapse whitespace again,
/// 5. trim.
///
/// Case is preserved. The output contains no `<`, no runs of spaces and no
/// edge whitespace, so cleaning it again returns it unchanged.
pub fn clean_text(text: &str) -> String {
    let text = TAG_RE.replace_all(text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    let text = NON_LETTER_RE.replace_all(&text, " ");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}
