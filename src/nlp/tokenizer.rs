//! Word tokenization
//!
//! Tokens are maximal runs of ASCII letters, digits and apostrophes,
//! lowercased, with one leading and one trailing apostrophe removed so that
//! quoted words (`'tis`, `dogs'`) normalize while contractions (`don't`) keep
//! their interior apostrophe.

use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9']+").expect("word pattern is valid"));

/// Split a sentence into normalized word tokens.
///
/// Order of appearance is preserved. Runs made only of apostrophes normalize
/// to nothing and are dropped, so a sentence without word characters yields
/// an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .filter_map(|m| {
            let word = strip_quote(m.as_str());
            (!word.is_empty()).then(|| word.to_ascii_lowercase())
        })
        .collect()
}

/// Remove a single leading and a single trailing apostrophe.
fn strip_quote(word: &str) -> &str {
    let word = word.strip_prefix('\'').unwrap_or(word);
    word.strip_suffix('\'').unwrap_or(word)
}

/// Returns `true` for tokens made entirely of ASCII digits.
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
