//! Sentence segmentation
//!
//! A heuristic splitter: a boundary is a terminator (`.`, `!`, `?`) followed
//! by whitespace and an uppercase ASCII letter or digit, unless the word in
//! front of the terminator looks like an initial (`J.`), a two-letter
//! capitalized abbreviation (`Dr.`, `St.`) or one of a few fixed
//! abbreviations (`etc.`, `e.g.`, `i.e.`, `Mrs.`).
//!
//! This is not a parser. A sentence that genuinely ends in an initial
//! (`...met Agent K. He left.`) is merged with the next one.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Sentence;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+[A-Z0-9]").expect("boundary pattern is valid"));

/// Abbreviations that never end a sentence, matched case-sensitively against
/// the text right before the terminator.
pub const FIXED_ABBREVIATIONS: &[&str] = &["etc", "e.g", "i.e", "Mr", "Mrs", "Dr"];

const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Collapse every whitespace run to a single ASCII space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

/// Split text into trimmed, non-empty sentences in reading order.
///
/// Empty or whitespace-only input yields no sentences. Text with no
/// terminator at all is returned whole as a single sentence.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return Vec::new();
    }
    if !normalized.contains(TERMINATORS) {
        return vec![Sentence::new(normalized, 0)];
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    for m in BOUNDARY_RE.find_iter(&normalized) {
        // terminators are single-byte
        let cut = m.start() + 1;
        if is_abbreviation(&normalized[..m.start()]) {
            continue;
        }
        pieces.push(&normalized[start..cut]);
        start = cut;
    }
    pieces.push(&normalized[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(index, piece)| Sentence::new(piece, index))
        .collect()
}

/// Does the text in front of a terminator end in something that is not a
/// sentence end?
fn is_abbreviation(before: &str) -> bool {
    let fixed = FIXED_ABBREVIATIONS.iter().any(|abbr| {
        before.strip_suffix(abbr).is_some_and(starts_word)
    });
    if fixed {
        return true;
    }

    let mut rev = before.chars().rev();
    let last = rev.next();
    let prev = rev.next();
    match (last, prev) {
        // single initial: "J."
        (Some(c), _) if c.is_ascii_uppercase() && starts_word(&before[..before.len() - 1]) => true,
        // capitalized two-letter abbreviation: "Dr.", "St."
        (Some(b), Some(a))
            if a.is_ascii_uppercase()
                && b.is_ascii_lowercase()
                && starts_word(&before[..before.len() - 2]) =>
        {
            true
        }
        _ => false,
    }
}

/// `true` when a word may start right after `rest` (start of text or a
/// non-word character).
fn starts_word(rest: &str) -> bool {
    rest.chars().next_back().map_or(true, |c| !is_word_char(c))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
