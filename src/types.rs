//! Core data types shared across the summarization pipeline.

use serde::{Deserialize, Serialize};

/// Default fraction of sentences kept when neither a ratio nor an explicit
/// count is supplied.
pub const DEFAULT_RATIO: f64 = 0.3;

/// A sentence produced by the splitter.
///
/// `index` is the position in the source text, assigned once at split time
/// and carried unchanged through scoring and selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Trimmed sentence text
    pub text: String,
    /// Position in the source text (0-based)
    pub index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// Length in characters (Unicode scalar values), as used by the
    /// character budget.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Importance score of one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentenceScore {
    /// Index of the scored sentence
    pub index: usize,
    /// Mean word importance with length bonus applied
    pub score: f64,
}

impl SentenceScore {
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }
}

/// Caller-facing knobs for a single summarization call.
///
/// Values are assumed to be validated already (see [`crate::form`] and
/// [`crate::pipeline::validation`]): `ratio` in `(0, 1]`, counts positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryOptions {
    /// Fraction of sentences to keep
    #[serde(default)]
    pub ratio: Option<f64>,
    /// Exact number of sentences to keep; wins over `ratio`
    #[serde(default)]
    pub sentence_count: Option<usize>,
    /// Character budget for the joined summary
    #[serde(default)]
    pub max_chars: Option<usize>,
}

impl SummaryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = Some(ratio);
        self
    }

    pub fn with_sentence_count(mut self, count: usize) -> Self {
        self.sentence_count = Some(count);
        self
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }
}

/// Returns `true` if `ratio` lies in `(0, 1]`.
pub fn is_valid_ratio(ratio: f64) -> bool {
    ratio > 0.0 && ratio <= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_scalars() {
        let s = Sentence::new("Café au lait.", 0);
        assert_eq!(s.char_len(), 13);
        assert_eq!(s.text.len(), 14);
    }

    #[test]
    fn test_options_builder() {
        let opts = SummaryOptions::new()
            .with_ratio(0.5)
            .with_sentence_count(2)
            .with_max_chars(80);
        assert_eq!(opts.ratio, Some(0.5));
        assert_eq!(opts.sentence_count, Some(2));
        assert_eq!(opts.max_chars, Some(80));
    }

    #[test]
    fn test_ratio_range() {
        assert!(is_valid_ratio(1.0));
        assert!(is_valid_ratio(0.01));
        assert!(!is_valid_ratio(0.0));
        assert!(!is_valid_ratio(1.5));
        assert!(!is_valid_ratio(f64::NAN));
    }
}
