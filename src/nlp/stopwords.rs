//! Stopword filtering
//!
//! Common English function words carry no signal for sentence importance and
//! are excluded from the frequency table and from sentence word counts. The
//! default list is a closed, hardcoded set; custom lists are supported for
//! callers embedding the pipeline elsewhere.

use rustc_hash::FxHashSet;

/// The built-in English stopword list.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "and", "the", "or", "but", "if", "while", "is", "am", "are", "was", "were", "be",
    "been", "being", "to", "of", "in", "for", "on", "with", "as", "by", "at", "from", "that",
    "this", "these", "those", "it", "its", "into", "about", "over", "after", "before", "than",
    "then", "so", "such", "no", "nor", "not", "too", "very", "can", "could", "should", "would",
    "may", "might", "must", "do", "does", "did", "doing", "done", "have", "has", "had", "having",
    "you", "your", "yours", "we", "our", "ours", "they", "their", "theirs", "he", "his", "she",
    "her", "hers", "i", "me", "my", "mine", "them", "us", "him", "herself", "himself", "itself",
    "ourselves", "yourselves", "themselves", "there", "here", "when", "where", "why", "how",
    "what", "which", "who", "whom", "because", "up", "down", "out", "off", "again", "further",
    "once", "also", "just", "only", "even", "ever", "more", "most", "some", "any", "each", "few",
    "both", "all", "other", "another", "much", "many",
];

/// A filter for removing stopwords from token streams
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// The built-in English filter
    pub fn english() -> Self {
        Self::from_list(ENGLISH_STOPWORDS)
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Check if a token is a stopword.
    ///
    /// Tokens coming out of [`super::tokenizer::tokenize`] are already
    /// lowercase; anything else is folded first.
    pub fn is_stopword(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.stopwords.contains(&word.to_lowercase())
        } else {
            self.stopwords.contains(word)
        }
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
