//! Word-frequency scoring
//!
//! Two passes over the sentence set: first a table of normalized word
//! importance is built from every sentence, then each sentence is scored
//! against that table. The table needs the whole document, so sentences
//! cannot be scored in a streaming fashion.

use rustc_hash::FxHashMap;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{is_numeric, tokenize};
use crate::types::{Sentence, SentenceScore};

/// Weight of the logarithmic length bonus applied to sentence scores.
pub const LENGTH_BONUS: f64 = 0.15;

/// Normalized word importance: the most frequent qualifying word maps to
/// `1.0`, every other word to its count divided by that maximum.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    weights: FxHashMap<String, f64>,
}

impl WordFrequencies {
    /// Build the table from all sentences.
    ///
    /// Stopwords and purely numeric tokens are not counted. If nothing
    /// qualifies the table is empty and every lookup yields `0.0`.
    pub fn build(sentences: &[Sentence], stopwords: &StopwordFilter) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for sentence in sentences {
            for word in tokenize(&sentence.text) {
                if stopwords.is_stopword(&word) || is_numeric(&word) {
                    continue;
                }
                *counts.entry(word).or_insert(0) += 1;
            }
        }

        let max_count = match counts.values().copied().max() {
            Some(max) => max as f64,
            None => return Self::default(),
        };

        let weights = counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / max_count))
            .collect();
        Self { weights }
    }

    /// Importance of `word`, `0.0` when unknown.
    pub fn get(&self, word: &str) -> f64 {
        self.weights.get(word).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Words sorted by importance (descending), ties alphabetical.
    pub fn top_n(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self
            .weights
            .iter()
            .map(|(word, &weight)| (word.as_str(), weight))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}

/// Score every sentence against the frequency table.
///
/// The score is the mean importance of the sentence's non-stopword tokens,
/// multiplied by `1 + 0.15 * ln(1 + word_count)`. Numeric tokens are absent
/// from the table but still count toward `word_count`. Sentences without any
/// non-stopword token score `0.0`.
pub fn score_sentences(
    sentences: &[Sentence],
    frequencies: &WordFrequencies,
    stopwords: &StopwordFilter,
) -> Vec<SentenceScore> {
    sentences
        .iter()
        .map(|sentence| {
            let words: Vec<String> = tokenize(&sentence.text)
                .into_iter()
                .filter(|w| !stopwords.is_stopword(w))
                .collect();
            SentenceScore::new(sentence.index, score_words(&words, frequencies))
        })
        .collect()
}

fn score_words(words: &[String], frequencies: &WordFrequencies) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let word_count = words.len() as f64;
    let mean = words.iter().map(|w| frequencies.get(w)).sum::<f64>() / word_count;
    mean * (1.0 + LENGTH_BONUS * (1.0 + word_count).ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::splitter::split_sentences;

    fn setup(text: &str) -> (Vec<Sentence>, StopwordFilter) {
        (split_sentences(text), StopwordFilter::english())
    }

    #[test]
    fn test_most_frequent_word_is_one() {
        let (sentences, stopwords) = setup("The cat sat. The cat played. Dogs bark loudly.");
        let freq = WordFrequencies::build(&sentences, &stopwords);

        assert!((freq.get("cat") - 1.0).abs() < 1e-12);
        assert!((freq.get("sat") - 0.5).abs() < 1e-12);
        assert!((freq.get("loudly") - 0.5).abs() < 1e-12);
        assert_eq!(freq.get("the"), 0.0);
        assert_eq!(freq.len(), 6);
    }

    #[test]
    fn test_numbers_excluded_from_table() {
        let (sentences, stopwords) = setup("Revenue was 100 in 2020. Revenue grew.");
        let freq = WordFrequencies::build(&sentences, &stopwords);

        assert_eq!(freq.get("100"), 0.0);
        assert_eq!(freq.get("2020"), 0.0);
        assert!((freq.get("revenue") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_stopwords_yields_empty_table() {
        let (sentences, stopwords) = setup("It is what it is. And so on.");
        let freq = WordFrequencies::build(&sentences, &stopwords);
        assert!(freq.is_empty());

        let scores = score_sentences(&sentences, &freq, &stopwords);
        assert!(scores.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn test_empty_sentences_yield_empty_table() {
        let freq = WordFrequencies::build(&[], &StopwordFilter::english());
        assert!(freq.is_empty());
        assert_eq!(freq.get("anything"), 0.0);
    }

    #[test]
    fn test_score_formula() {
        let (sentences, stopwords) = setup("The cat sat. The cat played. Dogs bark loudly.");
        let freq = WordFrequencies::build(&sentences, &stopwords);
        let scores = score_sentences(&sentences, &freq, &stopwords);

        // cat (1.0) + sat (0.5) over two words
        let expected_first = 0.75 * (1.0 + 0.15 * 3f64.ln());
        // dogs, bark, loudly at 0.5 each
        let expected_last = 0.5 * (1.0 + 0.15 * 4f64.ln());

        assert_eq!(scores.len(), 3);
        assert!((scores[0].score - expected_first).abs() < 1e-12);
        assert!((scores[1].score - expected_first).abs() < 1e-12);
        assert!((scores[2].score - expected_last).abs() < 1e-12);
        assert_eq!(scores[2].index, 2);
    }

    #[test]
    fn test_numbers_dilute_sentence_score() {
        // "42" is not in the table but still counts as a word of the sentence
        let (sentences, stopwords) = setup("Apples 42. Apples.");
        let freq = WordFrequencies::build(&sentences, &stopwords);
        let scores = score_sentences(&sentences, &freq, &stopwords);

        let with_number = 0.5 * (1.0 + 0.15 * 3f64.ln());
        let without = 1.0 * (1.0 + 0.15 * 2f64.ln());
        assert!((scores[0].score - with_number).abs() < 1e-12);
        assert!((scores[1].score - without).abs() < 1e-12);
    }

    #[test]
    fn test_wordless_sentence_scores_zero() {
        let sentences = vec![Sentence::new("...", 0), Sentence::new("Rust rocks.", 1)];
        let stopwords = StopwordFilter::english();
        let freq = WordFrequencies::build(&sentences, &stopwords);
        let scores = score_sentences(&sentences, &freq, &stopwords);

        assert_eq!(scores[0], SentenceScore::new(0, 0.0));
        assert!(scores[1].score > 0.0);
    }

    #[test]
    fn test_top_n() {
        let (sentences, stopwords) = setup("The cat sat. The cat played. Dogs bark loudly.");
        let freq = WordFrequencies::build(&sentences, &stopwords);
        let top = freq.top_n(2);

        assert_eq!(top[0].0, "cat");
        assert_eq!(top[1].0, "bark");
    }
}
