//! Score-based sentence selection for summarization
//!
//! Picks the highest-scoring sentences, restores reading order and optionally
//! fits the result into a character budget.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::types::{Sentence, SentenceScore, SummaryOptions, DEFAULT_RATIO};

/// Configuration for sentence selection
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectorConfig {
    /// Fraction of sentences to keep (defaults to 0.3)
    pub ratio: Option<f64>,
    /// Exact number of sentences to keep; takes precedence over `ratio`
    pub num_sentences: Option<usize>,
    /// Character budget for the joined summary
    pub max_chars: Option<usize>,
}

impl From<SummaryOptions> for SelectorConfig {
    fn from(options: SummaryOptions) -> Self {
        Self {
            ratio: options.ratio,
            num_sentences: options.sentence_count,
            max_chars: options.max_chars,
        }
    }
}

/// Result of sentence selection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryResult {
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
    /// Number of sentences the input was split into
    pub total_sentences: usize,
    /// Set when the character budget forced a hard cut of one sentence
    pub truncated: bool,
}

impl SummaryResult {
    /// The summary string: selected sentences joined by single spaces.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A selected sentence with its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSentence {
    /// The sentence (possibly hard-cut, see [`SummaryResult::truncated`])
    #[serde(flatten)]
    pub sentence: Sentence,
    /// Importance score the sentence was ranked by
    pub score: f64,
}

/// Top-k sentence selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set the fraction of sentences to keep
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.config.ratio = Some(ratio);
        self
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = Some(n);
        self
    }

    /// Set the character budget
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.config.max_chars = Some(max_chars);
        self
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Number of sentences to keep out of `n`.
    ///
    /// An explicit count is returned as is. Otherwise
    /// `max(1, min(n, round(n * ratio)))`, rounding half to even.
    pub fn target_count(&self, n: usize) -> usize {
        if let Some(count) = self.config.num_sentences {
            return count;
        }
        let ratio = self.config.ratio.unwrap_or(DEFAULT_RATIO);
        let rounded = (n as f64 * ratio).round_ties_even() as usize;
        rounded.min(n).max(1)
    }

    /// Select sentences by score.
    ///
    /// Ranking uses a stable sort, so equal scores keep their original
    /// relative order. The chosen sentences are returned in document order.
    pub fn select(&self, sentences: &[Sentence], scores: &[SentenceScore]) -> SummaryResult {
        if sentences.is_empty() {
            return SummaryResult::default();
        }

        let by_index: FxHashMap<usize, &Sentence> =
            sentences.iter().map(|s| (s.index, s)).collect();

        let mut ranked = scores.to_vec();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(self.target_count(sentences.len()));
        ranked.sort_by_key(|s| s.index);

        let chosen: Vec<SelectedSentence> = ranked
            .into_iter()
            .filter_map(|s| {
                by_index.get(&s.index).map(|&sentence| SelectedSentence {
                    sentence: sentence.clone(),
                    score: s.score,
                })
            })
            .collect();

        let (sentences_out, truncated) = match self.config.max_chars {
            Some(max_chars) => fit_to_budget(chosen, max_chars),
            None => (chosen, false),
        };

        SummaryResult {
            sentences: sentences_out,
            total_sentences: sentences.len(),
            truncated,
        }
    }
}

/// Keep sentences in order while the joined length stays within `max_chars`.
///
/// If not even the first sentence fits, it is cut to exactly `max_chars`
/// characters instead.
fn fit_to_budget(
    chosen: Vec<SelectedSentence>,
    max_chars: usize,
) -> (Vec<SelectedSentence>, bool) {
    let mut kept = Vec::with_capacity(chosen.len());
    let mut total = 0;
    for selected in &chosen {
        let separator = usize::from(!kept.is_empty());
        let add = selected.sentence.char_len() + separator;
        if total + add > max_chars {
            break;
        }
        total += add;
        kept.push(selected.clone());
    }
    if !kept.is_empty() {
        return (kept, false);
    }

    match chosen.into_iter().next() {
        Some(mut first) => {
            first.sentence.text = first.sentence.text.chars().take(max_chars).collect();
            (vec![first], true)
        }
        None => (Vec::new(), false),
    }
}
