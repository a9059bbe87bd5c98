//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! [`Summarizer::run`] executes the four stages in order, threading
//! artifacts between them and notifying a [`PipelineObserver`] at each
//! boundary:
//!
//! 1. Split the text into sentences
//! 2. Build the word-frequency table from all sentences
//! 3. Score every sentence against the table
//! 4. Select sentences by score under the count / ratio / budget limits
//!
//! Each run is independent: the summarizer holds only immutable
//! configuration and can be shared across threads.

use crate::nlp::splitter::split_sentences;
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, STAGE_FREQUENCIES, STAGE_SCORE,
    STAGE_SELECT, STAGE_SPLIT,
};
use crate::summarizer::frequency::{score_sentences, WordFrequencies};
use crate::summarizer::selector::{SelectorConfig, SentenceSelector, SummaryResult};
use crate::types::SummaryOptions;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Number of highest-weighted words included in the debug log.
#[cfg(feature = "tracing")]
const TOP_WORDS_LOGGED: usize = 5;

/// Extractive summarizer: a configured four-stage pipeline.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    stopwords: StopwordFilter,
    selector: SentenceSelector,
}

impl Summarizer {
    /// English stopwords, default selection (30% of sentences, no budget).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a summarizer from caller options.
    pub fn with_options(options: SummaryOptions) -> Self {
        Self {
            stopwords: StopwordFilter::english(),
            selector: SentenceSelector::with_config(SelectorConfig::from(options)),
        }
    }

    /// Replace the stopword list.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Summarize without observing the stages.
    pub fn summarize(&self, text: &str) -> SummaryResult {
        self.run(text, &mut NoopObserver)
    }

    /// Execute the pipeline on `text`.
    ///
    /// Empty or whitespace-only text stops after the split stage with an
    /// empty result.
    pub fn run(&self, text: &str, observer: &mut impl PipelineObserver) -> SummaryResult {
        // Stage 1: Split
        let sentences = {
            trace_stage!(STAGE_SPLIT);
            observer.on_stage_start(STAGE_SPLIT);
            let clock = StageClock::start();
            let sentences = split_sentences(text);
            let report = StageReport::new(clock.elapsed()).with_items(sentences.len());
            observer.on_stage_end(STAGE_SPLIT, &report);
            observer.on_sentences(&sentences);
            sentences
        };

        if sentences.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("no sentences found, skipping scoring");
            let result = SummaryResult::default();
            observer.on_result(&result);
            return result;
        }

        // Stage 2: Frequency table
        let frequencies = {
            trace_stage!(STAGE_FREQUENCIES);
            observer.on_stage_start(STAGE_FREQUENCIES);
            let clock = StageClock::start();
            let frequencies = WordFrequencies::build(&sentences, &self.stopwords);
            let report = StageReport::new(clock.elapsed()).with_items(frequencies.len());
            observer.on_stage_end(STAGE_FREQUENCIES, &report);
            observer.on_frequencies(&frequencies);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                words = frequencies.len(),
                top = ?frequencies.top_n(TOP_WORDS_LOGGED),
                "frequency table built"
            );
            frequencies
        };

        // Stage 3: Score
        let scores = {
            trace_stage!(STAGE_SCORE);
            observer.on_stage_start(STAGE_SCORE);
            let clock = StageClock::start();
            let scores = score_sentences(&sentences, &frequencies, &self.stopwords);
            let report = StageReport::new(clock.elapsed()).with_items(scores.len());
            observer.on_stage_end(STAGE_SCORE, &report);
            observer.on_scores(&scores);
            scores
        };

        // Stage 4: Select
        let result = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let result = self.selector.select(&sentences, &scores);
            let report = StageReport::new(clock.elapsed()).with_items(result.len());
            observer.on_stage_end(STAGE_SELECT, &report);
            result
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = result.total_sentences,
            selected = result.len(),
            truncated = result.truncated,
            "summary selected"
        );

        observer.on_result(&result);
        result
    }
}

// ============================================================================
// Tests
// ============================================================================
