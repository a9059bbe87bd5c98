//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::summarizer::frequency::WordFrequencies;
use crate::summarizer::selector::SummaryResult;
use crate::types::{Sentence, SentenceScore};

pub const STAGE_SPLIT: &str = "split";
pub const STAGE_FREQUENCIES: &str = "frequencies";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";

/// All stages in execution order.
pub const STAGES: [&str; 4] = [STAGE_SPLIT, STAGE_FREQUENCIES, STAGE_SCORE, STAGE_SELECT];

/// Wall-clock timer for one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage reports when it finishes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    /// Time spent in the stage
    pub elapsed: Duration,
    /// Number of items the stage produced (sentences, table entries, ...)
    pub items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }
}

/// Callbacks invoked by [`super::runner::Summarizer::run`].
///
/// Every method has an empty default so observers only implement what they
/// care about.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_frequencies(&mut self, _frequencies: &WordFrequencies) {}

    fn on_scores(&mut self, _scores: &[SentenceScore]) {}

    fn on_result(&mut self, _result: &SummaryResult) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records the report of every finished stage.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in the order the stages finished.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for a single stage, if it ran.
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all stage durations.
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, report)| report.elapsed).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
