//! Raw form-field handling for front ends.
//!
//! Front ends (a web form, the CLI) receive the paragraph and the three knobs
//! as untyped strings. This module trims and parses them into
//! [`SummaryOptions`], rejecting anything out of range with a message meant
//! for the end user. The summarization core never sees invalid values.

use std::num::IntErrorKind;

use thiserror::Error;

use crate::summarize_with;
use crate::types::{is_valid_ratio, SummaryOptions};

/// User-facing validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Invalid ratio. Use a number between 0 and 1 (e.g., 0.3).")]
    InvalidRatio,

    #[error("Invalid sentence count. Use a positive integer.")]
    InvalidSentenceCount,

    #[error("Invalid max chars. Use a positive integer.")]
    InvalidMaxChars,

    #[error("Please paste a paragraph to summarize.")]
    EmptyText,
}

/// The raw fields of one summarization request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryForm {
    pub text: String,
    pub ratio: String,
    pub sentences: String,
    pub max_chars: String,
}

impl SummaryForm {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn ratio(mut self, raw: impl Into<String>) -> Self {
        self.ratio = raw.into();
        self
    }

    pub fn sentences(mut self, raw: impl Into<String>) -> Self {
        self.sentences = raw.into();
        self
    }

    pub fn max_chars(mut self, raw: impl Into<String>) -> Self {
        self.max_chars = raw.into();
        self
    }

    /// Parse the three numeric fields.
    ///
    /// All fields are checked; when more than one is invalid the error for
    /// the last one (ratio, then sentences, then max chars) is reported.
    pub fn parse_options(&self) -> Result<SummaryOptions, FormError> {
        let ratio = parse_ratio(&self.ratio);
        let sentences = parse_sentence_count(&self.sentences);
        let max_chars = parse_max_chars(&self.max_chars);

        match (ratio, sentences, max_chars) {
            (_, _, Err(e)) | (_, Err(e), Ok(_)) | (Err(e), Ok(_), Ok(_)) => Err(e),
            (Ok(ratio), Ok(sentence_count), Ok(max_chars)) => Ok(SummaryOptions {
                ratio,
                sentence_count,
                max_chars,
            }),
        }
    }

    /// Parse every field, returning the trimmed text and typed options.
    ///
    /// Field errors take priority over an empty paragraph.
    pub fn parse(&self) -> Result<(&str, SummaryOptions), FormError> {
        let options = self.parse_options()?;
        let text = self.text.trim();
        if text.is_empty() {
            return Err(FormError::EmptyText);
        }
        Ok((text, options))
    }

    /// Validate the form and summarize its text.
    pub fn summarize(&self) -> Result<String, FormError> {
        let (text, options) = self.parse()?;
        Ok(summarize_with(text, &options).text())
    }
}

/// Parse a ratio field; empty means "not given".
pub fn parse_ratio(raw: &str) -> Result<Option<f64>, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(ratio) if is_valid_ratio(ratio) => Ok(Some(ratio)),
        _ => Err(FormError::InvalidRatio),
    }
}

/// Parse a sentence-count field; empty means "not given".
pub fn parse_sentence_count(raw: &str) -> Result<Option<usize>, FormError> {
    parse_positive(raw).map_err(|_| FormError::InvalidSentenceCount)
}

/// Parse a max-chars field; empty means "not given".
pub fn parse_max_chars(raw: &str) -> Result<Option<usize>, FormError> {
    parse_positive(raw).map_err(|_| FormError::InvalidMaxChars)
}

/// Any positive integer is accepted; values past `usize::MAX` saturate,
/// which is already "no limit" for a count or a budget.
fn parse_positive(raw: &str) -> Result<Option<usize>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<usize>() {
        Ok(0) => Err(()),
        Ok(n) => Ok(Some(n)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Some(usize::MAX)),
        Err(_) => Err(()),
    }
}
