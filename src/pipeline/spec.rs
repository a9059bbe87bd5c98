//! Options document types.
//!
//! A [`SummarySpec`] is a versioned JSON description of one summarization
//! request's knobs. It is the input to the
//! [`super::validation::ValidationEngine`], which turns it into typed
//! [`SummaryOptions`] once every field is in range.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "ratio": 0.3,
//!   "sentences": 2,
//!   "max_chars": 280,
//!   "strict": false
//! }
//! ```
//!
//! Integer fields are kept signed here so that out-of-range values reach the
//! validator (and produce a diagnostic) instead of failing deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::errors::SpecError;
use super::validation::{ValidationEngine, ValidationReport};
use crate::types::SummaryOptions;

/// Current options document version.
pub const SPEC_VERSION: i64 = 1;

/// Top-level options document (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Spec version (currently `1`).
    pub v: i64,

    /// Fraction of sentences to keep, in `(0, 1]`.
    #[serde(default)]
    pub ratio: Option<f64>,

    /// Exact number of sentences to keep. Wins over `ratio`.
    #[serde(default)]
    pub sentences: Option<i64>,

    /// Character budget for the summary.
    #[serde(default)]
    pub max_chars: Option<i64>,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for SummarySpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            ratio: None,
            sentences: None,
            max_chars: None,
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl SummarySpec {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Run the default validation rules.
    pub fn validate(&self) -> ValidationReport {
        ValidationEngine::with_defaults().validate(self)
    }

    /// Validate and convert into typed options.
    ///
    /// Warnings do not block conversion; any error does, and the full report
    /// is returned.
    pub fn to_options(&self) -> Result<SummaryOptions, ValidationReport> {
        let report = self.validate();
        if report.has_errors() {
            return Err(report);
        }
        Ok(SummaryOptions {
            ratio: self.ratio,
            sentence_count: self.sentences.and_then(|n| usize::try_from(n).ok()),
            max_chars: self.max_chars.and_then(|n| usize::try_from(n).ok()),
        })
    }
}
