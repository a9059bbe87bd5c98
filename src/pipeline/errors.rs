//! Structured errors for options documents.
//!
//! Every [`SpecError`] carries a stable machine-readable [`ErrorCode`], a
//! JSON-pointer `path` to the offending field, a human message and an
//! optional hint. They serialize as flat JSON objects so the CLI can emit
//! them with `--json`.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Stable identifiers for options-document problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The document is not valid JSON or does not match the schema.
    InvalidJson,
    /// The `v` field names a version this crate does not understand.
    UnsupportedVersion,
    /// A field holds a value outside its allowed range.
    InvalidValue,
    /// Two fields were set where only one takes effect.
    ConflictingOptions,
    /// A field is not part of the schema.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid_json",
            Self::UnsupportedVersion => "unsupported_version",
            Self::InvalidValue => "invalid_value",
            Self::ConflictingOptions => "conflicting_options",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found in an options document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("[{code}] {path}: {message}")]
pub struct SpecError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<serde_json::Error> for SpecError {
    fn from(err: serde_json::Error) -> Self {
        SpecError::new(ErrorCode::InvalidJson, "", err.to_string())
            .with_hint("Expected an object such as {\"v\": 1, \"ratio\": 0.3}")
    }
}
