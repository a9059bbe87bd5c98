//! Summarization components
//!
//! Provides frequency-based sentence scoring and top-k selection for
//! extractive summarization.

pub mod frequency;
pub mod selector;
