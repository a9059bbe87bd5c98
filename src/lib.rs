//! # rapid-summarizer
//!
//! Frequency-based extractive summarization of a single paragraph.
//!
//! The text is split into sentences, every non-stopword is weighted by how
//! often it occurs in the whole paragraph, each sentence is scored by the
//! mean weight of its words (with a damped length bonus), and the best
//! sentences are returned in their original reading order.
//!
//! ```
//! let summary = rapid_summarizer::summarize(
//!     "The cat sat. The cat played. Dogs bark loudly.",
//!     Some(0.34),
//!     None,
//!     None,
//! );
//! assert_eq!(summary, "The cat sat.");
//! ```
//!
//! Every call is a pure function of its arguments; see [`summarize_batch`]
//! for summarizing many paragraphs in parallel.

pub mod form;
pub mod nlp;
pub mod pipeline;
pub mod summarizer;
pub mod types;

use rayon::prelude::*;

pub use form::{FormError, SummaryForm};
pub use pipeline::runner::Summarizer;
pub use pipeline::spec::SummarySpec;
pub use summarizer::selector::{SelectedSentence, SummaryResult};
pub use types::{Sentence, SentenceScore, SummaryOptions};

/// Summarize `text`, returning the selected sentences joined by single
/// spaces.
///
/// - `ratio`: fraction of sentences to keep, in `(0, 1]` (default 0.3)
/// - `sentence_count`: exact number of sentences; wins over `ratio`
/// - `max_chars`: character budget for the output
///
/// Arguments are expected to be validated by the caller (see [`form`]).
/// Empty or whitespace-only text yields an empty string.
pub fn summarize(
    text: &str,
    ratio: Option<f64>,
    sentence_count: Option<usize>,
    max_chars: Option<usize>,
) -> String {
    let options = SummaryOptions {
        ratio,
        sentence_count,
        max_chars,
    };
    summarize_with(text, &options).text()
}

/// Summarize `text` and return the full selection with scores.
pub fn summarize_with(text: &str, options: &SummaryOptions) -> SummaryResult {
    Summarizer::with_options(*options).summarize(text)
}

/// Summarize many paragraphs in parallel with the same options.
///
/// Output order matches input order.
pub fn summarize_batch<S>(texts: &[S], options: &SummaryOptions) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    let summarizer = Summarizer::with_options(*options);
    texts
        .par_iter()
        .map(|text| summarizer.summarize(text.as_ref()).text())
        .collect()
}
