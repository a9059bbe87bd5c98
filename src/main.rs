use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rayon::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use rapid_summarizer::pipeline::observer::StageTimingObserver;
use rapid_summarizer::{FormError, Summarizer, SummaryForm, SummaryOptions, SummaryResult, SummarySpec};

#[derive(Parser, Debug)]
#[command(name = "rapid-summarizer", version)]
#[command(about = "Extract the most important sentences of a paragraph.")]
struct Cli {
    /// Text files to summarize. Reads stdin when none are given; "-" also means stdin.
    paths: Vec<PathBuf>,

    /// Fraction of sentences to keep, between 0 and 1 (default 0.3).
    #[arg(short = 'r', long)]
    ratio: Option<String>,

    /// Exact number of sentences to keep. Overrides --ratio.
    #[arg(short = 'n', long)]
    sentences: Option<String>,

    /// Maximum number of characters in the summary.
    #[arg(short = 'c', long = "max-chars")]
    max_chars: Option<String>,

    /// JSON options document ({"v": 1, "ratio": ..., "sentences": ..., "max_chars": ...}).
    /// Command-line flags override its values.
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Print the selection with scores as JSON.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

struct Input {
    source: String,
    text: String,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    source: &'a str,
    summary: String,
    #[serde(flatten)]
    result: &'a SummaryResult,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = match resolve_options(&cli)? {
        Resolved::Options(options) => options,
        Resolved::Usage(message) => {
            eprintln!("{message}");
            return Ok(ExitCode::from(2));
        }
    };
    tracing::debug!(?options, "resolved options");

    let inputs = read_inputs(&cli.paths)?;
    if inputs.len() == 1 && inputs[0].text.trim().is_empty() {
        eprintln!("{}", FormError::EmptyText);
        return Ok(ExitCode::from(2));
    }

    let summarizer = Summarizer::with_options(options);
    let results: Vec<SummaryResult> = inputs
        .par_iter()
        .map(|input| {
            if input.text.trim().is_empty() {
                tracing::warn!(source = %input.source, "input is empty");
            }
            let mut observer = StageTimingObserver::new();
            let result = summarizer.run(&input.text, &mut observer);
            for (stage, report) in observer.reports() {
                tracing::debug!(
                    source = %input.source,
                    stage,
                    elapsed_us = report.elapsed.as_micros() as u64,
                    items = report.items,
                    "stage finished"
                );
            }
            result
        })
        .collect();

    if cli.json {
        print_json(&inputs, &results)?;
    } else {
        print_text(&inputs, &results);
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Outcome of merging the options document with command-line flags.
enum Resolved {
    Options(SummaryOptions),
    /// A user-facing validation message; exits with status 2.
    Usage(String),
}

/// Merge the options document (if any) with command-line flags.
///
/// `Err` is reserved for I/O failures.
fn resolve_options(cli: &Cli) -> Result<Resolved> {
    let mut options = SummaryOptions::default();

    if let Some(path) = &cli.spec {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading options from {}", path.display()))?;
        let spec = match SummarySpec::from_json(&json) {
            Ok(spec) => spec,
            Err(err) => return Ok(Resolved::Usage(err.to_string())),
        };
        let report = spec.validate();
        for warning in report.warnings() {
            tracing::warn!("{warning}");
        }
        options = match spec.to_options() {
            Ok(options) => options,
            Err(report) => return Ok(Resolved::Usage(report.to_string())),
        };
    }

    let form = SummaryForm {
        text: String::new(),
        ratio: cli.ratio.clone().unwrap_or_default(),
        sentences: cli.sentences.clone().unwrap_or_default(),
        max_chars: cli.max_chars.clone().unwrap_or_default(),
    };
    let flags = match form.parse_options() {
        Ok(flags) => flags,
        Err(err) => return Ok(Resolved::Usage(err.to_string())),
    };

    options.ratio = flags.ratio.or(options.ratio);
    options.sentence_count = flags.sentence_count.or(options.sentence_count);
    options.max_chars = flags.max_chars.or(options.max_chars);
    Ok(Resolved::Options(options))
}

fn read_inputs(paths: &[PathBuf]) -> Result<Vec<Input>> {
    if paths.is_empty() {
        return Ok(vec![read_stdin()?]);
    }
    paths
        .iter()
        .map(|path| {
            if path == Path::new("-") {
                return read_stdin();
            }
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(Input {
                source: path.display().to_string(),
                text,
            })
        })
        .collect()
}

fn read_stdin() -> Result<Input> {
    let text = io::read_to_string(io::stdin()).context("reading stdin")?;
    Ok(Input {
        source: "-".to_string(),
        text,
    })
}

fn print_text(inputs: &[Input], results: &[SummaryResult]) {
    if let [result] = results {
        println!("{}", result.text());
        return;
    }
    for (i, (input, result)) in inputs.iter().zip(results).enumerate() {
        if i > 0 {
            println!();
        }
        println!("==> {} <==", input.source);
        println!("{}", result.text());
    }
}

fn print_json(inputs: &[Input], results: &[SummaryResult]) -> Result<()> {
    let summaries: Vec<JsonSummary<'_>> = inputs
        .iter()
        .zip(results)
        .map(|(input, result)| JsonSummary {
            source: &input.source,
            summary: result.text(),
            result,
        })
        .collect();

    let json = match summaries.as_slice() {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    println!("{json}");
    Ok(())
}
