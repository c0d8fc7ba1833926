// spellcoach-cli: shared utilities for CLI tools.

use std::process;

use serde::Serialize;
use spellcoach_core::analysis::{AnalysedLetter, AnalysedWord};
use spellcoach_core::enums::AnalysisState;
use spellcoach_core::options::AnalysisOptions;
use spellcoach_core::target::TargetWord;

/// Separator between a target's main spelling and its alternates.
const ALTERNATE_SEPARATOR: char = '|';

/// A malformed input line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("expected {expected} tab-separated fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },
    #[error("empty target word")]
    EmptyTarget,
    #[error("invalid word id: {0:?}")]
    BadWordId(String),
}

/// Strip `--keep-case` and `--keep-diacritics` from the args and turn them
/// into analysis options.
///
/// Returns `(options, remaining_args)`.
pub fn parse_options(args: &[String]) -> (AnalysisOptions, Vec<String>) {
    let mut options = AnalysisOptions::default();
    let mut remaining = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--keep-case" => options.fold_case = false,
            "--keep-diacritics" => options.fold_diacritics = false,
            _ => remaining.push(arg.clone()),
        }
    }

    (options, remaining)
}

/// Parse `main|alt|alt` into a target word.
pub fn parse_target(field: &str) -> Result<TargetWord, InputError> {
    let mut spellings = field.split(ALTERNATE_SEPARATOR).map(str::trim);
    let main = spellings.next().unwrap_or_default();
    if main.is_empty() {
        return Err(InputError::EmptyTarget);
    }
    Ok(TargetWord::new(main).with_alternates(spellings.filter(|s| !s.is_empty())))
}

fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, InputError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != expected {
        return Err(InputError::FieldCount {
            expected,
            actual: fields.len(),
        });
    }
    Ok(fields)
}

/// Parse a `target<TAB>attempt` line.
///
/// The attempt is kept verbatim apart from the line ending, so an empty
/// attempt is allowed.
pub fn parse_analyse_line(line: &str) -> Result<(TargetWord, String), InputError> {
    let fields = split_fields(line, 2)?;
    Ok((parse_target(fields[0])?, fields[1].to_string()))
}

/// Parse a `word_id<TAB>target<TAB>attempt` line.
pub fn parse_history_line(line: &str) -> Result<(u64, TargetWord, String), InputError> {
    let fields = split_fields(line, 3)?;
    let id = fields[0].trim();
    let word_id = id
        .parse::<u64>()
        .map_err(|_| InputError::BadWordId(id.to_string()))?;
    Ok((word_id, parse_target(fields[1])?, fields[2].to_string()))
}

/// One-line summary of an analysis: letters, status codes, state and
/// metrics.
pub fn format_analysis(word: &AnalysedWord) -> String {
    format!(
        "{} {} {} score={} diff={} links={} largest={} avg={:.2} errors={}",
        word.characters(),
        word.status_codes(),
        word.state(),
        word.score(),
        word.length_difference(),
        word.num_links(),
        word.largest_link(),
        word.average_link_size(),
        word.num_errors()
    )
}

/// JSON form of one analysis.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub target: &'a str,
    pub attempt: &'a str,
    pub state: AnalysisState,
    pub score: i32,
    pub length_difference: usize,
    pub num_links: usize,
    pub largest_link: usize,
    pub average_link_size: f64,
    pub num_errors: usize,
    pub feedback: bool,
    pub letters: &'a [AnalysedLetter],
}

impl<'a> AnalysisReport<'a> {
    pub fn new(target: &'a TargetWord, attempt: &'a str, word: &'a AnalysedWord) -> Self {
        Self {
            target: target.main_spelling(),
            attempt,
            state: word.state(),
            score: word.score(),
            length_difference: word.length_difference(),
            num_links: word.num_links(),
            largest_link: word.largest_link(),
            average_link_size: word.average_link_size(),
            num_errors: word.num_errors(),
            feedback: spellcoach_analysis::feedback_eligible(word, target.len()),
            letters: word.letters(),
        }
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
