//! Shared types for spelling-attempt analysis.
//!
//! This crate holds the data model that the analysis engine produces and
//! its consumers (feedback, persistence) read, together with the pieces that
//! need no search: character normalization and the metrics computed over a
//! finished classification.
//!
//! # Modules
//!
//! - [`enums`] -- `LetterStatus` and `AnalysisState`
//! - [`analysis`] -- `AnalysedLetter` and `AnalysedWord`
//! - [`character`] -- case and diacritic folding
//! - [`metrics`] -- score, error count, links, length difference
//! - [`options`] -- normalization options
//! - [`record`] -- per-word wrong-spelling history
//! - [`target`] -- the word being spelled and its alternate spellings

pub mod analysis;
pub mod character;
pub mod enums;
pub mod metrics;
pub mod options;
pub mod record;
pub mod target;

pub use analysis::{AnalysedLetter, AnalysedWord};
pub use enums::{AnalysisState, LetterStatus, ParseStatusError};
pub use options::AnalysisOptions;
pub use record::{MAX_WRONG_SPELLINGS, RecordUpdate, SpellingRecord, WrongSpelling};
pub use target::TargetWord;
