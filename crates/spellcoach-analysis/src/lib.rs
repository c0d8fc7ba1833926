//! Letter-by-letter analysis of spelling attempts.
//!
//! Given what a learner typed and the word they were asked to spell, the
//! analyser classifies every letter as Correct, Wrong, Missing, Swapped or
//! three-away, scores the result and flags attempts too far off to be worth
//! remembering. It is a greedy multi-pass alignment with its own tie-breaks,
//! not a minimum edit distance.
//!
//! # Pipeline
//!
//! - [`exact`] -- shortcut for attempts equal to a spelling
//! - [`alignment`] -- shrinking-window search for one configuration
//! - [`passes`] -- swap and three-away rewrites of a raw alignment
//! - [`candidate`] -- the configuration matrix and ranking
//! - [`beyond_wrong`] -- rules for hopeless attempts
//! - [`feedback`] -- whether an analysis gets animated feedback
//! - [`analyser`] -- [`SpellingAnalyser`], tying it all together
//!
//! ```
//! use spellcoach_analysis::analyse;
//! use spellcoach_core::{AnalysisOptions, TargetWord};
//!
//! let word = analyse("siad", &TargetWord::new("said"), &AnalysisOptions::default());
//! assert_eq!(word.status_codes(), "CSSC");
//! assert_eq!(word.score(), 34);
//! ```

pub mod alignment;
pub mod analyser;
pub mod beyond_wrong;
pub mod candidate;
pub mod exact;
pub mod feedback;
pub mod passes;

pub use alignment::{AlignmentConfig, Direction};
pub use analyser::{SpellingAnalyser, analyse};
pub use candidate::Candidate;
pub use feedback::feedback_eligible;
