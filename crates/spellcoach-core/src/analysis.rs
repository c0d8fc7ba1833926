// Analysed letters and words: the result of comparing an attempt with a target

use crate::enums::{AnalysisState, LetterStatus};
use crate::metrics::{self, LinkStats};

/// A single character together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysedLetter {
    pub character: char,
    pub status: LetterStatus,
}

impl AnalysedLetter {
    /// Returned for out-of-range lookups instead of panicking.
    pub const NULL: Self = Self {
        character: '\0',
        status: LetterStatus::Null,
    };

    pub fn new(character: char, status: LetterStatus) -> Self {
        Self { character, status }
    }

    pub fn correct(character: char) -> Self {
        Self::new(character, LetterStatus::Correct)
    }
}

/// An ordered classification of an attempt plus the statistics derived
/// from it.
///
/// Letters are in the attempt's left-to-right order, with Missing letters
/// slotted in where the target expected them. The statistics (`score`,
/// `length_difference`, link figures) are zero until
/// [`AnalysedWord::calculate_stats`] has run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysedWord {
    letters: Vec<AnalysedLetter>,
    /// Number of letters in the target's main spelling.
    original_length: usize,
    score: i32,
    length_difference: usize,
    links: LinkStats,
    state: AnalysisState,
}

impl AnalysedWord {
    /// Create an empty analysis for a target of `original_length` letters.
    pub fn new(original_length: usize) -> Self {
        Self {
            letters: Vec::new(),
            original_length,
            score: 0,
            length_difference: 0,
            links: LinkStats::default(),
            state: AnalysisState::NotApplicable,
        }
    }

    pub fn from_letters(letters: Vec<AnalysedLetter>, original_length: usize) -> Self {
        Self {
            letters,
            ..Self::new(original_length)
        }
    }

    /// Append one letter.
    pub fn push(&mut self, character: char, status: LetterStatus) {
        self.letters.push(AnalysedLetter::new(character, status));
    }

    /// Append every character of `chars` with the same status.
    pub fn fill(&mut self, chars: &[char], status: LetterStatus) {
        self.letters
            .extend(chars.iter().map(|&c| AnalysedLetter::new(c, status)));
    }

    pub fn letters(&self) -> &[AnalysedLetter] {
        &self.letters
    }

    /// Mutable access for passes that rewrite statuses in place.
    pub fn letters_mut(&mut self) -> &mut [AnalysedLetter] {
        &mut self.letters
    }

    pub fn into_letters(self) -> Vec<AnalysedLetter> {
        self.letters
    }

    /// Letter at `index`, or [`AnalysedLetter::NULL`] when out of range.
    pub fn letter(&self, index: usize) -> AnalysedLetter {
        self.letters
            .get(index)
            .copied()
            .unwrap_or(AnalysedLetter::NULL)
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Drop every letter marked [`LetterStatus::Null`].
    pub fn remove_null(&mut self) {
        self.letters.retain(|l| l.status != LetterStatus::Null);
    }

    pub fn reverse(&mut self) {
        self.letters.reverse();
    }

    pub fn count_status(&self, status: LetterStatus) -> usize {
        self.letters.iter().filter(|l| l.status == status).count()
    }

    /// Compute score, length difference and link statistics from the
    /// current letters.
    pub fn calculate_stats(&mut self) {
        self.score = metrics::score(&self.letters, self.original_length);
        self.length_difference = metrics::length_difference(&self.letters, self.original_length);
        self.links = metrics::link_stats(&self.letters);
    }

    // -- derived values --

    pub fn original_length(&self) -> usize {
        self.original_length
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn length_difference(&self) -> usize {
        self.length_difference
    }

    pub fn average_link_size(&self) -> f64 {
        self.links.average_link_size
    }

    pub fn largest_link(&self) -> usize {
        self.links.largest_link
    }

    pub fn num_links(&self) -> usize {
        self.links.num_links
    }

    pub fn num_correct(&self) -> usize {
        self.count_status(LetterStatus::Correct)
    }

    /// Error count, computed on demand.
    pub fn num_errors(&self) -> usize {
        metrics::count_errors(&self.letters)
    }

    // -- state --

    pub fn state(&self) -> AnalysisState {
        self.state
    }

    pub fn set_state(&mut self, state: AnalysisState) {
        self.state = state;
    }

    pub fn is_exact(&self) -> bool {
        self.state == AnalysisState::Exact
    }

    pub fn is_correct(&self) -> bool {
        self.state.is_correct()
    }

    pub fn is_alternate_spelling(&self) -> bool {
        self.state == AnalysisState::AlternateSpelling
    }

    pub fn is_beyond_wrong(&self) -> bool {
        self.state.is_beyond_wrong()
    }

    // -- rendering --

    /// Rebuild the text the learner typed: every letter present in the
    /// attempt, in order, leaving out Missing ones.
    pub fn attempt_string(&self) -> String {
        self.letters
            .iter()
            .filter(|l| l.status.is_present_in_attempt())
            .map(|l| l.character)
            .collect()
    }

    /// All characters, including Missing ones.
    pub fn characters(&self) -> String {
        self.letters.iter().map(|l| l.character).collect()
    }

    /// One status code per letter, aligned with [`AnalysedWord::characters`].
    pub fn status_codes(&self) -> String {
        self.letters.iter().map(|l| l.status.code()).collect()
    }
}
