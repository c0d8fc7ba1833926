// Shared enums: LetterStatus, AnalysisState

use std::fmt;
use std::str::FromStr;

/// Error returned when a status name or code cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseStatusError {
    #[error("unknown letter status: {0:?}")]
    UnknownLetterStatus(String),
    #[error("unknown analysis state: {0:?}")]
    UnknownAnalysisState(String),
}

/// Classification of one letter in an analysed attempt.
///
/// The three-away variants carry a Front/Back marker recording which end of
/// the displaced pair came first in the letter sequence. Feedback animation
/// relies on that order, so three-away detection always runs front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LetterStatus {
    /// Deleted letter. Only used while a classification is being rewritten.
    Null,
    /// Letter in the right place.
    Correct,
    /// Letter of the target that the attempt left out.
    Missing,
    /// Letter of the attempt that does not belong there.
    Wrong,
    /// One of two neighbouring letters typed in the wrong order.
    Swapped,
    ThreeAwayMissingFront,
    ThreeAwayMissingBack,
    ThreeAwayWrongFront,
    ThreeAwayWrongBack,
}

const LETTER_STATUSES: [LetterStatus; 9] = [
    LetterStatus::Null,
    LetterStatus::Correct,
    LetterStatus::Missing,
    LetterStatus::Wrong,
    LetterStatus::Swapped,
    LetterStatus::ThreeAwayMissingFront,
    LetterStatus::ThreeAwayMissingBack,
    LetterStatus::ThreeAwayWrongFront,
    LetterStatus::ThreeAwayWrongBack,
];

impl LetterStatus {
    /// Stable kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            LetterStatus::Null => "null",
            LetterStatus::Correct => "correct",
            LetterStatus::Missing => "missing",
            LetterStatus::Wrong => "wrong",
            LetterStatus::Swapped => "swapped",
            LetterStatus::ThreeAwayMissingFront => "three-away-missing-front",
            LetterStatus::ThreeAwayMissingBack => "three-away-missing-back",
            LetterStatus::ThreeAwayWrongFront => "three-away-wrong-front",
            LetterStatus::ThreeAwayWrongBack => "three-away-wrong-back",
        }
    }

    /// One-character code used in compact letter strips.
    pub fn code(self) -> char {
        match self {
            LetterStatus::Null => '.',
            LetterStatus::Correct => 'C',
            LetterStatus::Missing => 'M',
            LetterStatus::Wrong => 'W',
            LetterStatus::Swapped => 'S',
            LetterStatus::ThreeAwayMissingFront => 'f',
            LetterStatus::ThreeAwayMissingBack => 'b',
            LetterStatus::ThreeAwayWrongFront => 'F',
            LetterStatus::ThreeAwayWrongBack => 'B',
        }
    }

    /// Inverse of [`LetterStatus::code`].
    pub fn from_code(code: char) -> Result<Self, ParseStatusError> {
        LETTER_STATUSES
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or_else(|| ParseStatusError::UnknownLetterStatus(code.to_string()))
    }

    /// Whether the letter was typed by the learner (as opposed to a target
    /// letter shown only because it was left out).
    pub fn is_present_in_attempt(self) -> bool {
        matches!(
            self,
            LetterStatus::Correct
                | LetterStatus::Wrong
                | LetterStatus::Swapped
                | LetterStatus::ThreeAwayWrongFront
                | LetterStatus::ThreeAwayWrongBack
        )
    }

    pub fn is_wrong_or_missing(self) -> bool {
        matches!(self, LetterStatus::Wrong | LetterStatus::Missing)
    }

    pub fn is_three_away(self) -> bool {
        matches!(
            self,
            LetterStatus::ThreeAwayMissingFront
                | LetterStatus::ThreeAwayMissingBack
                | LetterStatus::ThreeAwayWrongFront
                | LetterStatus::ThreeAwayWrongBack
        )
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LetterStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LETTER_STATUSES
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError::UnknownLetterStatus(s.to_string()))
    }
}

/// Overall verdict on an analysed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AnalysisState {
    /// An ordinary wrong attempt.
    #[default]
    NotApplicable,
    /// The attempt matches the main spelling.
    Exact,
    /// The attempt matches one of the alternate spellings.
    AlternateSpelling,
    /// Large length difference and short links.
    BeyondWrong1,
    /// At most one single-letter link in a word longer than three letters.
    BeyondWrong2,
    /// Every target letter present but buried in at least five extra letters.
    BeyondWrong3,
}

const ANALYSIS_STATES: [AnalysisState; 6] = [
    AnalysisState::NotApplicable,
    AnalysisState::Exact,
    AnalysisState::AlternateSpelling,
    AnalysisState::BeyondWrong1,
    AnalysisState::BeyondWrong2,
    AnalysisState::BeyondWrong3,
];

impl AnalysisState {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisState::NotApplicable => "not-applicable",
            AnalysisState::Exact => "exact",
            AnalysisState::AlternateSpelling => "alternate-spelling",
            AnalysisState::BeyondWrong1 => "beyond-wrong1",
            AnalysisState::BeyondWrong2 => "beyond-wrong2",
            AnalysisState::BeyondWrong3 => "beyond-wrong3",
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, AnalysisState::Exact | AnalysisState::AlternateSpelling)
    }

    pub fn is_beyond_wrong(self) -> bool {
        matches!(
            self,
            AnalysisState::BeyondWrong1 | AnalysisState::BeyondWrong2 | AnalysisState::BeyondWrong3
        )
    }
}

impl fmt::Display for AnalysisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisState {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ANALYSIS_STATES
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ParseStatusError::UnknownAnalysisState(s.to_string()))
    }
}
