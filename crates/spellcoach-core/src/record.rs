// Wrong-spelling history: ranked, bounded list of a learner's distinct
// wrong attempts at one word

use std::cmp::Ordering;

use crate::analysis::AnalysedWord;

/// Number of wrong spellings kept per word.
pub const MAX_WRONG_SPELLINGS: usize = 10;

/// One remembered wrong attempt and the metrics it was analysed with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WrongSpelling {
    pub spelling: String,
    pub score: i32,
    pub average_link_length: f64,
    pub longest_link: usize,
    pub length_difference: usize,
}

impl WrongSpelling {
    pub fn new(
        spelling: impl Into<String>,
        score: i32,
        average_link_length: f64,
        longest_link: usize,
        length_difference: usize,
    ) -> Self {
        Self {
            spelling: spelling.into(),
            score,
            average_link_length,
            longest_link,
            length_difference,
        }
    }

    /// Build a record from a finished analysis.
    ///
    /// Returns `None` for correct and beyond-wrong analyses, which are never
    /// stored.
    pub fn from_analysis(word: &AnalysedWord) -> Option<Self> {
        if word.is_correct() || word.is_beyond_wrong() {
            return None;
        }
        Some(Self::new(
            word.attempt_string(),
            word.score(),
            word.average_link_size(),
            word.largest_link(),
            word.length_difference(),
        ))
    }

    /// Ranking order: `Less` means `self` is the better spelling.
    ///
    /// Higher score first, then higher average link length, then smaller
    /// length difference, then longer longest link.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.average_link_length.total_cmp(&self.average_link_length))
            .then_with(|| self.length_difference.cmp(&other.length_difference))
            .then_with(|| other.longest_link.cmp(&self.longest_link))
    }
}

/// Outcome of [`SpellingRecord::add_wrong_spelling`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordUpdate {
    /// The spelling was already in the history; nothing changed.
    Duplicate,
    /// The spelling was inserted. `evicted` lists spellings dropped to keep
    /// the history bounded; storage should delete them.
    Added { evicted: Vec<WrongSpelling> },
}

/// Attempt count and wrong-spelling history for one word.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellingRecord {
    pub word_id: u64,
    pub attempts: u32,
    wrong_spellings: Vec<WrongSpelling>,
}

impl SpellingRecord {
    pub fn new(word_id: u64) -> Self {
        Self {
            word_id,
            ..Self::default()
        }
    }

    /// Newest first, except after an eviction, which leaves the list in
    /// ranking order.
    pub fn wrong_spellings(&self) -> &[WrongSpelling] {
        &self.wrong_spellings
    }

    pub fn wrong_words(&self) -> Vec<&str> {
        self.wrong_spellings
            .iter()
            .map(|ws| ws.spelling.as_str())
            .collect()
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.wrong_spellings.iter().any(|ws| ws.spelling == spelling)
    }

    /// Append a stored spelling as-is. Used when restoring from storage,
    /// where order and limits were already applied.
    pub fn load_wrong_spelling(&mut self, wrong_spelling: WrongSpelling) {
        self.wrong_spellings.push(wrong_spelling);
    }

    /// Insert a new wrong spelling at the front of the history.
    pub fn add_wrong_spelling(&mut self, wrong_spelling: WrongSpelling) -> RecordUpdate {
        if self.contains(&wrong_spelling.spelling) {
            return RecordUpdate::Duplicate;
        }
        self.wrong_spellings.insert(0, wrong_spelling);

        let mut evicted = Vec::new();
        if self.wrong_spellings.len() > MAX_WRONG_SPELLINGS {
            self.wrong_spellings.sort_by(WrongSpelling::rank_cmp);
            evicted = self.wrong_spellings.split_off(MAX_WRONG_SPELLINGS);
        }
        RecordUpdate::Added { evicted }
    }

    /// Count an attempt and remember it if it is worth keeping.
    ///
    /// Returns `None` when the analysis was correct or beyond wrong.
    pub fn record_analysis(&mut self, word: &AnalysedWord) -> Option<RecordUpdate> {
        self.attempts = self.attempts.saturating_add(1);
        WrongSpelling::from_analysis(word).map(|ws| self.add_wrong_spelling(ws))
    }
}
