// Metrics over a classified letter sequence: score, error count, links,
// length difference

use crate::analysis::AnalysedLetter;
use crate::enums::LetterStatus;

/// Points each target letter is worth before deductions.
pub const POINTS_PER_LETTER: i32 = 10;

// ---------------------------------------------------------------------------
// Wrong/Missing run tracking
// ---------------------------------------------------------------------------

/// Fold state for detecting mixed Wrong/Missing runs.
///
/// Counter `a` collects letters that open a run (a Wrong or Missing that does
/// not follow the other kind), counter `b` collects letters that follow a
/// change from one kind to the other. Whenever the status changes while both
/// counters are non-zero, a mixed run is reported. The counters reset only
/// when a status other than Wrong/Missing appears.
#[derive(Debug, Clone, Copy)]
struct RunTracker {
    current: LetterStatus,
    last: LetterStatus,
    a: u32,
    b: u32,
}

impl Default for RunTracker {
    fn default() -> Self {
        Self {
            current: LetterStatus::Null,
            last: LetterStatus::Null,
            a: 0,
            b: 0,
        }
    }
}

impl RunTracker {
    /// Feed the next status. Returns the counters of a mixed run that was
    /// closed by this status, if any.
    fn feed(&mut self, status: LetterStatus) -> Option<(u32, u32)> {
        let mut closed = None;
        if self.current != status {
            self.last = self.current;
            self.current = status;
            if self.a > 0 && self.b > 0 {
                closed = Some((self.a, self.b));
            }
            if !status.is_wrong_or_missing() {
                self.a = 0;
                self.b = 0;
            }
        }
        if self.current != self.last {
            match (self.current, self.last) {
                (LetterStatus::Wrong, LetterStatus::Missing)
                | (LetterStatus::Missing, LetterStatus::Wrong) => self.b += 1,
                (LetterStatus::Wrong, _) | (LetterStatus::Missing, _) => self.a += 1,
                _ => {}
            }
        }
        closed
    }

    /// Report a mixed run still open at the end of the sequence.
    fn finish(self) -> Option<(u32, u32)> {
        (self.a > 0 && self.b > 0).then_some((self.a, self.b))
    }
}

// ---------------------------------------------------------------------------
// Weighted tally
// ---------------------------------------------------------------------------

/// Per-status weights for [`tally`].
#[derive(Debug, Clone, Copy)]
pub struct TallyWeights {
    pub swapped: i32,
    /// Charge Swapped once per pair instead of once per letter.
    pub swapped_per_pair: bool,
    pub three_away_wrong: i32,
    pub wrong_or_missing: i32,
    /// Adjustment applied when a mixed Wrong/Missing run closes.
    pub mixed_run: fn(u32, u32) -> i32,
}

fn score_mixed_run(a: u32, b: u32) -> i32 {
    11 * a.min(b) as i32
}

fn error_mixed_run(a: u32, b: u32) -> i32 {
    a.max(b) as i32
}

/// Score deductions. A mixed run of Wrong and Missing letters earns back
/// 11 points per matched pair, so a substituted letter costs 9 rather than 20.
pub const SCORE_WEIGHTS: TallyWeights = TallyWeights {
    swapped: -3,
    swapped_per_pair: false,
    three_away_wrong: -6,
    wrong_or_missing: -10,
    mixed_run: score_mixed_run,
};

/// Error counting: one per swapped pair, one per three-away, and the larger
/// side of each mixed Wrong/Missing run.
pub const ERROR_WEIGHTS: TallyWeights = TallyWeights {
    swapped: 1,
    swapped_per_pair: true,
    three_away_wrong: 1,
    wrong_or_missing: 0,
    mixed_run: error_mixed_run,
};

/// Sum the weights of every letter in one pass.
pub fn tally(letters: &[AnalysedLetter], weights: &TallyWeights) -> i32 {
    let mut total = 0;
    let mut runs = RunTracker::default();
    let mut open_pair = false;

    for letter in letters {
        match letter.status {
            LetterStatus::Swapped => {
                if !(weights.swapped_per_pair && open_pair) {
                    total += weights.swapped;
                }
                open_pair = !open_pair;
            }
            LetterStatus::ThreeAwayWrongFront | LetterStatus::ThreeAwayWrongBack => {
                total += weights.three_away_wrong;
            }
            LetterStatus::Wrong | LetterStatus::Missing => {
                total += weights.wrong_or_missing;
            }
            _ => {}
        }
        if letter.status != LetterStatus::Swapped {
            open_pair = false;
        }
        if let Some((a, b)) = runs.feed(letter.status) {
            total += (weights.mixed_run)(a, b);
        }
    }
    if let Some((a, b)) = runs.finish() {
        total += (weights.mixed_run)(a, b);
    }
    total
}

/// Score of a classification against a target of `original_length` letters.
pub fn score(letters: &[AnalysedLetter], original_length: usize) -> i32 {
    original_length as i32 * POINTS_PER_LETTER + tally(letters, &SCORE_WEIGHTS)
}

/// Number of errors in a classification.
///
/// Only used to judge two- and three-letter words, where a single error
/// already means the learner needs to see the correct spelling.
pub fn count_errors(letters: &[AnalysedLetter]) -> usize {
    tally(letters, &ERROR_WEIGHTS).max(0) as usize
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

/// Statistics over the runs of consecutive Correct letters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinkStats {
    pub num_links: usize,
    pub largest_link: usize,
    /// Correct letters per link; zero when there are no links.
    pub average_link_size: f64,
}

pub fn link_stats(letters: &[AnalysedLetter]) -> LinkStats {
    let mut num_links = 0;
    let mut largest_link = 0;
    let mut correct = 0;
    let mut current = 0;

    for letter in letters {
        if letter.status == LetterStatus::Correct {
            if current == 0 {
                num_links += 1;
            }
            current += 1;
            correct += 1;
            largest_link = largest_link.max(current);
        } else {
            current = 0;
        }
    }

    let average_link_size = if num_links == 0 {
        0.0
    } else {
        correct as f64 / num_links as f64
    };

    LinkStats {
        num_links,
        largest_link,
        average_link_size,
    }
}

/// Absolute difference between the number of letters the learner typed and
/// the target length.
pub fn length_difference(letters: &[AnalysedLetter], original_length: usize) -> usize {
    let typed = letters
        .iter()
        .filter(|l| l.status.is_present_in_attempt())
        .count();
    typed.abs_diff(original_length)
}
