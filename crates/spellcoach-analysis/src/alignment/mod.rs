// Alignment search: greedy shrinking-window matching of the target against
// the attempt

pub mod searcher;

use spellcoach_core::analysis::AnalysedWord;
use spellcoach_core::character::normalize;
use spellcoach_core::options::AnalysisOptions;

pub use searcher::AlignmentSearcher;

/// Which way round the attempt and target are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    /// Both strings reversed. Catches errors near the start of a word that
    /// a forward pass would misplace.
    Reversed,
}

/// One point in the candidate matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlignmentConfig {
    /// Highest attempt index at which a match is accepted.
    pub distance: usize,
    pub direction: Direction,
    /// Try the reversed pair before giving up on a two-letter window.
    pub swap_on_the_fly: bool,
}

/// Attempt and target text prepared for one direction.
///
/// Matching runs on the normalized copies. Emitted letters come from the
/// original copies at the same index, which is sound because normalization
/// never changes length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentText {
    pub attempt: Vec<char>,
    pub attempt_normalized: Vec<char>,
    pub target: Vec<char>,
    pub target_normalized: Vec<char>,
}

impl AlignmentText {
    pub fn new(attempt: &str, target: &str, options: &AnalysisOptions) -> Self {
        let attempt: Vec<char> = attempt.chars().collect();
        let target: Vec<char> = target.chars().collect();
        Self {
            attempt_normalized: normalize(&attempt, options),
            target_normalized: normalize(&target, options),
            attempt,
            target,
        }
    }

    /// The same text with every string reversed.
    pub fn reversed(&self) -> Self {
        let rev = |v: &[char]| v.iter().rev().copied().collect::<Vec<char>>();
        Self {
            attempt: rev(&self.attempt),
            attempt_normalized: rev(&self.attempt_normalized),
            target: rev(&self.target),
            target_normalized: rev(&self.target_normalized),
        }
    }
}

/// Find `needle` in `haystack` at or after `from`.
pub(crate) fn find(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

/// Classify `text` for one distance and swap mode.
///
/// The letters come out in the reading order of `text`; a caller working on
/// reversed text reverses the result.
pub fn align(
    text: &AlignmentText,
    distance: usize,
    swap_on_the_fly: bool,
    original_length: usize,
) -> AnalysedWord {
    AlignmentSearcher::new(text, distance, swap_on_the_fly, original_length).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn find_from_offset() {
        let hay = chars("banana");
        assert_eq!(find(&hay, &chars("an"), 0), Some(1));
        assert_eq!(find(&hay, &chars("an"), 2), Some(3));
        assert_eq!(find(&hay, &chars("an"), 4), None);
        assert_eq!(find(&hay, &chars("x"), 0), None);
    }

    #[test]
    fn find_past_end() {
        let hay = chars("ab");
        assert_eq!(find(&hay, &chars("b"), 2), None);
        assert_eq!(find(&hay, &chars("b"), 7), None);
        assert_eq!(find(&hay, &chars("abc"), 0), None);
        assert_eq!(find(&hay, &[], 2), Some(2));
    }

    #[test]
    fn text_is_normalized_in_lockstep() {
        let text = AlignmentText::new("Caf\u{00C9}", "cafe", &AnalysisOptions::default());
        assert_eq!(text.attempt, chars("Caf\u{00C9}"));
        assert_eq!(text.attempt_normalized, chars("cafe"));
        assert_eq!(text.attempt.len(), text.attempt_normalized.len());
    }

    #[test]
    fn reversed_text() {
        let text = AlignmentText::new("Ab", "abc", &AnalysisOptions::default()).reversed();
        assert_eq!(text.attempt, chars("bA"));
        assert_eq!(text.attempt_normalized, chars("ba"));
        assert_eq!(text.target, chars("cba"));
        assert_eq!(text.target_normalized, chars("cba"));
    }
}
