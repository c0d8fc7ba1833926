// Cursor state machine for one alignment configuration

use spellcoach_core::analysis::AnalysedWord;
use spellcoach_core::enums::LetterStatus;

use super::{AlignmentText, find};

/// Outcome of one step of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Continue,
    Finished,
}

/// Greedy matcher that walks a pattern window over the target and looks it
/// up in the attempt.
///
/// The window starts as the whole unmatched rest of the target and shrinks
/// until it is found at or before `distance` in the attempt. Every step either
/// advances a cursor or shrinks the window, so the search always ends.
pub struct AlignmentSearcher<'a> {
    text: &'a AlignmentText,
    distance: usize,
    swap_on_the_fly: bool,
    /// Start of the pattern window in the target.
    pattern_start: usize,
    /// Where the next lookup starts in the attempt.
    search_position: usize,
    /// Width of the pattern window.
    length: usize,
    word: AnalysedWord,
}

impl<'a> AlignmentSearcher<'a> {
    pub fn new(
        text: &'a AlignmentText,
        distance: usize,
        swap_on_the_fly: bool,
        original_length: usize,
    ) -> Self {
        Self {
            text,
            distance,
            swap_on_the_fly,
            pattern_start: 0,
            search_position: 0,
            length: text.target.len(),
            word: AnalysedWord::new(original_length),
        }
    }

    /// Run to completion and return the classification.
    pub fn run(mut self) -> AnalysedWord {
        while self.step() == Transition::Continue {}
        self.word
    }

    fn target_len(&self) -> usize {
        self.text.target_normalized.len()
    }

    fn step(&mut self) -> Transition {
        // A window left over from a Missing letter can reach past the end.
        self.length = self
            .length
            .min(self.target_len().saturating_sub(self.pattern_start));

        if self.length == 0 {
            self.emit_attempt(self.search_position, self.text.attempt.len(), LetterStatus::Wrong);
            return Transition::Finished;
        }

        let text = self.text;
        let pattern = &text.target_normalized[self.pattern_start..self.pattern_start + self.length];
        match self.lookup(pattern) {
            Some(location) => self.on_match(location),
            None => self.on_miss(),
        }
    }

    /// Position of `pattern` in the attempt, if within `distance`.
    fn lookup(&self, pattern: &[char]) -> Option<usize> {
        find(&self.text.attempt_normalized, pattern, self.search_position)
            .filter(|&location| location <= self.distance)
    }

    fn on_match(&mut self, location: usize) -> Transition {
        self.emit_attempt(self.search_position, location, LetterStatus::Wrong);
        self.emit_target(self.pattern_start, self.pattern_start + self.length, LetterStatus::Correct);

        self.pattern_start += self.length;
        if self.pattern_start >= self.target_len() {
            self.emit_attempt(location + self.length, self.text.attempt.len(), LetterStatus::Wrong);
            return Transition::Finished;
        }

        self.search_position = location + self.length;
        if self.search_position >= self.text.attempt.len() {
            self.emit_target(self.pattern_start, self.target_len(), LetterStatus::Missing);
            return Transition::Finished;
        }

        self.reset_length();
        Transition::Continue
    }

    fn on_miss(&mut self) -> Transition {
        if self.length > 2 {
            self.length -= 1;
            return Transition::Continue;
        }

        if self.length == 1 {
            self.emit_target(self.pattern_start, self.pattern_start + 1, LetterStatus::Missing);
            self.pattern_start += 1;
            self.reset_length();
            return Transition::Continue;
        }

        // Two-letter window.
        if self.swap_on_the_fly && self.try_swapped_pair() {
            return Transition::Continue;
        }

        let text = self.text;
        let target = &text.target_normalized;
        let first = target[self.pattern_start];
        let after_space = self.pattern_start > 1 && text.target[self.pattern_start - 1] == ' ';
        if first == target[0] || after_space {
            self.length = 1;
            return Transition::Continue;
        }

        let occurrences = target[self.pattern_start..]
            .iter()
            .filter(|&&c| c == first)
            .count();
        if occurrences == 1 {
            self.length = 1;
            return Transition::Continue;
        }

        // Give up on this letter but keep the window at two.
        self.emit_target(self.pattern_start, self.pattern_start + 1, LetterStatus::Missing);
        self.pattern_start += 1;
        Transition::Continue
    }

    /// Look for the two-letter window typed the other way round.
    fn try_swapped_pair(&mut self) -> bool {
        let start = self.pattern_start;
        let reversed = [
            self.text.target_normalized[start + 1],
            self.text.target_normalized[start],
        ];
        let Some(location) = self.lookup(&reversed) else {
            return false;
        };

        self.emit_attempt(self.search_position, location, LetterStatus::Wrong);
        self.word.push(self.text.target[start + 1], LetterStatus::Swapped);
        self.word.push(self.text.target[start], LetterStatus::Swapped);

        self.pattern_start += 2;
        self.search_position = location + 2;
        self.reset_length();
        true
    }

    fn reset_length(&mut self) {
        self.length = self.target_len().saturating_sub(self.pattern_start);
    }

    /// Emit original attempt characters in `from..to`, clamped to the attempt.
    fn emit_attempt(&mut self, from: usize, to: usize, status: LetterStatus) {
        let attempt = &self.text.attempt;
        let to = to.min(attempt.len());
        if from < to {
            self.word.fill(&attempt[from..to], status);
        }
    }

    /// Emit original target characters in `from..to`, clamped to the target.
    fn emit_target(&mut self, from: usize, to: usize, status: LetterStatus) {
        let target = &self.text.target;
        let to = to.min(target.len());
        if from < to {
            self.word.fill(&target[from..to], status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::align;
    use super::*;
    use spellcoach_core::options::AnalysisOptions;

    /// Align forward with the default options and return (characters, codes).
    fn run(attempt: &str, target: &str, distance: usize, swap: bool) -> (String, String) {
        let text = AlignmentText::new(attempt, target, &AnalysisOptions::default());
        let word = align(&text, distance, swap, target.chars().count());
        (word.characters(), word.status_codes())
    }

    fn pair(chars: &str, codes: &str) -> (String, String) {
        (chars.to_string(), codes.to_string())
    }

    #[test]
    fn whole_word_match() {
        assert_eq!(run("cat", "cat", 3, false), pair("cat", "CCC"));
    }

    #[test]
    fn extra_tail_is_wrong() {
        assert_eq!(run("catxxxxx", "cat", 8, false), pair("catxxxxx", "CCCWWWWW"));
    }

    #[test]
    fn short_attempt_leaves_target_missing() {
        assert_eq!(run("el", "elephant", 2, false), pair("elephant", "CCMMMMMM"));
    }

    #[test]
    fn empty_attempt_is_all_missing() {
        assert_eq!(run("", "cat", 2, false), pair("cat", "MMM"));
    }

    #[test]
    fn empty_target_is_all_wrong() {
        assert_eq!(run("abc", "", 3, false), pair("abc", "WWW"));
    }

    #[test]
    fn nothing_in_common() {
        assert_eq!(run("xyz", "abc", 3, false), pair("abcxyz", "MMMWWW"));
    }

    #[test]
    fn leading_junk_is_wrong_when_within_distance() {
        assert_eq!(run("xxxxcat", "cat", 7, false), pair("xxxxcat", "WWWWCCC"));
    }

    #[test]
    fn matches_beyond_distance_are_rejected() {
        assert_eq!(
            run("xxxxcat", "cat", 2, false),
            pair("catxxxxcat", "MMMWWWWWWW")
        );
    }

    #[test]
    fn swap_letters_without_on_the_fly_mode() {
        // Pair detection happens later; the raw alignment has a Wrong/Missing
        // pair around the moved letter.
        assert_eq!(run("siad", "said", 4, false), pair("siaid", "CWCMC"));
    }

    #[test]
    fn swap_on_the_fly_marks_the_pair() {
        assert_eq!(run("siad", "said", 4, true), pair("siad", "CSSC"));
    }

    #[test]
    fn repeated_letter_is_dropped_as_missing() {
        // 'b' occurs twice in "bab", so it is given up on with the window kept
        // at two letters.
        assert_eq!(run("cab", "cbab", 3, false), pair("cbab", "CMCC"));
    }

    #[test]
    fn window_is_clamped_at_end_of_target() {
        assert_eq!(run("cx", "cbb", 2, false), pair("cbbx", "CMMW"));
    }

    #[test]
    fn letter_after_space_gets_single_letter_window() {
        // 'c' is not unique in "cbc" but follows a space.
        assert_eq!(run("abxc", "ab cbc", 4, false), pair("ab xcbc", "CCMWCMM"));
    }

    #[test]
    fn emits_original_characters() {
        let text = AlignmentText::new("CAt", "cat", &AnalysisOptions::default());
        let word = align(&text, 3, false, 3);
        assert_eq!(word.characters(), "cat");
        assert_eq!(word.status_codes(), "CCC");

        let text = AlignmentText::new("CAtX", "cat", &AnalysisOptions::default());
        let word = align(&text, 4, false, 3);
        assert_eq!(word.characters(), "catX");
    }

    #[test]
    fn reversed_swap_uses_reversed_target_text() {
        let text = AlignmentText::new("siad", "said", &AnalysisOptions::default()).reversed();
        let mut word = align(&text, 4, true, 4);
        word.reverse();
        assert_eq!(word.characters(), "siad");
        assert_eq!(word.status_codes(), "CSSC");
    }

    #[test]
    fn attempt_letters_are_preserved_in_order() {
        for (attempt, target) in [("banana", "elephant"), ("bcad", "abcd"), ("qwzjk", "house")] {
            for distance in 2..=attempt.len() {
                for swap in [false, true] {
                    let text = AlignmentText::new(attempt, target, &AnalysisOptions::EXACT);
                    let word = align(&text, distance, swap, target.len());
                    assert_eq!(word.attempt_string(), attempt, "{attempt}/{target} d={distance}");
                }
            }
        }
    }
}
