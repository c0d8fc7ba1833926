// Beyond-wrong rules: attempts too far off to be worth remembering

use spellcoach_core::analysis::AnalysedWord;
use spellcoach_core::enums::{AnalysisState, LetterStatus};

/// Decide whether a finished classification is beyond wrong.
///
/// Rules are checked in order and the first that applies wins:
///
/// 1. More than 3 letters too long or short, with short links (average
///    below 2 for targets under 6 letters, below 3 otherwise).
/// 2. A target longer than 3 letters with at most one link, of at most
///    one letter on average.
/// 3. Every target letter Correct but buried in at least 5 extra letters.
pub fn classify(word: &AnalysedWord, target_len: usize) -> Option<AnalysisState> {
    let average = word.average_link_size();

    if word.length_difference() > 3 && ((target_len < 6 && average < 2.0) || average < 3.0) {
        return Some(AnalysisState::BeyondWrong1);
    }

    if target_len > 3 && word.num_links() <= 1 && average <= 1.0 {
        return Some(AnalysisState::BeyondWrong2);
    }

    if word.length_difference() >= 5 && word.count_status(LetterStatus::Correct) == target_len {
        return Some(AnalysisState::BeyondWrong3);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use spellcoach_core::analysis::AnalysedLetter;

    fn word(chars: &str, codes: &str, original_length: usize) -> AnalysedWord {
        let letters = chars
            .chars()
            .zip(codes.chars())
            .map(|(c, code)| AnalysedLetter::new(c, LetterStatus::from_code(code).unwrap()))
            .collect();
        let mut w = AnalysedWord::from_letters(letters, original_length);
        w.calculate_stats();
        w
    }

    #[test]
    fn big_length_gap_with_short_links() {
        let w = word("elephant", "CCMMMMMM", 8);
        assert_eq!(w.length_difference(), 6);
        assert_eq!(classify(&w, 8), Some(AnalysisState::BeyondWrong1));
    }

    #[test]
    fn big_length_gap_with_long_links_is_not_rule_one() {
        // average 3 on a 3-letter target fails both link thresholds
        let w = word("catxxxx", "CCCWWWW", 3);
        assert_eq!(w.length_difference(), 4);
        assert_eq!(classify(&w, 3), None);
    }

    #[test]
    fn nothing_in_common() {
        let w = word("houseqwzjk", "MMMMMWWWWW", 5);
        assert_eq!(classify(&w, 5), Some(AnalysisState::BeyondWrong2));
    }

    #[test]
    fn single_letter_link() {
        let w = word("houses", "WCWWWM", 5);
        assert_eq!(w.num_links(), 1);
        assert_eq!(classify(&w, 5), Some(AnalysisState::BeyondWrong2));
    }

    #[test]
    fn rule_two_needs_four_letters() {
        let w = word("abcxyz", "MMMWWW", 3);
        assert_eq!(classify(&w, 3), None);
    }

    #[test]
    fn correct_letters_buried_in_junk() {
        let w = word("catxxxxx", "CCCWWWWW", 3);
        assert_eq!(w.length_difference(), 5);
        assert_eq!(classify(&w, 3), Some(AnalysisState::BeyondWrong3));
    }

    #[test]
    fn ordinary_mistakes_pass() {
        assert_eq!(classify(&word("siad", "CSSC", 4), 4), None);
        assert_eq!(classify(&word("becuase", "CCCSSCC", 7), 7), None);
        assert_eq!(classify(&word("cta", "CSS", 3), 3), None);
    }
}
