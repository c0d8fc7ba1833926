// Swap detection: merge Wrong/Missing pairs and mark transposed letters

use spellcoach_core::analysis::AnalysedWord;
use spellcoach_core::enums::LetterStatus;

use super::is_wrong_missing_pair;

/// Run both swap passes.
pub fn detect_swaps(word: &mut AnalysedWord) {
    merge_adjacent_pairs(word);
    mark_transpositions(word);
}

/// `xW xM` or `xM xW` collapses to a single Correct `x`.
///
/// A merged pair is skipped as a whole, so in `xW xM xW` only the first two
/// letters merge.
pub fn merge_adjacent_pairs(word: &mut AnalysedWord) {
    let letters = word.letters_mut();
    let mut i = 0;
    while i + 1 < letters.len() {
        let (a, b) = (letters[i], letters[i + 1]);
        if a.character == b.character && is_wrong_missing_pair(a.status, b.status) {
            letters[i].status = LetterStatus::Null;
            letters[i + 1].status = LetterStatus::Correct;
            i += 2;
        } else {
            i += 1;
        }
    }
    word.remove_null();
}

/// `xW yC xM` (or `xM yC xW`) is a transposition of `x` and `y`.
///
/// The Correct letter and the Wrong one become Swapped and the Missing one
/// is dropped, leaving the letters in the order the learner typed them.
pub fn mark_transpositions(word: &mut AnalysedWord) {
    let letters = word.letters_mut();
    for i in 0..letters.len().saturating_sub(2) {
        let (a, middle, c) = (letters[i], letters[i + 1], letters[i + 2]);
        if middle.status != LetterStatus::Correct
            || a.character != c.character
            || !is_wrong_missing_pair(a.status, c.status)
        {
            continue;
        }
        letters[i + 1].status = LetterStatus::Swapped;
        if a.status == LetterStatus::Missing {
            letters[i].status = LetterStatus::Null;
            letters[i + 2].status = LetterStatus::Swapped;
        } else {
            letters[i].status = LetterStatus::Swapped;
            letters[i + 2].status = LetterStatus::Null;
        }
    }
    word.remove_null();
}
