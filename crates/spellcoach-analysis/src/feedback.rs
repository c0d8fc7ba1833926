// Feedback gate

use spellcoach_core::analysis::AnalysedWord;

/// Targets shorter than this get feedback only for near misses.
pub const SHORT_WORD_LEN: usize = 4;

/// Whether an analysis is worth animating for the learner.
///
/// Beyond-wrong attempts never are. For short targets the attempt needs at
/// least one Correct letter and no more than one error, otherwise the
/// learner is better off just seeing the word.
pub fn feedback_eligible(word: &AnalysedWord, target_len: usize) -> bool {
    if word.is_beyond_wrong() {
        return false;
    }
    if target_len < SHORT_WORD_LEN {
        return word.num_correct() >= 1 && word.num_errors() <= 1;
    }
    true
}
