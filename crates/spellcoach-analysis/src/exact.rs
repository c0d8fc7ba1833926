// Exact-match shortcut: attempts equal to the main or an alternate spelling

use spellcoach_core::analysis::AnalysedWord;
use spellcoach_core::character::normalize_str;
use spellcoach_core::enums::{AnalysisState, LetterStatus};
use spellcoach_core::options::AnalysisOptions;
use spellcoach_core::target::TargetWord;

/// Return a finished analysis if `attempt` matches one of the target's
/// spellings after normalization.
///
/// The main spelling is tried first. The letters of the result always come
/// from the matched spelling's own text, so a learner who typed `CAT` for
/// `cat` is shown `cat`.
pub fn exact_match(
    attempt: &str,
    target: &TargetWord,
    options: &AnalysisOptions,
) -> Option<AnalysedWord> {
    let attempt = normalize_str(attempt, options);

    if attempt == normalize_str(target.main_spelling(), options) {
        return Some(all_correct(
            target.main_spelling(),
            target.len(),
            AnalysisState::Exact,
        ));
    }

    target
        .alternate_spellings()
        .iter()
        .filter(|alt| alt.as_str() != target.main_spelling())
        .find(|alt| normalize_str(alt, options) == attempt)
        .map(|alt| all_correct(alt, target.len(), AnalysisState::AlternateSpelling))
}

fn all_correct(spelling: &str, original_length: usize, state: AnalysisState) -> AnalysedWord {
    let mut word = AnalysedWord::new(original_length);
    for c in spelling.chars() {
        word.push(c, LetterStatus::Correct);
    }
    word.calculate_stats();
    word.set_state(state);
    word
}
