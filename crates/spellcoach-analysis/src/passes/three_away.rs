// Three-away detection: a letter typed three places from where it belongs

use spellcoach_core::analysis::AnalysedWord;
use spellcoach_core::enums::LetterStatus;

use super::is_wrong_missing_pair;

/// Mark Wrong/Missing letter pairs three positions apart.
///
/// The two letters between them must share a status, either Correct or
/// Swapped. The scan runs front to back in place, and the Front/Back
/// statuses record which end came first.
pub fn detect_three_away(word: &mut AnalysedWord) {
    let letters = word.letters_mut();
    for i in 0..letters.len().saturating_sub(3) {
        let (front, back) = (letters[i], letters[i + 3]);
        let inner = letters[i + 1].status;
        if front.character != back.character
            || !is_wrong_missing_pair(front.status, back.status)
            || letters[i + 2].status != inner
            || !matches!(inner, LetterStatus::Correct | LetterStatus::Swapped)
        {
            continue;
        }
        let (front_status, back_status) = if front.status == LetterStatus::Wrong {
            (LetterStatus::ThreeAwayWrongFront, LetterStatus::ThreeAwayMissingBack)
        } else {
            (LetterStatus::ThreeAwayMissingFront, LetterStatus::ThreeAwayWrongBack)
        };
        letters[i].status = front_status;
        letters[i + 3].status = back_status;
    }
}
