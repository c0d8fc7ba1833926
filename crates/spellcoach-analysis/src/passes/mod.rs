// Rewrite passes run over a raw alignment
//
// Both passes only ever look at neighbouring letters, so they are cheap
// enough to run on every candidate.

pub mod swap;
pub mod three_away;

pub use swap::detect_swaps;
pub use three_away::detect_three_away;

/// Swap detection needs at least three target letters.
pub const MIN_SWAP_TARGET_LEN: usize = 3;

/// Three-away detection needs at least four target letters.
pub const MIN_THREE_AWAY_TARGET_LEN: usize = 4;

use spellcoach_core::enums::LetterStatus;

/// A Wrong and a Missing letter, in either order.
pub(crate) fn is_wrong_missing_pair(a: LetterStatus, b: LetterStatus) -> bool {
    matches!(
        (a, b),
        (LetterStatus::Wrong, LetterStatus::Missing) | (LetterStatus::Missing, LetterStatus::Wrong)
    )
}
