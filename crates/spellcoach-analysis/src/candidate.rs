// Candidate generation and ranking
//
// Every configuration runs the same fixed pipeline (align, swap pass,
// three-away pass, stats). Ranking is a pure reduction over the resulting
// sequence, so the generation order is the tie-break.

use std::cmp::Ordering;

use spellcoach_core::analysis::AnalysedWord;
use spellcoach_core::options::AnalysisOptions;

use crate::alignment::{AlignmentConfig, AlignmentText, Direction, align};
use crate::passes::{
    MIN_SWAP_TARGET_LEN, MIN_THREE_AWAY_TARGET_LEN, detect_swaps, detect_three_away,
};

/// Smallest distance tried.
pub const MIN_DISTANCE: usize = 2;

/// Order of the sub-configurations tried at each distance.
const SUB_CONFIGURATIONS: [(Direction, bool); 4] = [
    (Direction::Forward, false),
    (Direction::Reversed, false),
    (Direction::Forward, true),
    (Direction::Reversed, true),
];

/// One classification and the configuration that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub config: AlignmentConfig,
    pub word: AnalysedWord,
}

/// All configurations for an attempt of `attempt_len` letters, in
/// generation order: distance from `attempt_len` down to 2, four
/// sub-configurations each.
///
/// Attempts shorter than two letters still get the distance-2 round.
pub fn configurations(attempt_len: usize) -> impl Iterator<Item = AlignmentConfig> {
    (MIN_DISTANCE..=attempt_len.max(MIN_DISTANCE))
        .rev()
        .flat_map(|distance| {
            SUB_CONFIGURATIONS
                .into_iter()
                .map(move |(direction, swap_on_the_fly)| AlignmentConfig {
                    distance,
                    direction,
                    swap_on_the_fly,
                })
        })
}

/// Runs the per-configuration pipeline for one attempt and one spelling.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    forward: AlignmentText,
    reversed: AlignmentText,
    /// Main spelling length. Gates the swap and three-away passes.
    target_len: usize,
}

impl CandidateGenerator {
    pub fn new(attempt: &str, target: &str, options: &AnalysisOptions) -> Self {
        let forward = AlignmentText::new(attempt, target, options);
        let reversed = forward.reversed();
        let target_len = forward.target.len();
        Self {
            forward,
            reversed,
            target_len,
        }
    }

    pub fn attempt_len(&self) -> usize {
        self.forward.attempt.len()
    }

    /// Produce the finished candidate for one configuration.
    pub fn run(&self, config: AlignmentConfig) -> AnalysedWord {
        let text = match config.direction {
            Direction::Forward => &self.forward,
            Direction::Reversed => &self.reversed,
        };
        let mut word = align(text, config.distance, config.swap_on_the_fly, self.target_len);
        if config.direction == Direction::Reversed {
            word.reverse();
        }
        if self.target_len >= MIN_SWAP_TARGET_LEN {
            detect_swaps(&mut word);
        }
        if self.target_len >= MIN_THREE_AWAY_TARGET_LEN {
            detect_three_away(&mut word);
        }
        word.calculate_stats();
        word
    }

    /// Every candidate in generation order.
    pub fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        configurations(self.attempt_len()).map(|config| Candidate {
            config,
            word: self.run(config),
        })
    }
}

/// Ranking order of two candidates: `Less` means `a` is better.
///
/// Higher score first, then higher average link size, then larger largest
/// link. Length difference plays no part.
pub fn rank_cmp(a: &AnalysedWord, b: &AnalysedWord) -> Ordering {
    b.score()
        .cmp(&a.score())
        .then_with(|| b.average_link_size().total_cmp(&a.average_link_size()))
        .then_with(|| b.largest_link().cmp(&a.largest_link()))
}

/// Pick the best candidate. Among equals the earliest one wins.
pub fn select_best<I>(candidates: I) -> Option<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    candidates.into_iter().reduce(|best, next| {
        if rank_cmp(&next.word, &best.word) == Ordering::Less {
            next
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use spellcoach_core::analysis::AnalysedLetter;
    use spellcoach_core::enums::LetterStatus;

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

    fn candidate(distance: usize, w: AnalysedWord) -> Candidate {
        Candidate {
            config: AlignmentConfig {
                distance,
                direction: Direction::Forward,
                swap_on_the_fly: false,
            },
            word: w,
        }
    }

    // -- configurations --

    #[test]
    fn configuration_order() {
        let configs: Vec<_> = configurations(3).collect();
        assert_eq!(configs.len(), 8);
        assert_eq!(configs[0].distance, 3);
        assert_eq!(configs[0].direction, Direction::Forward);
        assert!(!configs[0].swap_on_the_fly);
        assert_eq!(configs[1].direction, Direction::Reversed);
        assert!(!configs[1].swap_on_the_fly);
        assert_eq!(configs[2].direction, Direction::Forward);
        assert!(configs[2].swap_on_the_fly);
        assert_eq!(configs[3].direction, Direction::Reversed);
        assert!(configs[3].swap_on_the_fly);
        assert!(configs[4..].iter().all(|c| c.distance == 2));
    }

    #[test]
    fn configuration_count() {
        assert_eq!(configurations(7).count(), 4 * 6);
        assert_eq!(configurations(2).count(), 4);
    }

    #[test]
    fn short_attempts_still_get_one_round() {
        assert_eq!(configurations(0).count(), 4);
        assert_eq!(configurations(1).count(), 4);
        assert!(configurations(0).all(|c| c.distance == MIN_DISTANCE));
    }

    // -- ranking --

    #[test]
    fn higher_score_wins() {
        let good = word("siad", "CSSC", 4);
        let bad = word("siaid", "CWCMC", 4);
        assert_eq!(rank_cmp(&good, &bad), Ordering::Less);
        assert_eq!(rank_cmp(&bad, &good), Ordering::Greater);
    }

    #[test]
    fn average_link_breaks_score_ties() {
        // both 34; average link 1.5 against 1.0
        let a = word("abcad", "fCCBC", 4);
        let b = word("siad", "CSSC", 4);
        assert_eq!(a.score(), b.score());
        assert_eq!(rank_cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn largest_link_breaks_average_ties() {
        // same score and average, links of 3+1 against 2+2
        let a = word("abcxd", "CCCWC", 4);
        let b = word("abxcd", "CCWCC", 4);
        assert_eq!(a.score(), b.score());
        assert_eq!(a.average_link_size(), b.average_link_size());
        assert_eq!(rank_cmp(&a, &b), Ordering::Less);
        assert_eq!(rank_cmp(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn length_difference_is_not_a_criterion() {
        let longer_gap = word("catd", "CCCM", 4);
        let no_gap = word("catx", "CCCW", 4);
        assert_eq!(longer_gap.length_difference(), 1);
        assert_eq!(no_gap.length_difference(), 0);
        assert_eq!(rank_cmp(&longer_gap, &no_gap), Ordering::Equal);

        let best = select_best([candidate(3, longer_gap.clone()), candidate(2, no_gap.clone())])
            .unwrap();
        assert_eq!(best.word, longer_gap);
        let best = select_best([candidate(3, no_gap.clone()), candidate(2, longer_gap)]).unwrap();
        assert_eq!(best.word, no_gap);
    }

    #[test]
    fn select_best_keeps_first_of_equals() {
        let w = word("cta", "CSS", 3);
        let best = select_best([candidate(3, w.clone()), candidate(2, w)]).unwrap();
        assert_eq!(best.config.distance, 3);
    }

    #[test]
    fn select_best_of_nothing() {
        assert!(select_best(Vec::new()).is_none());
    }

    // -- pipeline --

    #[test]
    fn reversed_run_is_read_forwards() {
        let generator = CandidateGenerator::new("bcad", "abcd", &AnalysisOptions::default());
        let w = generator.run(AlignmentConfig {
            distance: 4,
            direction: Direction::Reversed,
            swap_on_the_fly: false,
        });
        assert_eq!(w.characters(), "abcad");
        assert_eq!(w.status_codes(), "fCCBC");
        assert_eq!(w.score(), 34);
    }

    #[test]
    fn short_targets_skip_the_passes() {
        // "ab" typed "ba": a two-letter target never gets swap detection
        let generator = CandidateGenerator::new("ba", "ab", &AnalysisOptions::default());
        let w = generator.run(AlignmentConfig {
            distance: 2,
            direction: Direction::Forward,
            swap_on_the_fly: false,
        });
        assert_eq!(w.count_status(LetterStatus::Swapped), 0);
    }

    #[test]
    fn candidate_count_matches_configurations() {
        let generator = CandidateGenerator::new("becuase", "because", &AnalysisOptions::default());
        assert_eq!(generator.candidates().count(), 4 * 6);
    }
}
