// SpellingAnalyser: top-level entry point for analysing attempts.
//
// Holds the normalization options and runs the whole pipeline for one
// attempt: exact-match shortcut, candidate generation and ranking, then the
// beyond-wrong rules on the winner. Analysis is a pure function of the
// options and its inputs, so one analyser can be shared freely.

use spellcoach_core::analysis::AnalysedWord;
use spellcoach_core::options::AnalysisOptions;
use spellcoach_core::target::TargetWord;

use crate::beyond_wrong;
use crate::candidate::{Candidate, CandidateGenerator, select_best};
use crate::exact::exact_match;
use crate::feedback;

/// Analyses spelling attempts with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct SpellingAnalyser {
    options: AnalysisOptions,
}

impl SpellingAnalyser {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: AnalysisOptions) {
        self.options = options;
    }

    /// Treat upper and lower case as equal.
    pub fn set_fold_case(&mut self, value: bool) {
        self.options.fold_case = value;
    }

    /// Treat accented letters as their base letter.
    pub fn set_fold_diacritics(&mut self, value: bool) {
        self.options.fold_diacritics = value;
    }

    /// Classify `attempt` against `target`.
    ///
    /// Always returns a finished analysis with its statistics and state set.
    pub fn analyse(&self, attempt: &str, target: &TargetWord) -> AnalysedWord {
        if let Some(word) = exact_match(attempt, target, &self.options) {
            log::debug!(
                "{:?} matches {:?} ({})",
                attempt,
                target.main_spelling(),
                word.state()
            );
            return word;
        }

        let generator = CandidateGenerator::new(attempt, target.main_spelling(), &self.options);
        let best = select_best(generator.candidates().inspect(|candidate| {
            log::trace!(
                "candidate {:?}: {} {} score={}",
                candidate.config,
                candidate.word.characters(),
                candidate.word.status_codes(),
                candidate.word.score()
            );
        }));

        // There is always at least one configuration to run.
        let mut word = match best {
            Some(candidate) => candidate.word,
            None => AnalysedWord::new(target.len()),
        };
        if let Some(state) = beyond_wrong::classify(&word, target.len()) {
            word.set_state(state);
        }

        log::debug!(
            "{:?} against {:?}: {} {} score={} state={}",
            attempt,
            target.main_spelling(),
            word.characters(),
            word.status_codes(),
            word.score(),
            word.state()
        );
        word
    }

    /// Every candidate for `attempt` in generation order, without the
    /// exact-match shortcut. Useful for seeing why a winner was picked.
    pub fn candidates(&self, attempt: &str, target: &TargetWord) -> Vec<Candidate> {
        CandidateGenerator::new(attempt, target.main_spelling(), &self.options)
            .candidates()
            .collect()
    }

    /// Whether `word`, analysed against `target`, should get animated
    /// feedback.
    pub fn feedback_eligible(&self, word: &AnalysedWord, target: &TargetWord) -> bool {
        feedback::feedback_eligible(word, target.len())
    }
}

/// Analyse one attempt with the given options.
pub fn analyse(attempt: &str, target: &TargetWord, options: &AnalysisOptions) -> AnalysedWord {
    SpellingAnalyser::new(*options).analyse(attempt, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spellcoach_core::enums::AnalysisState;

    #[test]
    fn default_options_fold_everything() {
        let analyser = SpellingAnalyser::default();
        assert_eq!(*analyser.options(), AnalysisOptions::default());
    }

    #[test]
    fn setters_update_options() {
        let mut analyser = SpellingAnalyser::default();
        analyser.set_fold_case(false);
        assert!(!analyser.options().fold_case);
        assert!(analyser.options().fold_diacritics);
        analyser.set_fold_diacritics(false);
        assert_eq!(*analyser.options(), AnalysisOptions::EXACT);
        analyser.set_options(AnalysisOptions::default());
        assert!(analyser.options().fold_case);
    }

    #[test]
    fn case_sensitivity_follows_options() {
        let target = TargetWord::new("Paris");
        let mut analyser = SpellingAnalyser::default();
        assert!(analyser.analyse("paris", &target).is_exact());
        analyser.set_fold_case(false);
        let word = analyser.analyse("paris", &target);
        assert!(!word.is_correct());
        assert_eq!(word.attempt_string(), "paris");
    }

    #[test]
    fn exact_attempt_is_not_reanalysed() {
        let word = analyse("cat", &TargetWord::new("cat"), &AnalysisOptions::default());
        assert_eq!(word.state(), AnalysisState::Exact);
        assert_eq!(word.score(), 30);
    }

    #[test]
    fn candidates_skip_exact_shortcut() {
        let analyser = SpellingAnalyser::default();
        let candidates = analyser.candidates("cat", &TargetWord::new("cat"));
        assert_eq!(candidates.len(), 8);
        assert!(candidates.iter().all(|c| c.word.state() == AnalysisState::NotApplicable));
    }

    #[test]
    fn winner_is_best_candidate() {
        let analyser = SpellingAnalyser::default();
        let target = TargetWord::new("because");
        let word = analyser.analyse("becuase", &target);
        let best_score = analyser
            .candidates("becuase", &target)
            .iter()
            .map(|c| c.word.score())
            .max()
            .unwrap();
        assert_eq!(word.score(), best_score);
    }

    #[test]
    fn feedback_gate_uses_target_length() {
        let analyser = SpellingAnalyser::default();
        let target = TargetWord::new("cat");
        let word = analyser.analyse("cta", &target);
        assert!(analyser.feedback_eligible(&word, &target));
        let word = analyser.analyse("xyz", &target);
        assert!(!analyser.feedback_eligible(&word, &target));
    }
}
