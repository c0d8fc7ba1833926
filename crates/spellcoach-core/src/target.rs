// Target word: the spelling being tested plus accepted alternatives

/// A word the learner is asked to spell.
///
/// The main spelling drives the letter-by-letter analysis. Alternate
/// spellings are only ever accepted as exact matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    main_spelling: String,
    alternate_spellings: Vec<String>,
}

impl TargetWord {
    /// Create a target with no alternate spellings.
    pub fn new(main_spelling: impl Into<String>) -> Self {
        Self {
            main_spelling: main_spelling.into(),
            alternate_spellings: Vec::new(),
        }
    }

    /// Add alternate spellings. Exact duplicates of existing spellings
    /// are ignored.
    pub fn with_alternates<I, S>(mut self, alternates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for alt in alternates {
            let alt = alt.into();
            if alt != self.main_spelling && !self.alternate_spellings.contains(&alt) {
                self.alternate_spellings.push(alt);
            }
        }
        self
    }

    pub fn main_spelling(&self) -> &str {
        &self.main_spelling
    }

    pub fn alternate_spellings(&self) -> &[String] {
        &self.alternate_spellings
    }

    /// Number of characters in the main spelling.
    pub fn len(&self) -> usize {
        self.main_spelling.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.main_spelling.is_empty()
    }

    /// All spellings, main spelling first.
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.main_spelling.as_str())
            .chain(self.alternate_spellings.iter().map(String::as_str))
    }
}
