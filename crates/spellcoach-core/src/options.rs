// Analysis options

/// Normalization options applied to both the attempt and the target
/// before they are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisOptions {
    /// Treat upper and lower case letters as equal.
    pub fold_case: bool,
    /// Treat accented Latin-1 letters as their base letter.
    pub fold_diacritics: bool,
}

impl AnalysisOptions {
    /// Options that compare characters exactly.
    pub const EXACT: Self = Self {
        fold_case: false,
        fold_diacritics: false,
    };
}

impl Default for AnalysisOptions {
    /// Learners get capitals and accents corrected automatically.
    fn default() -> Self {
        Self {
            fold_case: true,
            fold_diacritics: true,
        }
    }
}
