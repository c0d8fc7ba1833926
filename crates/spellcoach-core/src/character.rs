// Character normalization: diacritic folding and case folding
//
// Both foldings are per-character and length preserving, so a normalized
// string can be indexed in lockstep with the original text it came from.

use crate::options::AnalysisOptions;

// ---------------------------------------------------------------------------
// Diacritic folding
// ---------------------------------------------------------------------------

/// Map a Latin-1 accented letter to its unaccented base letter.
///
/// The table is fixed: lowercase and uppercase a, e, i, o, u with grave,
/// acute, circumflex, tilde, diaeresis (and ring for a), c with cedilla,
/// n with tilde, and y with diaeresis. Anything else is returned unchanged.
pub fn remove_diacritic(c: char) -> char {
    match c {
        '\u{00E0}' | '\u{00E1}' | '\u{00E2}' | '\u{00E3}' | '\u{00E4}' | '\u{00E5}' => 'a',
        '\u{00C0}' | '\u{00C1}' | '\u{00C2}' | '\u{00C3}' | '\u{00C4}' | '\u{00C5}' => 'A',
        '\u{00E8}' | '\u{00E9}' | '\u{00EA}' | '\u{00EB}' => 'e',
        '\u{00C8}' | '\u{00C9}' | '\u{00CA}' | '\u{00CB}' => 'E',
        '\u{00EC}' | '\u{00ED}' | '\u{00EE}' | '\u{00EF}' => 'i',
        '\u{00CC}' | '\u{00CD}' | '\u{00CE}' | '\u{00CF}' => 'I',
        '\u{00F2}' | '\u{00F3}' | '\u{00F4}' | '\u{00F5}' | '\u{00F6}' => 'o',
        '\u{00D2}' | '\u{00D3}' | '\u{00D4}' | '\u{00D5}' | '\u{00D6}' => 'O',
        '\u{00F9}' | '\u{00FA}' | '\u{00FB}' | '\u{00FC}' => 'u',
        '\u{00D9}' | '\u{00DA}' | '\u{00DB}' | '\u{00DC}' => 'U',
        '\u{00E7}' => 'c', // ç
        '\u{00C7}' => 'C', // Ç
        '\u{00F1}' => 'n', // ñ
        '\u{00D1}' => 'N', // Ñ
        '\u{00FF}' => 'y', // ÿ
        '\u{0178}' => 'Y', // Ÿ
        _ => c,
    }
}

// ---------------------------------------------------------------------------
// Case folding
// ---------------------------------------------------------------------------

/// Convert a character to lowercase using a fixed table.
///
/// Covers ASCII A-Z and the Latin-1 uppercase block U+00C0..U+00DE, except
/// the multiplication sign U+00D7 which sits inside that block but is not a
/// letter. Other characters are returned unchanged.
pub fn fold_case(c: char) -> char {
    if c.is_ascii_uppercase() {
        return c.to_ascii_lowercase();
    }
    let cp = c as u32;
    if (0xC0..=0xDE).contains(&cp) && cp != 0xD7 {
        // The Latin-1 lowercase block is exactly 0x20 above the uppercase one.
        return char::from_u32(cp + 0x20).unwrap_or(c);
    }
    c
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize one character: diacritics first, then case.
pub fn normalize_char(c: char, options: &AnalysisOptions) -> char {
    let c = if options.fold_diacritics {
        remove_diacritic(c)
    } else {
        c
    };
    if options.fold_case { fold_case(c) } else { c }
}

/// Normalize a character slice according to `options`.
///
/// The result always has the same length as the input.
pub fn normalize(word: &[char], options: &AnalysisOptions) -> Vec<char> {
    word.iter().map(|&c| normalize_char(c, options)).collect()
}

/// Normalize a string according to `options`.
pub fn normalize_str(word: &str, options: &AnalysisOptions) -> String {
    word.chars().map(|c| normalize_char(c, options)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(fold_case: bool, fold_diacritics: bool) -> AnalysisOptions {
        AnalysisOptions {
            fold_case,
            fold_diacritics,
        }
    }

    #[test]
    fn diacritics_fold_to_base_letter() {
        assert_eq!(remove_diacritic('\u{00E9}'), 'e'); // é
        assert_eq!(remove_diacritic('\u{00C5}'), 'A'); // Å
        assert_eq!(remove_diacritic('\u{00F5}'), 'o'); // õ
        assert_eq!(remove_diacritic('\u{00FC}'), 'u'); // ü
        assert_eq!(remove_diacritic('\u{00E7}'), 'c'); // ç
        assert_eq!(remove_diacritic('\u{00D1}'), 'N'); // Ñ
        assert_eq!(remove_diacritic('\u{0178}'), 'Y'); // Ÿ
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(remove_diacritic('a'), 'a');
        assert_eq!(remove_diacritic('\u{00DF}'), '\u{00DF}'); // ß
        assert_eq!(remove_diacritic('\u{0161}'), '\u{0161}'); // š is outside the table
        assert_eq!(remove_diacritic(' '), ' ');
    }

    #[test]
    fn case_folding_ascii_and_latin1() {
        assert_eq!(fold_case('A'), 'a');
        assert_eq!(fold_case('z'), 'z');
        assert_eq!(fold_case('\u{00C4}'), '\u{00E4}'); // Ä -> ä
        assert_eq!(fold_case('\u{00DE}'), '\u{00FE}'); // Þ -> þ
    }

    #[test]
    fn case_folding_skips_non_letters_in_latin1_block() {
        assert_eq!(fold_case('\u{00D7}'), '\u{00D7}'); // ×
        assert_eq!(fold_case('\u{00DF}'), '\u{00DF}'); // ß
        assert_eq!(fold_case('1'), '1');
    }

    #[test]
    fn normalize_applies_diacritics_before_case() {
        let word: Vec<char> = "\u{00C9}COLE".chars().collect(); // ÉCOLE
        let out: String = normalize(&word, &opts(true, true)).into_iter().collect();
        assert_eq!(out, "ecole");
    }

    #[test]
    fn normalize_respects_each_flag() {
        assert_eq!(normalize_str("Caf\u{00E9}", &opts(false, false)), "Caf\u{00E9}");
        assert_eq!(normalize_str("Caf\u{00E9}", &opts(true, false)), "caf\u{00E9}");
        assert_eq!(normalize_str("Caf\u{00E9}", &opts(false, true)), "Cafe");
        assert_eq!(normalize_str("Caf\u{00C9}", &opts(true, true)), "cafe");
    }

    #[test]
    fn normalize_preserves_length() {
        let word: Vec<char> = "\u{00C0}bc D\u{00CB}f".chars().collect();
        assert_eq!(normalize(&word, &opts(true, true)).len(), word.len());
    }

    #[test]
    fn normalize_empty() {
        assert!(normalize(&[], &AnalysisOptions::default()).is_empty());
        assert_eq!(normalize_str("", &AnalysisOptions::default()), "");
    }
}
