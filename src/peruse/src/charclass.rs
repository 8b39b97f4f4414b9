// peruse/src/charclass.rs

//! Code point classes shared by the scanner and the numeric recognizers.
//!
//! Letters and digits are classified by Unicode general category: any `L*`
//! category is a letter and only `Nd` is a digit.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Letters start every word, symbol and keyword.
pub(crate) fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Decimal digits in any script, such as `7` or `٣`.
pub(crate) fn is_digit(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

/// Code points that end an identifier or numeric literal without rejecting it.
pub(crate) fn is_terminator(c: char) -> bool {
    matches!(c, ' ' | ')' | '\n')
}

pub(crate) fn is_sign(c: char) -> bool {
    matches!(c, '+' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_include_non_ascii() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(is_letter('é'));
        assert!(is_letter('中'));
        assert!(!is_letter('1'));
        assert!(!is_letter('_'));
        assert!(!is_letter('-'));
        assert!(!is_letter('Ⅻ'));
        assert!(!is_letter('\u{301}'));
    }

    #[test]
    fn test_digits() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(is_digit('٣'));
        assert!(!is_digit('a'));
        assert!(!is_digit('.'));
    }

    #[test]
    fn test_other_numbers_are_not_digits() {
        for c in ['½', '²', 'Ⅻ', '①'] {
            assert!(!is_digit(c), "{:?}", c);
        }
    }

    #[test]
    fn test_terminators() {
        assert!(is_terminator(' '));
        assert!(is_terminator(')'));
        assert!(is_terminator('\n'));
        assert!(!is_terminator('\t'));
        assert!(!is_terminator('('));
    }
}
