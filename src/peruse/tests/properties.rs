// peruse/tests/properties.rs

use peruse::{script, Cursor};
use proptest::prelude::*;

const ALPHABET: &str = "[a-cA-C0-9é٣½Ⅻ:#@.+\\-\"\\\\() \t\n\r\u{a0}]{0,24}";

/// Line and column reached by consuming `consumed` from the start of a text.
fn replay(consumed: &str) -> (usize, usize) {
    consumed.chars().fold((1, 1), |(line, column), c| {
        if c == '\n' {
            (line + 1, 1)
        } else {
            (line, column + 1)
        }
    })
}

/// Check that `consumed` followed by the remaining text rebuilds `input`, and
/// that the position matches a replay of `consumed`. `None` means no match, in
/// which case nothing may have moved.
fn check(input: &str, cursor: &Cursor, consumed: Option<String>) {
    match consumed {
        Some(consumed) => {
            assert!(!consumed.is_empty(), "empty match on {:?}", input);
            assert_eq!(format!("{}{}", consumed, cursor.remaining_text()), input);
            assert_eq!((cursor.line(), cursor.column()), replay(&consumed), "input {:?}", input);
        }
        None => {
            assert_eq!(cursor.remaining_text(), input);
            assert_eq!((cursor.line(), cursor.column()), (1, 1), "input {:?}", input);
        }
    }
}

/// Position after `eat_spaces` skipped `skipped`: only space and tab move the
/// column.
fn replay_spaces(skipped: &str) -> (usize, usize) {
    skipped.chars().fold((1, 1), |(line, column), c| match c {
        '\n' => (line + 1, 1),
        ' ' | '\t' => (line, column + 1),
        _ => (line, column),
    })
}

fn pair((first, second): (String, String)) -> String {
    format!("{}:{}", first, second)
}

#[test]
fn property_eat_operations_conserve_text() {
    proptest!(|(input in ALPHABET)| {
        let mut cursor = script("prop", &input);
        let consumed = cursor.eat_word();
        check(&input, &cursor, consumed);

        let mut cursor = script("prop", &input);
        let consumed = cursor.eat_symbol();
        check(&input, &cursor, consumed);

        let mut cursor = script("prop", &input);
        let consumed = cursor.eat_keyword();
        check(&input, &cursor, consumed);

        let mut cursor = script("prop", &input);
        let consumed = cursor.eat_integer();
        if let Some(number) = &consumed {
            assert!(!number.contains(['½', 'Ⅻ']), "non-decimal integer {:?}", number);
        }
        check(&input, &cursor, consumed);

        let mut cursor = script("prop", &input);
        let consumed = cursor.eat_float();
        check(&input, &cursor, consumed);

        let mut cursor = script("prop", &input);
        let consumed = cursor.eat_words().map(pair);
        check(&input, &cursor, consumed);

        let mut cursor = script("prop", &input);
        let consumed = cursor.eat_symbols().map(pair);
        check(&input, &cursor, consumed);

        let mut cursor = script("prop", &input);
        let consumed = cursor.eat_prefixed_symbol("#").map(|(_, full)| full);
        check(&input, &cursor, consumed);

        let mut cursor = script("prop", &input);
        let consumed = cursor.eat_prefixed_word("@").map(|(_, full)| full);
        check(&input, &cursor, consumed);

        let mut cursor = script("prop", &input);
        let consumed = cursor.eat_fixed_form("a").then(|| "(a".to_string());
        check(&input, &cursor, consumed);

        let mut cursor = script("prop", &input);
        let consumed = cursor.eat_string_literal().map(|content| format!("\"{}\"", content));
        check(&input, &cursor, consumed);
    });
}

#[test]
fn property_eat_prefix_matches_begins_with() {
    proptest!(|(input in ALPHABET, split in 0usize..30)| {
        let prefix: String = input.chars().take(split).collect();
        let mut cursor = script("prop", &input);
        let expected = cursor.begins_with(&prefix);

        assert_eq!(cursor.eat(&prefix), expected);
        check(&input, &cursor, expected.then(|| prefix.clone()));
    });
}

#[test]
fn property_eat_spaces_stops_at_non_whitespace() {
    proptest!(|(input in ALPHABET)| {
        let mut cursor = script("prop", &input);
        cursor.eat_spaces();

        let skipped: String = input.chars().take_while(|c| c.is_whitespace()).collect();
        assert_eq!(cursor.remaining_text(), &input[skipped.len()..]);
        assert_eq!((cursor.line(), cursor.column()), replay_spaces(&skipped));
        assert!(!cursor.remaining().first().is_some_and(|c| c.is_whitespace()));
    });
}

#[test]
fn property_words_are_symbols() {
    proptest!(|(input in "[a-zA-Z][a-zA-Z0-9]{0,12}")| {
        assert!(peruse::is_word(&input));
        assert!(peruse::is_symbol(&input));

        let mut cursor = script("prop", &format!("{} rest", input));
        assert_eq!(cursor.eat_word().as_deref(), Some(input.as_str()));
    });
}
