// peruse/src/numeric/ints.rs

//! Integer literal recognition.

use crate::charclass::{is_digit, is_sign, is_terminator};

/// Length of the digit run up to the first terminator, `None` if a
/// non-digit appears first.
fn digit_run(input: &[char]) -> Option<usize> {
    let mut len = 0;
    for &c in input {
        if is_terminator(c) {
            break;
        }
        if !is_digit(c) {
            return None;
        }
        len += 1;
    }
    Some(len)
}

pub(super) fn unsigned(input: &[char]) -> usize {
    digit_run(input).unwrap_or(0)
}

pub(super) fn signed(input: &[char]) -> usize {
    match input.split_first() {
        Some((&sign, digits)) if is_sign(sign) => match digit_run(digits) {
            Some(len) if len > 0 => len + 1,
            _ => 0,
        },
        _ => 0,
    }
}
