// peruse/src/numeric/floats.rs

//! Float literal recognition.
//!
//! The fractional point is optional, so `12` is also accepted as a float.
//! Callers that need to tell integers apart try the integer alternation
//! first.

use crate::charclass::{is_digit, is_sign, is_terminator};

const UNSIGNED_MIN_LEN: usize = 2;
const SIGNED_MIN_LEN: usize = 3;

/// Length of the digits-and-point run up to the first terminator. A second
/// `.` or any other code point rejects the run.
fn decimal_run(input: &[char]) -> Option<usize> {
    let mut len = 0;
    let mut seen_point = false;
    for &c in input {
        if c == '.' {
            if seen_point {
                return None;
            }
            seen_point = true;
            len += 1;
            continue;
        }
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
    match decimal_run(input) {
        Some(len) if len >= UNSIGNED_MIN_LEN => len,
        _ => 0,
    }
}

pub(super) fn signed(input: &[char]) -> usize {
    match input.split_first() {
        Some((&sign, rest)) if is_sign(sign) => match decimal_run(rest) {
            Some(len) if len + 1 >= SIGNED_MIN_LEN => len + 1,
            _ => 0,
        },
        _ => 0,
    }
}
