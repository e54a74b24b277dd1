//! Similarity scoring between two work names.
//!
//! # Invariants
//! - Scores lie in `[0, 1]`.
//! - `score(a, b) == score(b, a)` bit-for-bit.
//! - No term is negative; more shared tokens never lower the score.
//!
//! Token contributions are accumulated in integer tenths so that summation
//! order cannot break symmetry.

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-_]+").expect("valid token split regex"));

pub const EXACT_SCORE: f64 = 1.0;
pub const CONTAINMENT_SCORE: f64 = 0.85;

const TOKEN_EQUAL_TENTHS: u32 = 3;
const TOKEN_CONTAINS_TENTHS: u32 = 2;
const TOKEN_PREFIX_TENTHS: u32 = 1;
const TOKEN_CAP_TENTHS: u32 = 8;
const MIN_TOKEN_CHARS: usize = 3;
const SHARED_PREFIX_CHARS: usize = 4;

/// Scores similarity of two work names in `[0, 1]`.
///
/// Exact match (case-insensitive, trimmed) is `1.0`, containment in either
/// direction is `0.85`, otherwise token overlap is summed and capped at
/// `0.8`.
///
/// A blank name scores `0.0` against any non-blank name. Plain substring
/// containment would rate it `0.85`, since the empty string is contained in
/// every name; blank input is treated as no evidence instead.
pub fn score(a: &str, b: &str) -> f64 {
    let left = a.trim().to_lowercase();
    let right = b.trim().to_lowercase();

    if left == right {
        return EXACT_SCORE;
    }
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    if left.contains(right.as_str()) || right.contains(left.as_str()) {
        return CONTAINMENT_SCORE;
    }

    let left_tokens = tokenize(&left);
    let right_tokens = tokenize(&right);

    let mut tenths = 0_u32;
    for w1 in &left_tokens {
        for w2 in &right_tokens {
            tenths += token_pair_tenths(w1, w2);
        }
    }

    f64::from(tenths.min(TOKEN_CAP_TENTHS)) / 10.0
}

fn tokenize(value: &str) -> Vec<&str> {
    TOKEN_SPLIT_RE
        .split(value)
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .collect()
}

fn token_pair_tenths(w1: &str, w2: &str) -> u32 {
    if w1 == w2 {
        TOKEN_EQUAL_TENTHS
    } else if w1.contains(w2) || w2.contains(w1) {
        TOKEN_CONTAINS_TENTHS
    } else if shared_prefix(w1, w2) {
        TOKEN_PREFIX_TENTHS
    } else {
        0
    }
}

fn shared_prefix(w1: &str, w2: &str) -> bool {
    w1.chars()
        .take(SHARED_PREFIX_CHARS)
        .eq(w2.chars().take(SHARED_PREFIX_CHARS))
}
