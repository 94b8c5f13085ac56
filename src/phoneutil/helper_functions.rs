// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use rand::Rng;

use crate::string_util::remove_chars_cow;

use super::helper_constants::{DDD_LENGTH, PHONE_SYMBOLS};

/// Strips the formatting symbols `(`, `)`, `-`, `+` and space.
/// Idempotent; returns borrowed input when there is nothing to strip.
pub(super) fn remove_symbols(phone_number: &str) -> Cow<'_, str> {
    remove_chars_cow(phone_number, &PHONE_SYMBOLS)
}

/// Parses a string made of exactly two ASCII digits. `"00"` yields `Some(0)`,
/// deciding whether that value is an assigned DDD is left to the tables.
pub(super) fn parse_ddd(s: &str) -> Option<u8> {
    match s.as_bytes() {
        &[tens @ b'0'..=b'9', units @ b'0'..=b'9'] => Some((tens - b'0') * 10 + (units - b'0')),
        _ => None,
    }
}

/// Takes the DDD from the first two chars of a validated national number.
pub(super) fn extract_ddd(national_number: &str) -> Option<u8> {
    national_number.get(..DDD_LENGTH).and_then(parse_ddd)
}

/// Appends a random DDD whose digits are both in 1..=9. The result is
/// structurally valid but not necessarily assigned.
pub(super) fn push_random_ddd<R: Rng>(out: &mut String, rng: &mut R) {
    let ddd = rng.gen_range(1..=9u8) * 10 + rng.gen_range(1..=9u8);
    let mut buf = itoa::Buffer::new();
    out.push_str(buf.format(ddd));
}

pub(super) fn push_random_digits<R: Rng>(out: &mut String, count: usize, rng: &mut R) {
    for _ in 0..count {
        out.push(char::from(b'0' + rng.gen_range(0..=9u8)));
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::{extract_ddd, parse_ddd, push_random_ddd, push_random_digits, remove_symbols};

    #[test]
    fn remove_symbols_keeps_everything_else() {
        assert_eq!(remove_symbols("(88) 99644-3006"), "88996443006");
        assert_eq!(remove_symbols("+55 (11) 9940-29275"), "5511994029275");
        assert_eq!(remove_symbols("11abc99999"), "11abc99999");
        assert_eq!(remove_symbols("11.9940/2927"), "11.9940/2927");
        assert_eq!(remove_symbols("()-+ "), "");
    }

    #[test]
    fn remove_symbols_is_idempotent() {
        for input in ["(88) 99644-3006", "+5588996443006", "abc - def", "", "  ", "11"] {
            let once = remove_symbols(input).into_owned();
            let twice = remove_symbols(&once);
            assert_eq!(once, twice, "for input {input:?}");
        }
    }

    #[test]
    fn parse_ddd_accepts_two_ascii_digits_only() {
        assert_eq!(parse_ddd("11"), Some(11));
        assert_eq!(parse_ddd("00"), Some(0));
        assert_eq!(parse_ddd("09"), Some(9));
        assert_eq!(parse_ddd("99"), Some(99));
        assert_eq!(parse_ddd("1"), None);
        assert_eq!(parse_ddd("119"), None);
        assert_eq!(parse_ddd("1a"), None);
        assert_eq!(parse_ddd("١١"), None);
        assert_eq!(parse_ddd(""), None);
    }

    #[test]
    fn extract_ddd_from_national_number() {
        assert_eq!(extract_ddd("88996443006"), Some(88));
        assert_eq!(extract_ddd("1635014415"), Some(16));
        assert_eq!(extract_ddd("1"), None);
    }

    #[test]
    fn random_ddd_has_no_zero_digit() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut out = String::new();
            push_random_ddd(&mut out, &mut rng);
            assert_eq!(out.len(), 2);
            assert!(!out.contains('0'), "{out}");
        }
    }

    #[test]
    fn random_digits_have_requested_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut out = String::from("x");
        push_random_digits(&mut out, 7, &mut rng);
        assert_eq!(out.len(), 8);
        assert!(out[1..].bytes().all(|b| b.is_ascii_digit()));
    }
}
