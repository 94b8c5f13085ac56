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

/// Removes the first occurrence of `pattern` from given string Cow.
/// Returns the cow untouched if pattern is not found.
///
/// Edits in place if string is owned, returns slice if string is borrowed
/// and the pattern is its prefix, and allocates once otherwise.
pub fn remove_first_cow<'a>(cow: Cow<'a, str>, pattern: &str) -> Cow<'a, str> {
    let Some(start) = cow.find(pattern) else {
        return cow;
    };
    let end = start + pattern.len();
    match cow {
        Cow::Borrowed(s) if start == 0 => Cow::Borrowed(&s[end..]),
        Cow::Borrowed(s) => Cow::Owned(fast_cat::concat_str!(&s[..start], &s[end..])),
        Cow::Owned(mut s) => {
            s.replace_range(start..end, "");
            Cow::Owned(s)
        }
    }
}

/// Drops every char contained in `chars`. Borrows if nothing had to be removed.
pub fn remove_chars_cow<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| !chars.contains(c)).collect())
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::string_util::{remove_chars_cow, remove_first_cow};

    #[test]
    fn test_remove_first() {
        let removed = remove_first_cow(Cow::Borrowed("5511994029275"), "55");
        assert!(matches!(removed, Cow::Borrowed("11994029275")));

        let removed = remove_first_cow(Cow::Borrowed("+5511994029275"), "55");
        assert_eq!(removed, "+11994029275");

        let removed = remove_first_cow(Cow::Owned("119555512345".to_owned()), "55");
        assert_eq!(removed, Cow::<str>::Owned("1195512345".to_owned()));

        let removed = remove_first_cow(Cow::Borrowed("1635014415"), "55");
        assert!(matches!(removed, Cow::Borrowed("1635014415")));
    }

    #[test]
    fn test_remove_chars() {
        let symbols = ['(', ')'];
        assert!(matches!(remove_chars_cow("1234", &symbols), Cow::Borrowed("1234")));
        assert_eq!(remove_chars_cow("(12)34", &symbols), "1234");
        assert_eq!(remove_chars_cow("()", &symbols), "");
    }
}
