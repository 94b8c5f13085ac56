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

use regex::Regex;

use super::helper_constants::{
    INTERNATIONAL_DIALING_CODE_PATTERN, LANDLINE_PATTERN, MOBILE_PATTERN,
};

pub(super) struct PhoneRegExps {
    /// Full national landline number: DDD followed by 8 digits, the first of
    /// them in 2-5. Only ASCII digits are accepted.
    pub landline_pattern: Regex,

    /// Full national mobile number: DDD followed by `9` and 8 more digits.
    pub mobile_pattern: Regex,

    /// Country calling code, optionally preceded by a plus sign. This is a
    /// heuristic: it is searched anywhere in the number, so a national number
    /// which merely contains "55" matches too. Callers must combine it with
    /// a length check.
    pub international_dialing_code_pattern: Regex,
}

impl PhoneRegExps {
    pub fn new() -> Self {
        // patterns are compile-time constants, failing here is a library bug
        Self {
            landline_pattern: Regex::new(LANDLINE_PATTERN).unwrap(),
            mobile_pattern: Regex::new(MOBILE_PATTERN).unwrap(),
            international_dialing_code_pattern: Regex::new(INTERNATIONAL_DIALING_CODE_PATTERN)
                .unwrap(),
        }
    }
}
