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

/// Symbol-stripped input of `identify_ddd`, classified before any lookup.
#[derive(Debug, PartialEq)]
pub enum PhoneInput<'a> {
    /// The input was exactly two ASCII digits.
    BareDdd(u8),
    /// Anything else; still has to go through prefix stripping and validation.
    FullNumber(Cow<'a, str>),
}
