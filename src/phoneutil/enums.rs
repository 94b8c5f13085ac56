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

use strum::EnumIter;

/// The two numbering patterns of Brazilian national numbers.
///
/// Functions taking an `Option<PhoneType>` treat `None` as "either kind".
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneType {
    /// **Fixed-line numbers.**
    /// 10 digits: the DDD followed by an 8 digit subscriber number starting
    /// with 2, 3, 4 or 5. Example: `1635014415`.
    Landline,
    /// **Mobile numbers.**
    /// 11 digits: the DDD followed by a 9 digit subscriber number starting
    /// with 9. Example: `11994029275`.
    Mobile,
}
