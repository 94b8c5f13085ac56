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

use thiserror::Error;

/// Reasons a DDD could not be identified.
///
/// The `Display` texts are user facing and kept stable, callers compare
/// against them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DddError {
    /// The input is neither a bare two digit DDD nor a valid landline or
    /// mobile number once symbols and the country code are stripped.
    #[error("Número de telefone inválido.")]
    InvalidPhoneNumber,
    /// The DDD was read correctly but is not assigned to any federative unit.
    #[error("DDD {0} inválido.")]
    InvalidAreaCode(u8),
}
