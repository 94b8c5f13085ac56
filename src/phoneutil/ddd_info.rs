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

use serde::Serialize;

use crate::i18n::Uf;

use super::errors::DddError;

/// Where a DDD belongs.
///
/// `region` is `None` for units owning a single DDD (e.g. Alagoas, `82`)
/// and always set otherwise. Serializes as `{"state": .., "region": ..}`,
/// omitting `region` when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DddInfo {
    #[serde(skip)]
    pub uf: Uf,
    /// Display name of `uf`, e.g. `"São Paulo"`.
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'static str>,
}

impl DddInfo {
    pub fn new(uf: Uf, region: Option<&'static str>) -> Self {
        Self { uf, state: uf.name(), region }
    }
}

/// Flat, three-way view of a DDD resolution: `{state, region}`, `{state}`
/// or `{error}`.
///
/// Meant for callers that hand the outcome over as data (JSON and alike)
/// and branch on which keys are present. Rust callers usually want the
/// `Result` returned by `PhoneUtil::identify_ddd` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DddLookup {
    Found(DddInfo),
    Failed { error: String },
}

impl DddLookup {
    pub fn state(&self) -> Option<&str> {
        match self {
            DddLookup::Found(info) => Some(info.state),
            DddLookup::Failed { .. } => None,
        }
    }

    pub fn region(&self) -> Option<&str> {
        match self {
            DddLookup::Found(info) => info.region,
            DddLookup::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DddLookup::Found(_) => None,
            DddLookup::Failed { error } => Some(error.as_str()),
        }
    }
}

impl From<Result<DddInfo, DddError>> for DddLookup {
    fn from(value: Result<DddInfo, DddError>) -> Self {
        match value {
            Ok(info) => DddLookup::Found(info),
            Err(err) => DddLookup::Failed { error: err.to_string() },
        }
    }
}
