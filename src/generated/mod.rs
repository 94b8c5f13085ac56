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

/// Generated by `build/rust_build.rs` from `resources/ddd.txt`.
/// Every entry is `(ddd, uf, region)`, sorted by DDD; the region is `None`
/// exactly for units that own a single DDD.
mod ddd_tables {
    include!(concat!(env!("OUT_DIR"), "/ddd_tables.rs"));
}

pub use ddd_tables::DDD_ENTRIES;
