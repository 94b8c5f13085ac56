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

use std::fmt;

use strum::{EnumIter, EnumString, IntoStaticStr};

/// Brazilian federative unit (UF): the 26 states and the federal district.
///
/// `code()` gives the two-letter abbreviation (`"SP"`), while `name()` and
/// `Display` give the Brazilian-Portuguese display name (`"São Paulo"`).
/// Parsing with [`str::parse`] accepts the abbreviation in any ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Uf {
    Ac,
    Al,
    Ap,
    Am,
    Ba,
    Ce,
    Df,
    Es,
    Go,
    Ma,
    Mt,
    Ms,
    Mg,
    Pa,
    Pb,
    Pr,
    Pe,
    Pi,
    Rj,
    Rn,
    Rs,
    Ro,
    Rr,
    Sc,
    Sp,
    Se,
    To,
}

impl Uf {
    /// Two-letter abbreviation, e.g. `"SP"`.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Display name with diacritics, e.g. `"São Paulo"`.
    pub fn name(self) -> &'static str {
        match self {
            Uf::Ac => "Acre",
            Uf::Al => "Alagoas",
            Uf::Ap => "Amapá",
            Uf::Am => "Amazonas",
            Uf::Ba => "Bahia",
            Uf::Ce => "Ceará",
            Uf::Df => "Distrito Federal",
            Uf::Es => "Espírito Santo",
            Uf::Go => "Goiás",
            Uf::Ma => "Maranhão",
            Uf::Mt => "Mato Grosso",
            Uf::Ms => "Mato Grosso do Sul",
            Uf::Mg => "Minas Gerais",
            Uf::Pa => "Pará",
            Uf::Pb => "Paraíba",
            Uf::Pr => "Paraná",
            Uf::Pe => "Pernambuco",
            Uf::Pi => "Piauí",
            Uf::Rj => "Rio de Janeiro",
            Uf::Rn => "Rio Grande do Norte",
            Uf::Rs => "Rio Grande do Sul",
            Uf::Ro => "Rondônia",
            Uf::Rr => "Roraima",
            Uf::Sc => "Santa Catarina",
            Uf::Sp => "São Paulo",
            Uf::Se => "Sergipe",
            Uf::To => "Tocantins",
        }
    }
}

impl fmt::Display for Uf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
