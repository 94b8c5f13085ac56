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

use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
};

use log::{debug, error, trace, warn};
use rand::Rng;

use super::phone_regexps::PhoneRegExps;
use crate::{
    generated::DDD_ENTRIES,
    i18n::Uf,
    phoneutil::{
        PhoneType,
        ddd_info::{DddInfo, DddLookup},
        errors::DddError,
        helper_constants::{
            BRAZIL_COUNTRY_CODE, DDD_LENGTH, FORMATTED_SUFFIX_LENGTH,
            LANDLINE_SUBSCRIBER_LENGTH, MAX_LENGTH_FOR_NATIONAL_NUMBER, MOBILE_LEADING_DIGIT,
            MOBILE_SUBSCRIBER_LENGTH,
        },
        helper_functions::{
            extract_ddd, parse_ddd, push_random_ddd, push_random_digits, remove_symbols,
        },
        helper_types::PhoneInput,
    },
    string_util::remove_first_cow,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, DddError>;

pub struct PhoneUtil {
    /// Compiled landline, mobile and country code patterns.
    reg_exps: PhoneRegExps,

    /// Every assigned DDD and the federative unit owning it.
    ddd_to_uf: HashMap<u8, Uf>,

    /// Region label of every DDD whose unit owns more than one DDD.
    ddd_to_region: HashMap<u8, &'static str>,

    /// Units owning exactly one DDD. Their DDD has no region, the unit
    /// itself is precise enough.
    ufs_with_single_ddd: HashSet<Uf>,
}

impl Default for PhoneUtil {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneUtil {
    /// Builds the util over the compiled-in DDD table. Prefer the shared
    /// `PHONE_UTIL` instance unless an owned one is needed.
    pub fn new() -> Self {
        Self::new_for_entries(DDD_ENTRIES)
    }

    pub(crate) fn new_for_entries(entries: &[(u8, Uf, Option<&'static str>)]) -> Self {
        let mut instance = Self {
            reg_exps: PhoneRegExps::new(),
            ddd_to_uf: HashMap::with_capacity(entries.len()),
            ddd_to_region: HashMap::with_capacity(entries.len()),
            ufs_with_single_ddd: HashSet::new(),
        };

        let mut ddd_count_by_uf = HashMap::<Uf, usize>::new();
        for &(ddd, uf, region) in entries {
            instance.ddd_to_uf.insert(ddd, uf);
            if let Some(region) = region {
                instance.ddd_to_region.insert(ddd, region);
            }
            *ddd_count_by_uf.entry(uf).or_default() += 1;
        }

        instance.ufs_with_single_ddd.extend(
            ddd_count_by_uf
                .into_iter()
                .filter_map(|(uf, count)| (count == 1).then_some(uf)),
        );
        instance
    }

    /// Removes `(`, `)`, `-`, `+` and spaces from a phone number. Other
    /// characters, letters included, are left as they are, so the result is
    /// not necessarily made of digits only.
    pub fn remove_symbols<'a>(&self, phone_number: &'a str) -> Cow<'a, str> {
        remove_symbols(phone_number)
    }

    /// Removes the Brazilian country calling code when the number looks like
    /// it carries one: it contains "55" and, spaces aside, is longer than
    /// 11 characters. Only the first "55" is removed; a leading plus sign is
    /// kept (`"+5511994029275"` -> `"+11994029275"`).
    ///
    /// This is a heuristic, a national number longer than 11 characters that
    /// merely contains "55" loses it as well.
    pub fn remove_international_dialing_code<'a>(&self, phone_number: &'a str) -> Cow<'a, str> {
        self.strip_international_dialing_code(Cow::Borrowed(phone_number))
    }

    fn strip_international_dialing_code<'a>(&self, phone_number: Cow<'a, str>) -> Cow<'a, str> {
        let has_country_code = self
            .reg_exps
            .international_dialing_code_pattern
            .is_match(&phone_number);
        if !has_country_code {
            return phone_number;
        }

        let significant_len = phone_number.chars().filter(|c| *c != ' ').count();
        if significant_len <= MAX_LENGTH_FOR_NATIONAL_NUMBER {
            return phone_number;
        }
        trace!("Stripping country code from {}", phone_number);
        remove_first_cow(phone_number, BRAZIL_COUNTRY_CODE)
    }

    /// Checks a national number (DDD included, digits only, no country code)
    /// against the landline pattern, the mobile one, or either when
    /// `phone_type` is `None`. It does not check that the number exists.
    pub fn is_valid(&self, phone_number: &str, phone_type: Option<PhoneType>) -> bool {
        match phone_type {
            Some(PhoneType::Landline) => self.is_valid_landline(phone_number),
            Some(PhoneType::Mobile) => self.is_valid_mobile(phone_number),
            None => self.is_valid_landline(phone_number) || self.is_valid_mobile(phone_number),
        }
    }

    pub fn is_valid_landline(&self, phone_number: &str) -> bool {
        self.reg_exps.landline_pattern.is_match(phone_number)
    }

    pub fn is_valid_mobile(&self, phone_number: &str) -> bool {
        self.reg_exps.mobile_pattern.is_match(phone_number)
    }

    /// Formats a valid national number as `(DD)XXXX-XXXX` or `(DD)9XXXX-XXXX`.
    /// Returns `None` if the number is not valid.
    pub fn format_phone(&self, phone_number: &str) -> Option<String> {
        if !self.is_valid(phone_number, None) {
            return None;
        }
        // valid numbers are ASCII digits only, so byte slicing is safe
        let (ddd, subscriber) = phone_number.split_at(DDD_LENGTH);
        let (head, tail) = subscriber.split_at(subscriber.len() - FORMATTED_SUFFIX_LENGTH);
        Some(fast_cat::concat_str!("(", ddd, ")", head, "-", tail))
    }

    /// Generates a random, structurally valid national number of the given
    /// kind, or of a random kind when `phone_type` is `None`. The DDD is
    /// random too and may not be assigned.
    pub fn generate(&self, phone_type: Option<PhoneType>) -> String {
        self.generate_with_rng(phone_type, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng>(&self, phone_type: Option<PhoneType>, rng: &mut R) -> String {
        let phone_type = phone_type.unwrap_or_else(|| {
            if rng.gen_bool(0.5) {
                PhoneType::Landline
            } else {
                PhoneType::Mobile
            }
        });

        let mut phone_number = String::with_capacity(DDD_LENGTH + MOBILE_SUBSCRIBER_LENGTH);
        push_random_ddd(&mut phone_number, rng);
        match phone_type {
            PhoneType::Mobile => {
                phone_number.push(MOBILE_LEADING_DIGIT);
                push_random_digits(&mut phone_number, MOBILE_SUBSCRIBER_LENGTH - 1, rng);
            }
            PhoneType::Landline => {
                phone_number.push(char::from(b'0' + rng.gen_range(2..=5u8)));
                push_random_digits(&mut phone_number, LANDLINE_SUBSCRIBER_LENGTH - 1, rng);
            }
        }
        phone_number
    }

    fn classify<'a>(&self, phone_number: &'a str) -> PhoneInput<'a> {
        let normalized = remove_symbols(phone_number);
        match parse_ddd(&normalized) {
            Some(ddd) => {
                trace!("Treating {:?} as a bare DDD", phone_number);
                PhoneInput::BareDdd(ddd)
            }
            None => PhoneInput::FullNumber(normalized),
        }
    }

    /// Identifies the federative unit, and the region where one applies, of
    /// a DDD given either alone (`"11"`) or as part of a phone number in any
    /// common writing: with symbols, with or without the country code.
    ///
    /// ```
    /// use rbrutils::{PHONE_UTIL, DddError};
    ///
    /// let info = PHONE_UTIL.identify_ddd("(88) 99644-3006").unwrap();
    /// assert_eq!(info.state, "Ceará");
    /// assert_eq!(info.region, Some("Sul do Ceará"));
    ///
    /// assert_eq!(PHONE_UTIL.identify_ddd("82").unwrap().region, None);
    /// assert_eq!(PHONE_UTIL.identify_ddd("00"), Err(DddError::InvalidAreaCode(0)));
    /// ```
    pub fn identify_ddd(&self, phone_number: &str) -> Result<DddInfo> {
        let ddd = match self.classify(phone_number) {
            PhoneInput::BareDdd(ddd) => ddd,
            PhoneInput::FullNumber(normalized) => {
                let national_number = self.strip_international_dialing_code(normalized);
                if !self.is_valid(&national_number, None) {
                    debug!("{:?} is not a valid phone number", phone_number);
                    return Err(DddError::InvalidPhoneNumber);
                }
                extract_ddd(&national_number).ok_or(DddError::InvalidPhoneNumber)?
            }
        };
        self.resolve_ddd(ddd)
    }

    /// Same as [`PhoneUtil::identify_ddd`], flattened into a [`DddLookup`].
    pub fn lookup_ddd(&self, phone_number: &str) -> DddLookup {
        self.identify_ddd(phone_number).into()
    }

    /// Resolves an already extracted DDD against the tables.
    pub fn resolve_ddd(&self, ddd: u8) -> Result<DddInfo> {
        let Some(&uf) = self.ddd_to_uf.get(&ddd) else {
            warn!("DDD {} is not assigned", ddd);
            return Err(DddError::InvalidAreaCode(ddd));
        };

        if self.ufs_with_single_ddd.contains(&uf) {
            return Ok(DddInfo::new(uf, None));
        }

        match self.ddd_to_region.get(&ddd) {
            Some(&region) => Ok(DddInfo::new(uf, Some(region))),
            None => {
                // the build script rejects such tables
                error!("DDD {} of {} has no region, the DDD table is inconsistent", ddd, uf.code());
                Ok(DddInfo::new(uf, None))
            }
        }
    }

    pub fn get_uf_for_ddd(&self, ddd: u8) -> Option<Uf> {
        self.ddd_to_uf.get(&ddd).copied()
    }

    pub fn get_region_for_ddd(&self, ddd: u8) -> Option<&'static str> {
        self.ddd_to_region.get(&ddd).copied()
    }

    /// All DDDs of `uf`, ascending.
    pub fn get_ddds_for_uf(&self, uf: Uf) -> Vec<u8> {
        let mut ddds: Vec<u8> = self
            .ddd_to_uf
            .iter()
            .filter_map(|(&ddd, &owner)| (owner == uf).then_some(ddd))
            .collect();
        ddds.sort_unstable();
        ddds
    }

    /// All assigned DDDs, ascending.
    pub fn get_supported_ddds(&self) -> Vec<u8> {
        let mut ddds: Vec<u8> = self.ddd_to_uf.keys().copied().collect();
        ddds.sort_unstable();
        ddds
    }

    pub fn get_ufs_with_single_ddd(&self) -> &HashSet<Uf> {
        &self.ufs_with_single_ddd
    }
}
