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

use super::helper_constants::{INTERNATIONAL_DIAL_PREFIX, PLUS_SIGN, TRUNK_PREFIX};

/// Describes where the country code of an input number comes from, based on
/// the marker the number starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    /// The number starts with the international dialing prefix `00`.
    FromNumberWithIdd,
    /// The number starts with `+`.
    FromNumberWithPlusSign,
    /// The number starts with the trunk prefix `0`; the country is the user's.
    FromTrunkPrefix,
    /// The number has no marker at all; country and possibly area are the user's.
    FromDefaultCountry,
}

impl CountryCodeSource {
    /// Detects the source of a normalized number. `00` is checked before `0`.
    pub fn detect(number: &str) -> Self {
        if number.starts_with(INTERNATIONAL_DIAL_PREFIX) {
            Self::FromNumberWithIdd
        } else if number.starts_with(PLUS_SIGN) {
            Self::FromNumberWithPlusSign
        } else if number.starts_with(TRUNK_PREFIX) {
            Self::FromTrunkPrefix
        } else {
            Self::FromDefaultCountry
        }
    }

    /// Returns the marker that was detected; empty for the default country.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::FromNumberWithIdd => INTERNATIONAL_DIAL_PREFIX,
            Self::FromNumberWithPlusSign => PLUS_SIGN,
            Self::FromTrunkPrefix => TRUNK_PREFIX,
            Self::FromDefaultCountry => "",
        }
    }

    /// Returns whether the number carries its own country code.
    pub fn is_international(&self) -> bool {
        matches!(self, Self::FromNumberWithIdd | Self::FromNumberWithPlusSign)
    }
}

/// A phone number split into its three parts. All parts are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedNumber {
    country_code: String,
    area_code: String,
    local_number: String,
}

impl ResolvedNumber {
    pub(crate) fn new(country_code: String, area_code: String, local_number: String) -> Self {
        Self { country_code, area_code, local_number }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    pub fn local_number(&self) -> &str {
        &self.local_number
    }

    /// Returns the `+<country><area>` key this number was matched by.
    pub fn full_area_code(&self) -> String {
        fast_cat::concat_str!(PLUS_SIGN, &self.country_code, &self.area_code)
    }
}
