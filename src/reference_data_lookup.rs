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

use std::{borrow::Cow, sync::Arc};

use log::trace;

use crate::{
    data::{AreaRecord, CountryRecord},
    format_template::CANONICAL_FORMAT,
    interfaces::{FormatSource, ReferenceDataset},
    phonenumberformat::DistanceRule,
    string_util::ShrinkingPrefixes,
};

/// Longest-prefix matching and direct key lookups over a
/// [`ReferenceDataset`]. Unknown or empty input is reported as `None`.
#[derive(Clone)]
pub struct ReferenceDataLookup {
    dataset: Arc<dyn ReferenceDataset>,
}

impl ReferenceDataLookup {
    pub fn new(dataset: Arc<dyn ReferenceDataset>) -> Self {
        Self { dataset }
    }

    /// Matches the longest prefix of `prefix_digits` that is a country code
    /// and returns that code.
    pub fn match_country_code(&self, prefix_digits: &str) -> Option<&str> {
        self.match_country(prefix_digits).map(CountryRecord::country_code)
    }

    pub fn match_country(&self, prefix_digits: &str) -> Option<&CountryRecord> {
        let found = self.dataset.country_by_code(ShrinkingPrefixes::new(prefix_digits));
        trace!(
            "Country code search for '{}' found {:?}",
            prefix_digits,
            found.map(CountryRecord::country_code)
        );
        found
    }

    /// Matches the longest prefix of `full_prefix` (`+<country><area>...`)
    /// that is a city or carrier id and returns that id.
    pub fn match_area_or_carrier_code(&self, full_prefix: &str) -> Option<&str> {
        self.match_area_or_carrier(full_prefix).map(AreaRecord::id)
    }

    pub fn match_area_or_carrier(&self, full_prefix: &str) -> Option<&AreaRecord> {
        let found = self
            .dataset
            .area_or_carrier_by_prefix(ShrinkingPrefixes::new(full_prefix));
        trace!(
            "Area code search for '{}' found {:?}",
            full_prefix,
            found.map(AreaRecord::id)
        );
        found
    }

    pub fn country_name(&self, country_id: u32) -> Option<&str> {
        self.dataset
            .country_by_id(country_id)
            .map(CountryRecord::name)
    }

    /// Returns the name of the city or carrier with the exact id `id`.
    pub fn area_or_carrier_name(&self, id: &str) -> Option<&str> {
        if id.is_empty() {
            return None;
        }
        self.dataset.area_or_carrier_by_id(id).map(AreaRecord::name)
    }

    /// Returns the id of the country the city or carrier `id` belongs to.
    pub fn country_id_for_area(&self, id: &str) -> Option<u32> {
        if id.is_empty() {
            return None;
        }
        self.dataset
            .area_or_carrier_by_id(id)
            .map(AreaRecord::country_id)
    }

    pub fn format(&self, country_id: u32, rule: DistanceRule) -> Option<&str> {
        if !rule.is_country_specific() {
            return Some(CANONICAL_FORMAT);
        }
        self.dataset
            .country_by_id(country_id)
            .and_then(|country| country.format(rule))
    }
}

impl FormatSource for ReferenceDataLookup {
    fn phone_format(&self, country_id: u32, rule: DistanceRule) -> Option<Cow<'_, str>> {
        self.format(country_id, rule).map(Cow::Borrowed)
    }

    fn country_name(&self, country_id: u32) -> Option<Cow<'_, str>> {
        ReferenceDataLookup::country_name(self, country_id).map(Cow::Borrowed)
    }
}
