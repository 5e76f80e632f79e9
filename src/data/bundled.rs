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

use std::{collections::HashMap, io::Read};

use log::{trace, warn};
use serde::Deserialize;

use super::records::{AreaRecord, CountryRecord};
use crate::{
    interfaces::ReferenceDataset,
    phonenumberformat::{AreaKind, DataError},
    string_util::ShrinkingPrefixes,
};

/// Reference data compiled into the library.
static BUNDLED_DATA: &str = include_str!("../../resources/telephony.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    countries: Vec<CountryRecord>,
    #[serde(default)]
    cities: Vec<RawArea>,
    #[serde(default)]
    mobiles: Vec<RawArea>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArea {
    id: String,
    country_id: u32,
    name: String,
}

impl RawArea {
    fn into_record(self, kind: AreaKind) -> AreaRecord {
        AreaRecord::new(kind, self.id, self.country_id, self.name)
    }
}

/// An in-memory [`ReferenceDataset`] keyed for exact lookups.
///
/// Built once, either from the data shipped with the crate or from JSON of
/// the same shape:
///
/// ```json
/// {
///   "countries": [{ "id": 49, "countryCode": "49", "name": "Germany",
///                   "sameAreaRule": "G", "longDistanceRule": "0FG",
///                   "internationalRule": "00EFG" }],
///   "cities":  [{ "id": "+49351", "countryId": 49, "name": "Dresden" }],
///   "mobiles": [{ "id": "+491511", "countryId": 49, "name": "T-Mobile (D1)" }]
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct BundledDataset {
    countries: HashMap<u32, CountryRecord>,
    /// Several countries may share a code; the first one listed owns it.
    country_code_to_country_id: HashMap<String, u32>,
    cities: HashMap<String, AreaRecord>,
    mobiles: HashMap<String, AreaRecord>,
}

impl BundledDataset {
    /// Loads the reference data shipped with the crate.
    pub fn embedded() -> Result<Self, DataError> {
        Self::from_json(BUNDLED_DATA)
    }

    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, DataError> {
        let raw: RawDataset = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDataset) -> Result<Self, DataError> {
        let areas = raw
            .cities
            .into_iter()
            .map(|area| area.into_record(AreaKind::City))
            .chain(raw.mobiles.into_iter().map(|area| area.into_record(AreaKind::Mobile)));
        Self::from_records(raw.countries, areas)
    }

    /// Builds a dataset from records, rejecting duplicate keys and malformed
    /// codes.
    pub fn from_records(
        countries: impl IntoIterator<Item = CountryRecord>,
        areas: impl IntoIterator<Item = AreaRecord>,
    ) -> Result<Self, DataError> {
        let mut dataset = Self::default();

        for country in countries {
            dataset.insert_country(country)?;
        }
        for area in areas {
            dataset.insert_area(area)?;
        }

        trace!(
            "Loaded reference data: {} countries, {} cities, {} mobile carriers",
            dataset.countries.len(),
            dataset.cities.len(),
            dataset.mobiles.len()
        );
        Ok(dataset)
    }

    fn insert_country(&mut self, country: CountryRecord) -> Result<(), DataError> {
        let country_id = country.country_id();
        if !is_digits(country.country_code()) {
            return Err(DataError::InvalidCountryCode {
                country_id,
                code: country.country_code().to_owned(),
            });
        }
        if self.countries.contains_key(&country_id) {
            return Err(DataError::DuplicateCountryId(country_id));
        }

        self.country_code_to_country_id
            .entry(country.country_code().to_owned())
            .or_insert(country_id);
        self.countries.insert(country_id, country);
        Ok(())
    }

    fn insert_area(&mut self, area: AreaRecord) -> Result<(), DataError> {
        let kind = area.kind();
        let is_valid_id = area
            .id()
            .strip_prefix('+')
            .is_some_and(is_digits);
        if !is_valid_id {
            return Err(DataError::InvalidAreaId { kind, id: area.id().to_owned() });
        }
        if !self.countries.contains_key(&area.country_id()) {
            warn!("The {} '{}' refers to unknown country {}", kind, area.id(), area.country_id());
        }

        let table = match kind {
            AreaKind::City => &mut self.cities,
            AreaKind::Mobile => &mut self.mobiles,
        };
        if table.contains_key(area.id()) {
            return Err(DataError::DuplicateAreaId { kind, id: area.id().to_owned() });
        }
        table.insert(area.id().to_owned(), area);
        Ok(())
    }

    pub fn countries(&self) -> impl Iterator<Item = &CountryRecord> {
        self.countries.values()
    }

    pub fn areas(&self) -> impl Iterator<Item = &AreaRecord> {
        self.cities.values().chain(self.mobiles.values())
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl ReferenceDataset for BundledDataset {
    fn country_by_code(&self, mut candidates: ShrinkingPrefixes<'_>) -> Option<&CountryRecord> {
        candidates.find_map(|guess| {
            self.country_code_to_country_id
                .get(guess)
                .and_then(|country_id| self.countries.get(country_id))
        })
    }

    fn area_or_carrier_by_prefix(&self, mut candidates: ShrinkingPrefixes<'_>) -> Option<&AreaRecord> {
        candidates.find_map(|guess| self.area_or_carrier_by_id(guess))
    }

    fn country_by_id(&self, country_id: u32) -> Option<&CountryRecord> {
        self.countries.get(&country_id)
    }

    fn area_or_carrier_by_id(&self, id: &str) -> Option<&AreaRecord> {
        self.cities.get(id).or_else(|| self.mobiles.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::BundledDataset;
    use crate::{
        data::{AreaRecord, CountryFormats, CountryRecord},
        interfaces::ReferenceDataset,
        phonenumberformat::{AreaKind, DataError, DistanceRule},
        string_util::ShrinkingPrefixes,
    };

    fn country(id: u32, code: &str) -> CountryRecord {
        CountryRecord::new(id, code, format!("Country {}", id), CountryFormats::new("G", "0FG", "00EFG"))
    }

    #[test]
    fn embedded_data_loads() {
        let dataset = BundledDataset::embedded().expect("embedded data should be valid");

        let germany = dataset.country_by_id(49).expect("Germany should be present");
        assert_eq!(germany.name(), "Germany");
        assert_eq!(germany.format(DistanceRule::SameAreaRule), Some("G"));
        assert_eq!(germany.format(DistanceRule::LongDistanceRule), Some("0FG"));
        assert_eq!(germany.format(DistanceRule::InternationalRule), Some("00EFG"));

        assert_eq!(dataset.area_or_carrier_by_id("+49351").map(|a| a.name()), Some("Dresden"));
        assert_eq!(
            dataset.area_or_carrier_by_id("+491511").map(|a| a.name()),
            Some("T-Mobile (D1)")
        );
        for area in dataset.areas() {
            assert!(dataset.country_by_id(area.country_id()).is_some(), "{:?}", area);
        }
    }

    #[test]
    fn shared_country_code_belongs_to_first_country() {
        let dataset = BundledDataset::from_records([country(1, "1"), country(2, "1")], std::iter::empty())
            .expect("dataset should build");
        let found = dataset.country_by_code(ShrinkingPrefixes::new("1212"));
        assert_eq!(found.map(|c| c.country_id()), Some(1));
    }

    #[test]
    fn city_wins_over_carrier_on_equal_prefix() {
        let dataset = BundledDataset::from_records(
            [country(49, "49")],
            [
                AreaRecord::new(AreaKind::Mobile, "+49351", 49, "Carrier"),
                AreaRecord::new(AreaKind::City, "+49351", 49, "Dresden"),
            ],
        )
        .expect("dataset should build");
        let found = dataset.area_or_carrier_by_prefix(ShrinkingPrefixes::new("+493511234"));
        assert_eq!(found.map(|a| a.kind()), Some(AreaKind::City));
    }

    #[test]
    fn rejects_malformed_records() {
        assert!(matches!(
            BundledDataset::from_records([country(49, "49"), country(49, "4")], std::iter::empty()),
            Err(DataError::DuplicateCountryId(49))
        ));
        assert!(matches!(
            BundledDataset::from_records([country(49, "4x")], std::iter::empty()),
            Err(DataError::InvalidCountryCode { country_id: 49, .. })
        ));
        assert!(matches!(
            BundledDataset::from_records([country(49, "49")], [AreaRecord::new(AreaKind::City, "49351", 49, "Dresden")]),
            Err(DataError::InvalidAreaId { kind: AreaKind::City, .. })
        ));
        assert!(matches!(
            BundledDataset::from_records(
                [country(49, "49")],
                [
                    AreaRecord::new(AreaKind::City, "+49351", 49, "Dresden"),
                    AreaRecord::new(AreaKind::City, "+49351", 49, "Dresden"),
                ]
            ),
            Err(DataError::DuplicateAreaId { kind: AreaKind::City, .. })
        ));
        assert!(matches!(BundledDataset::from_json("{"), Err(DataError::Json(_))));
    }
}
