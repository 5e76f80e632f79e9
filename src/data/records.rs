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

use serde::Deserialize;

use crate::{
    format_template::CANONICAL_FORMAT,
    phonenumberformat::{AreaKind, DistanceRule},
};

/// The country-specific templates, one per non-canonical [`DistanceRule`].
///
/// An empty template means "not defined" and is reported as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountryFormats {
    same_area_rule: String,
    long_distance_rule: String,
    international_rule: String,
}

impl CountryFormats {
    pub fn new(
        same_area_rule: impl Into<String>,
        long_distance_rule: impl Into<String>,
        international_rule: impl Into<String>,
    ) -> Self {
        Self {
            same_area_rule: same_area_rule.into(),
            long_distance_rule: long_distance_rule.into(),
            international_rule: international_rule.into(),
        }
    }

    /// Returns the template for `rule`. The canonical template is the same
    /// for every country and is never stored.
    pub fn get(&self, rule: DistanceRule) -> Option<&str> {
        let pattern = match rule {
            DistanceRule::SameAreaRule => &self.same_area_rule,
            DistanceRule::LongDistanceRule => &self.long_distance_rule,
            DistanceRule::InternationalRule => &self.international_rule,
            DistanceRule::Canonical => return Some(CANONICAL_FORMAT),
        };
        (!pattern.is_empty()).then_some(pattern.as_str())
    }

    /// Sets the template for `rule`. Returns `false` for the canonical rule,
    /// which cannot be changed.
    pub fn set(&mut self, rule: DistanceRule, pattern: impl Into<String>) -> bool {
        let slot = match rule {
            DistanceRule::SameAreaRule => &mut self.same_area_rule,
            DistanceRule::LongDistanceRule => &mut self.long_distance_rule,
            DistanceRule::InternationalRule => &mut self.international_rule,
            DistanceRule::Canonical => return false,
        };
        *slot = pattern.into();
        true
    }

    pub fn is_empty(&self) -> bool {
        self.same_area_rule.is_empty()
            && self.long_distance_rule.is_empty()
            && self.international_rule.is_empty()
    }
}

/// A country of the reference data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    #[serde(rename = "id")]
    country_id: u32,
    country_code: String,
    name: String,
    #[serde(flatten)]
    formats: CountryFormats,
}

impl CountryRecord {
    pub fn new(
        country_id: u32,
        country_code: impl Into<String>,
        name: impl Into<String>,
        formats: CountryFormats,
    ) -> Self {
        Self {
            country_id,
            country_code: country_code.into(),
            name: name.into(),
            formats,
        }
    }

    /// The telephony id of the country. Usually but not always equal to its
    /// country code, e.g. Canada shares code `1` with the United States.
    pub fn country_id(&self) -> u32 {
        self.country_id
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn formats(&self) -> &CountryFormats {
        &self.formats
    }

    pub fn format(&self, rule: DistanceRule) -> Option<&str> {
        self.formats.get(rule)
    }
}

/// A city area code or a mobile carrier prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AreaRecord {
    kind: AreaKind,
    id: String,
    country_id: u32,
    name: String,
}

impl AreaRecord {
    pub fn new(kind: AreaKind, id: impl Into<String>, country_id: u32, name: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            country_id,
            name: name.into(),
        }
    }

    pub fn kind(&self) -> AreaKind {
        self.kind
    }

    /// The full prefix of the area: `+`, country code and area digits.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_id(&self) -> u32 {
        self.country_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::{CountryFormats, CountryRecord};
    use crate::{format_template::CANONICAL_FORMAT, phonenumberformat::DistanceRule};

    #[test]
    fn formats_report_missing_as_none() {
        let mut formats = CountryFormats::new("G", "", "00EFG");
        assert_eq!(formats.get(DistanceRule::SameAreaRule), Some("G"));
        assert_eq!(formats.get(DistanceRule::LongDistanceRule), None);
        assert_eq!(formats.get(DistanceRule::Canonical), Some(CANONICAL_FORMAT));

        assert!(formats.set(DistanceRule::LongDistanceRule, "0FG"));
        assert!(!formats.set(DistanceRule::Canonical, "E"));
        for rule in DistanceRule::iter() {
            assert!(formats.get(rule).is_some());
        }
    }

    #[test]
    fn country_record_reads_flat_json() {
        let country: CountryRecord = serde_json::from_str(
            r#"{"id": 49, "countryCode": "49", "name": "Germany",
                "sameAreaRule": "G", "longDistanceRule": "0FG", "internationalRule": "00EFG"}"#,
        )
        .expect("record should parse");
        assert_eq!(country.country_id(), 49);
        assert_eq!(country.country_code(), "49");
        assert_eq!(country.format(DistanceRule::InternationalRule), Some("00EFG"));
    }
}
