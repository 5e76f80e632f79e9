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

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Defines the notations a phone number can be rendered in.
///
/// Every rule except [`DistanceRule::Canonical`] is backed by a per-country
/// template, so the same number renders differently depending on the user's
/// country. For a number in Dresden, Germany, seen from a German locale:
/// - **Canonical**: `+49 (351) 1234567`
/// - **InternationalRule**: `00493511234567`
/// - **LongDistanceRule**: `03511234567`
/// - **SameAreaRule**: `1234567`
///
/// The string form of each variant is the key used for it in reference data
/// and locale configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, Display,
)]
pub enum DistanceRule {
    /// Dialing from within the same area: usually the subscriber number only.
    #[strum(serialize = "sameAreaRule")]
    SameAreaRule,
    /// Dialing from another area of the same country, with the trunk prefix.
    #[strum(serialize = "longDistanceRule")]
    LongDistanceRule,
    /// Dialing from abroad, with the international dialing prefix.
    #[strum(serialize = "internationalRule")]
    InternationalRule,
    /// The universal `+E (F) G` notation. Never stored per country.
    #[strum(serialize = "canonical")]
    Canonical,
}

impl DistanceRule {
    /// Returns whether the template for this rule comes from per-country data.
    pub fn is_country_specific(&self) -> bool {
        !matches!(self, DistanceRule::Canonical)
    }
}

/// Distinguishes the two tables that area prefixes live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum AreaKind {
    /// A geographic area code.
    #[strum(serialize = "city")]
    City,
    /// A mobile carrier prefix.
    #[strum(serialize = "mobile")]
    Mobile,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::DistanceRule;

    #[test]
    fn rule_names_round_trip() {
        for rule in DistanceRule::iter() {
            assert_eq!(DistanceRule::from_str(rule.as_ref()), Ok(rule));
        }
        assert_eq!(DistanceRule::SameAreaRule.to_string(), "sameAreaRule");
        assert!(DistanceRule::from_str("SameArea").is_err());
    }

    #[test]
    fn only_canonical_is_universal() {
        let specific = DistanceRule::iter()
            .filter(|rule| rule.is_country_specific())
            .count();
        assert_eq!(specific, 3);
    }
}
