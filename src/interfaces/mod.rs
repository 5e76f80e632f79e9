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

//! Capabilities the engine consumes. Implementations are expected to be
//! immutable once built, so they can be shared between threads freely.

use std::borrow::Cow;

use crate::{
    data::{AreaRecord, CountryRecord},
    phonenumberformat::DistanceRule,
    string_util::ShrinkingPrefixes,
};

/// Read-only access to the country, city and mobile carrier tables.
///
/// Prefix lookups get their candidate keys ordered from longest to shortest
/// and return the record of the first candidate present.
pub trait ReferenceDataset: Send + Sync {
    /// Returns the country whose code equals the first matching candidate.
    fn country_by_code(&self, candidates: ShrinkingPrefixes<'_>) -> Option<&CountryRecord>;

    /// Returns the area whose id equals the first matching candidate. For a
    /// single candidate cities are checked before mobile carriers.
    fn area_or_carrier_by_prefix(&self, candidates: ShrinkingPrefixes<'_>) -> Option<&AreaRecord>;

    fn country_by_id(&self, country_id: u32) -> Option<&CountryRecord>;

    /// Looks `id` up among cities first and mobile carriers second.
    fn area_or_carrier_by_id(&self, id: &str) -> Option<&AreaRecord>;
}

/// The user's location and dialing preferences.
pub trait LocaleDefaults: Send + Sync {
    /// The telephony id of the user's country, if configured.
    fn country_id(&self) -> Option<&str>;

    /// The user's own area code, without trunk prefix.
    fn area_code(&self) -> Option<&str>;

    /// A template the user prefers over the reference data.
    fn format_override(&self, country_id: u32, rule: DistanceRule) -> Option<&str>;

    /// A localized country name preferred over the reference data.
    fn country_name(&self, _country_id: u32) -> Option<&str> {
        None
    }
}

/// A source of templates and country names. The engine asks its sources in
/// order and takes the first answer.
pub trait FormatSource: Send + Sync {
    fn phone_format(&self, country_id: u32, rule: DistanceRule) -> Option<Cow<'_, str>>;

    fn country_name(&self, country_id: u32) -> Option<Cow<'_, str>>;
}
