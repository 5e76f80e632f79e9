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

use log::{debug, trace};
use regex::Regex;

use super::{
    errors::{DataError, ResolveError},
    format_sources::LocaleOverrides,
    helper_constants::{
        MAX_COUNTRYCODE_LENGTH, MAX_FULL_PREFIX_LENGTH, PHONE_NUMBER_PATTERN, PLUS_SIGN,
    },
    helper_functions::{area_code_from_full_prefix, local_number_of, normalize_separators},
    helper_types::{CountryCodeSource, ResolvedNumber},
    DistanceRule,
};
use crate::{
    data::{AreaRecord, BundledDataset},
    format_template::FormatTemplate,
    interfaces::{FormatSource, LocaleDefaults, ReferenceDataset},
    reference_data_lookup::ReferenceDataLookup,
    string_util::truncate_chars,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Splits phone numbers into country, area and subscriber parts and renders
/// them in one of the [`DistanceRule`] notations.
///
/// The engine holds no mutable state: every call is an independent run over
/// the input and the read-only collaborators, so one instance can be shared
/// between threads.
///
/// The string-returning operations never fail loudly. Anything that cannot
/// be resolved yields an empty string; [`PhoneNumberEngine::resolve`] and
/// [`PhoneNumberEngine::try_format_phone_number`] tell why.
pub struct PhoneNumberEngine {
    /// Prefix matching over the reference data.
    lookup: ReferenceDataLookup,

    /// The user's location. Numbers without an international marker are
    /// completed with its country id and area code.
    locale: Arc<dyn LocaleDefaults>,

    /// Sources of templates and country names, the preferred one first.
    format_sources: Vec<Arc<dyn FormatSource>>,

    /// Regular expression of strings that are accepted as phone numbers.
    phone_number_pattern: Regex,
}

impl PhoneNumberEngine {
    /// Creates an engine whose templates and country names come from the
    /// locale first and from the reference data second.
    pub fn new(dataset: Arc<dyn ReferenceDataset>, locale: Arc<dyn LocaleDefaults>) -> Self {
        let lookup = ReferenceDataLookup::new(dataset.clone());
        let format_sources: Vec<Arc<dyn FormatSource>> = vec![
            Arc::new(LocaleOverrides::new(locale.clone())),
            Arc::new(lookup),
        ];
        Self::with_format_sources(dataset, locale, format_sources)
    }

    /// Creates an engine over the reference data shipped with the crate.
    pub fn with_bundled_data(
        locale: Arc<dyn LocaleDefaults>,
    ) -> std::result::Result<Self, DataError> {
        let dataset = BundledDataset::embedded()?;
        Ok(Self::new(Arc::new(dataset), locale))
    }

    /// Creates an engine that asks `format_sources` for templates and country
    /// names in the given order. The first non-empty answer wins.
    pub fn with_format_sources(
        dataset: Arc<dyn ReferenceDataset>,
        locale: Arc<dyn LocaleDefaults>,
        format_sources: Vec<Arc<dyn FormatSource>>,
    ) -> Self {
        Self {
            lookup: ReferenceDataLookup::new(dataset),
            locale,
            format_sources,
            phone_number_pattern: Regex::new(PHONE_NUMBER_PATTERN)
                .expect("Invalid constant pattern!"),
        }
    }

    pub fn lookup(&self) -> &ReferenceDataLookup {
        &self.lookup
    }

    /// Returns whether `number` is non-empty and made of digits, an optional
    /// leading `+` and the separators `_`, `-`, space and parentheses.
    pub fn is_viable_phone_number(&self, number: &str) -> bool {
        !number.is_empty() && self.phone_number_pattern.is_match(number)
    }

    /// Formats `number` according to `rule`, or returns an empty string if
    /// the number cannot be resolved or no template is available.
    pub fn format_phone_number(&self, number: &str, rule: DistanceRule) -> String {
        or_empty(number, self.try_format_phone_number(number, rule))
    }

    pub fn try_format_phone_number(&self, number: &str, rule: DistanceRule) -> Result<String> {
        let number = self.normalize(number)?;
        let template = self.template_for(rule)?;
        let resolved = self.resolve_normalized(&number)?;
        Ok(template.render(&resolved))
    }

    /// Splits `number` into its country code, area code and subscriber number.
    pub fn resolve(&self, number: &str) -> Result<ResolvedNumber> {
        let number = self.normalize(number)?;
        self.resolve_normalized(&number)
    }

    /// Returns the id of the country `number` belongs to, as decimal string.
    pub fn get_country_id(&self, number: &str) -> String {
        let country_id = self.resolve_area(number).map(|area| {
            let mut buf = itoa::Buffer::new();
            buf.format(area.country_id()).to_owned()
        });
        or_empty(number, country_id)
    }

    /// Returns the name of a country, preferring the user's localized names.
    pub fn get_country_name(&self, country_id: u32) -> String {
        self.format_sources
            .iter()
            .find_map(|source| {
                source
                    .country_name(country_id)
                    .filter(|name| !name.is_empty())
            })
            .map(Cow::into_owned)
            .unwrap_or_default()
    }

    pub fn get_country_name_by_number(&self, number: &str) -> String {
        match self.resolve_area(number) {
            Ok(area) => self.get_country_name(area.country_id()),
            Err(err) => or_empty(number, Err(err)),
        }
    }

    /// Returns the name of the city or mobile carrier with the full prefix
    /// `full_area_code`, e.g. `+49351`.
    pub fn get_area_name(&self, full_area_code: &str) -> String {
        self.lookup
            .area_or_carrier_name(full_area_code)
            .map(str::to_owned)
            .unwrap_or_default()
    }

    pub fn get_area_name_by_number(&self, number: &str) -> String {
        let name = self.resolve_area(number).map(|area| area.name().to_owned());
        or_empty(number, name)
    }

    /// The user's country id, or an empty string if not configured.
    pub fn user_country_id(&self) -> &str {
        self.locale.country_id().unwrap_or_default()
    }

    /// The user's area code, or an empty string if not configured.
    pub fn user_area_code(&self) -> &str {
        self.locale.area_code().unwrap_or_default()
    }

    fn normalize<'b>(&self, number: &'b str) -> Result<Cow<'b, str>> {
        if !self.is_viable_phone_number(number) {
            return Err(ResolveError::MalformedInput);
        }
        let normalized = normalize_separators(number);
        if normalized.is_empty() {
            return Err(ResolveError::MalformedInput);
        }
        Ok(normalized)
    }

    fn resolve_normalized(&self, number: &str) -> Result<ResolvedNumber> {
        let source = CountryCodeSource::detect(number);
        let country_code = self.resolve_country_code(number, source)?;
        let area = self.resolve_full_area_code(number, source, country_code)?;

        let area_code = area_code_from_full_prefix(area.id(), country_code)
            .ok_or(ResolveError::UnknownAreaCode)?;
        let local_number = local_number_of(number, source, country_code, area_code)
            .ok_or(ResolveError::EmptyLocalNumber)?;

        trace!(
            "Resolved '{}' ({:?}) into {} / {} / {}",
            number, source, country_code, area_code, local_number
        );
        Ok(ResolvedNumber::new(
            country_code.to_owned(),
            area_code.to_owned(),
            local_number.to_owned(),
        ))
    }

    fn resolve_area(&self, number: &str) -> Result<&AreaRecord> {
        let number = self.normalize(number)?;
        let source = CountryCodeSource::detect(&number);
        let country_code = self.resolve_country_code(&number, source)?;
        self.resolve_full_area_code(&number, source, country_code)
    }

    /// Numbers with `00` or `+` carry their country code within the next
    /// `MAX_COUNTRYCODE_LENGTH` digits. Any other number is taken to be in the
    /// user's country, whose id then serves as country code.
    fn resolve_country_code(&self, number: &str, source: CountryCodeSource) -> Result<&str> {
        if !source.is_international() {
            return self
                .locale
                .country_id()
                .ok_or(ResolveError::UnknownCountryCode);
        }
        let digits = &number[source.marker().len()..];
        let window = truncate_chars(digits, MAX_COUNTRYCODE_LENGTH);
        self.lookup
            .match_country_code(window)
            .ok_or(ResolveError::UnknownCountryCode)
    }

    /// Rewrites `number` into a `+<country><area>...` candidate and matches
    /// its longest known prefix.
    fn resolve_full_area_code(
        &self,
        number: &str,
        source: CountryCodeSource,
        country_code: &str,
    ) -> Result<&AreaRecord> {
        let after_marker = &number[source.marker().len()..];
        let candidate: Cow<'_, str> = match source {
            CountryCodeSource::FromNumberWithPlusSign => Cow::Borrowed(number),
            CountryCodeSource::FromNumberWithIdd => {
                Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, after_marker))
            }
            CountryCodeSource::FromTrunkPrefix => {
                Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, country_code, after_marker))
            }
            CountryCodeSource::FromDefaultCountry => {
                let area_code = self.user_area_code();
                // A number that starts with the user's area code is taken to
                // include it, even if those digits belong to the subscriber.
                if number.starts_with(area_code) {
                    Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, country_code, number))
                } else {
                    Cow::Owned(fast_cat::concat_str!(
                        PLUS_SIGN,
                        country_code,
                        area_code,
                        number
                    ))
                }
            }
        };

        // Subscriber digits must not take part in the match.
        let window = truncate_chars(&candidate, MAX_FULL_PREFIX_LENGTH);
        self.lookup
            .match_area_or_carrier(window)
            .ok_or(ResolveError::UnknownAreaCode)
    }

    fn template_for(&self, rule: DistanceRule) -> Result<FormatTemplate<'_>> {
        if !rule.is_country_specific() {
            return Ok(FormatTemplate::canonical());
        }
        let country_id: u32 = self
            .user_country_id()
            .parse()
            .map_err(|_| ResolveError::MissingFormat(rule))?;

        self.format_sources
            .iter()
            .find_map(|source| {
                source
                    .phone_format(country_id, rule)
                    .filter(|pattern| !pattern.is_empty())
            })
            .map(|pattern| FormatTemplate::new(pattern))
            .ok_or(ResolveError::MissingFormat(rule))
    }
}

fn or_empty(number: &str, result: Result<String>) -> String {
    result.unwrap_or_else(|err| {
        debug!("Could not resolve '{}': {}", number, err);
        String::new()
    })
}
