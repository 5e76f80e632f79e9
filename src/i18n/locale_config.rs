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

use std::{collections::HashMap, io::Read, str::FromStr};

use log::{trace, warn};
use serde::Deserialize;

use crate::{
    data::CountryFormats,
    interfaces::LocaleDefaults,
    phonenumberformat::{ConfigError, DistanceRule},
};

/// Prefix of every environment variable read by [`LocaleConfig::from_env`].
pub const ENV_PREFIX: &str = "PHONEFORMAT_";
const ENV_COUNTRY_ID: &str = "COUNTRY_ID";
const ENV_AREA_CODE: &str = "AREA_CODE";
const ENV_FORMAT: &str = "FORMAT_";

/// The user's dialing location: where bare and trunk-prefixed numbers are
/// assumed to be, plus templates and country names that take precedence over
/// the reference data.
///
/// A config can be built in code, read from JSON or taken from the
/// environment:
///
/// ```json
/// {
///   "countryId": "49",
///   "areaCode": "351",
///   "formatOverrides": { "49": { "longDistanceRule": "(0F) G" } },
///   "countryNames": { "49": "Deutschland" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleConfig {
    country_id: Option<String>,
    area_code: Option<String>,
    format_overrides: HashMap<u32, CountryFormats>,
    country_names: HashMap<u32, String>,
}

impl LocaleConfig {
    pub fn builder() -> LocaleConfigBuilder {
        LocaleConfigBuilder::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validated()
    }

    /// Reads the config from `PHONEFORMAT_*` environment variables:
    ///
    /// - `PHONEFORMAT_COUNTRY_ID`: the user's country id, e.g. `49`
    /// - `PHONEFORMAT_AREA_CODE`: the user's area code, e.g. `351`
    /// - `PHONEFORMAT_FORMAT_<RULE>_<COUNTRY_ID>`: a template override, where
    ///   `<RULE>` is `SAME_AREA`, `LONG_DISTANCE` or `INTERNATIONAL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Same as [`LocaleConfig::from_env`] over an explicit set of variables.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Result<Self, ConfigError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut builder = Self::builder();
        for (key, value) in vars {
            let key = key.as_ref();
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value = value.into();
            trace!("Reading locale variable {}={}", key, value);

            if name == ENV_COUNTRY_ID {
                builder = builder.country_id(value);
            } else if name == ENV_AREA_CODE {
                builder = builder.area_code(value);
            } else if let Some(rule_and_country) = name.strip_prefix(ENV_FORMAT) {
                let (rule, country_id) = parse_override_key(rule_and_country, key)?;
                builder = builder.format_override(country_id, rule, value);
            } else {
                warn!("Ignoring unknown locale variable {}", key);
            }
        }
        builder.build()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if let Some(country_id) = self.country_id.as_deref().filter(|id| !id.is_empty()) {
            parse_country_id(country_id)?;
        }
        if let Some(area_code) = &self.area_code {
            if !area_code.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ConfigError::InvalidAreaCode(area_code.to_owned()));
            }
        }
        Ok(self)
    }
}

fn parse_country_id(value: &str) -> Result<u32, ConfigError> {
    value.parse().map_err(|source| ConfigError::InvalidCountryId {
        value: value.to_owned(),
        source,
    })
}

/// Splits `SAME_AREA_49` into the rule and the country id.
fn parse_override_key(rule_and_country: &str, key: &str) -> Result<(DistanceRule, u32), ConfigError> {
    let unknown_rule = || ConfigError::UnknownRule(rule_and_country.to_owned(), key.to_owned());

    let (rule_name, country_id) = rule_and_country.rsplit_once('_').ok_or_else(unknown_rule)?;
    let rule = match rule_name {
        "SAME_AREA" => DistanceRule::SameAreaRule,
        "LONG_DISTANCE" => DistanceRule::LongDistanceRule,
        "INTERNATIONAL" => DistanceRule::InternationalRule,
        other => DistanceRule::from_str(other).map_err(|_| unknown_rule())?,
    };
    if !rule.is_country_specific() {
        return Err(unknown_rule());
    }
    Ok((rule, parse_country_id(country_id)?))
}

impl LocaleDefaults for LocaleConfig {
    fn country_id(&self) -> Option<&str> {
        self.country_id.as_deref().filter(|id| !id.is_empty())
    }

    fn area_code(&self) -> Option<&str> {
        self.area_code.as_deref().filter(|code| !code.is_empty())
    }

    fn format_override(&self, country_id: u32, rule: DistanceRule) -> Option<&str> {
        if !rule.is_country_specific() {
            return None;
        }
        self.format_overrides
            .get(&country_id)
            .and_then(|formats| formats.get(rule))
    }

    fn country_name(&self, country_id: u32) -> Option<&str> {
        self.country_names
            .get(&country_id)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

/// Builder for [`LocaleConfig`].
#[derive(Debug, Clone, Default)]
pub struct LocaleConfigBuilder {
    config: LocaleConfig,
}

impl LocaleConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the telephony id of the user's country, e.g. `"49"`.
    pub fn country_id(mut self, country_id: impl Into<String>) -> Self {
        self.config.country_id = Some(country_id.into());
        self
    }

    /// Sets the user's area code without trunk prefix, e.g. `"351"`.
    pub fn area_code(mut self, area_code: impl Into<String>) -> Self {
        self.config.area_code = Some(area_code.into());
        self
    }

    /// Overrides the template of `rule` for a country. The canonical template
    /// cannot be overridden; such calls are ignored.
    pub fn format_override(
        mut self,
        country_id: u32,
        rule: DistanceRule,
        pattern: impl Into<String>,
    ) -> Self {
        let formats = self.config.format_overrides.entry(country_id).or_default();
        if !formats.set(rule, pattern) {
            warn!("The {} template cannot be overridden", rule);
        }
        self
    }

    pub fn country_name(mut self, country_id: u32, name: impl Into<String>) -> Self {
        self.config.country_names.insert(country_id, name.into());
        self
    }

    pub fn build(self) -> Result<LocaleConfig, ConfigError> {
        self.config.validated()
    }
}

#[cfg(test)]
mod tests {
    use super::LocaleConfig;
    use crate::{
        interfaces::LocaleDefaults,
        phonenumberformat::{ConfigError, DistanceRule},
    };

    #[test]
    fn builder_sets_defaults() {
        let config = LocaleConfig::builder()
            .country_id("49")
            .area_code("351")
            .format_override(49, DistanceRule::LongDistanceRule, "(0F) G")
            .format_override(49, DistanceRule::Canonical, "E")
            .country_name(49, "Deutschland")
            .build()
            .expect("config should be valid");

        assert_eq!(config.country_id(), Some("49"));
        assert_eq!(config.area_code(), Some("351"));
        assert_eq!(config.format_override(49, DistanceRule::LongDistanceRule), Some("(0F) G"));
        assert_eq!(config.format_override(49, DistanceRule::SameAreaRule), None);
        assert_eq!(config.format_override(49, DistanceRule::Canonical), None);
        assert_eq!(LocaleDefaults::country_name(&config, 49), Some("Deutschland"));
        assert_eq!(LocaleDefaults::country_name(&config, 43), None);
    }

    #[test]
    fn unset_values_are_none() {
        let config = LocaleConfig::builder().country_id("").build().expect("empty is valid");
        assert_eq!(config.country_id(), None);
        assert_eq!(config.area_code(), None);
    }

    #[test]
    fn reads_json() {
        let config = LocaleConfig::from_json(
            r#"{"countryId": "43", "areaCode": "1",
                "formatOverrides": {"43": {"sameAreaRule": "F G"}},
                "countryNames": {"43": "Österreich"}}"#,
        )
        .expect("config should parse");
        assert_eq!(config.country_id(), Some("43"));
        assert_eq!(config.format_override(43, DistanceRule::SameAreaRule), Some("F G"));
        assert_eq!(LocaleDefaults::country_name(&config, 43), Some("Österreich"));

        assert!(matches!(
            LocaleConfig::from_json(r#"{"countryId": "DE"}"#),
            Err(ConfigError::InvalidCountryId { .. })
        ));
        assert!(matches!(
            LocaleConfig::from_json(r#"{"areaCode": "0351-"}"#),
            Err(ConfigError::InvalidAreaCode(_))
        ));
    }

    #[test]
    fn reads_variables() {
        let config = LocaleConfig::from_vars([
            ("PHONEFORMAT_COUNTRY_ID", "49"),
            ("PHONEFORMAT_AREA_CODE", "351"),
            ("PHONEFORMAT_FORMAT_LONG_DISTANCE_49", "0F/G"),
            ("PHONEFORMAT_FORMAT_internationalRule_49", "+EFG"),
            ("PATH", "/usr/bin"),
        ])
        .expect("variables should parse");
        assert_eq!(config.country_id(), Some("49"));
        assert_eq!(config.area_code(), Some("351"));
        assert_eq!(config.format_override(49, DistanceRule::LongDistanceRule), Some("0F/G"));
        assert_eq!(config.format_override(49, DistanceRule::InternationalRule), Some("+EFG"));

        assert!(matches!(
            LocaleConfig::from_vars([("PHONEFORMAT_FORMAT_NEARBY_49", "G")]),
            Err(ConfigError::UnknownRule(..))
        ));
        assert!(matches!(
            LocaleConfig::from_vars([("PHONEFORMAT_FORMAT_SAME_AREA_xx", "G")]),
            Err(ConfigError::InvalidCountryId { .. })
        ));
        assert!(matches!(
            LocaleConfig::from_vars([("PHONEFORMAT_FORMAT_canonical_49", "G")]),
            Err(ConfigError::UnknownRule(..))
        ));
    }
}
