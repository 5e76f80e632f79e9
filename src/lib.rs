//! Resolution and formatting of telephone numbers.
//!
//! A number such as `+493511234567`, `00493511234567`, `03511234567` or just
//! `1234567` is split into country code, area (or mobile carrier) code and
//! subscriber number by matching ever-shorter prefixes against reference
//! data. The parts are then rendered with a per-country template for one of
//! the [`DistanceRule`]s.
//!
//! ```no_run
//! use std::sync::Arc;
//! use rphoneformat::{DistanceRule, LocaleConfig, PhoneNumberEngine};
//!
//! let locale = LocaleConfig::builder().country_id("49").area_code("351").build()?;
//! let engine = PhoneNumberEngine::with_bundled_data(Arc::new(locale))?;
//!
//! assert_eq!(engine.format_phone_number("1234567", DistanceRule::Canonical), "+49 (351) 1234567");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod interfaces;
mod phonenumberformat;
mod reference_data_lookup;
mod format_template;
pub mod data;
pub mod i18n;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use data::{AreaRecord, BundledDataset, CountryFormats, CountryRecord};
pub use format_template::{
    AREA_CODE_TOKEN, CANONICAL_FORMAT, COUNTRY_CODE_TOKEN, FormatTemplate, LOCAL_NUMBER_TOKEN,
};
pub use i18n::LocaleConfig;
pub use interfaces::{FormatSource, LocaleDefaults, ReferenceDataset};
pub use phonenumberformat::{
    AreaKind, ConfigError, CountryCodeSource, DataError, DistanceRule, LocaleOverrides,
    MAX_AREACODE_LENGTH, MAX_COUNTRYCODE_LENGTH, PHONE_NUMBER_PATTERN, PhoneNumberEngine,
    ResolveError, ResolvedNumber,
};
pub use reference_data_lookup::ReferenceDataLookup;
pub use string_util::ShrinkingPrefixes;
