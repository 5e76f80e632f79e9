
use std::sync::{Arc, Once};

use crate::{
    data::{AreaRecord, BundledDataset, CountryFormats, CountryRecord},
    i18n::LocaleConfig,
    phonenumberformat::{AreaKind, PhoneNumberEngine},
};

static ONCE: Once = Once::new();

pub(crate) fn init_logger() {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}

/// A small dataset shaped to exercise prefix matching: `+4935` is a shorter
/// key than Dresden's `+49351`, and `+4915` is a carrier key shadowed by
/// the longer `+491511`.
pub(crate) fn get_test_dataset() -> BundledDataset {
    BundledDataset::from_records(
        [
            CountryRecord::new(49, "49", "Germany", CountryFormats::new("G", "0FG", "00EFG")),
            CountryRecord::new(43, "43", "Austria", CountryFormats::new("G", "0FG", "00EFG")),
            CountryRecord::new(1, "1", "United States of America", CountryFormats::new("G", "1FG", "011EFG")),
            CountryRecord::new(2, "1", "Canada", CountryFormats::new("G", "1FG", "011EFG")),
            CountryRecord::new(420, "420", "Czech Republic", CountryFormats::new("FG", "", "00EFG")),
        ],
        [
            AreaRecord::new(AreaKind::City, "+4935", 49, "Dresden region"),
            AreaRecord::new(AreaKind::City, "+49351", 49, "Dresden"),
            AreaRecord::new(AreaKind::City, "+4930", 49, "Berlin"),
            AreaRecord::new(AreaKind::City, "+431", 43, "Wien"),
            AreaRecord::new(AreaKind::City, "+1212", 1, "New York"),
            AreaRecord::new(AreaKind::City, "+1416", 2, "Toronto"),
            AreaRecord::new(AreaKind::City, "+4202", 420, "Praha"),
            AreaRecord::new(AreaKind::Mobile, "+4915", 49, "Mobile"),
            AreaRecord::new(AreaKind::Mobile, "+491511", 49, "T-Mobile (D1)"),
        ],
    )
    .expect("test data should be valid")
}

pub(crate) fn get_locale() -> LocaleConfig {
    LocaleConfig::builder()
        .country_id("49")
        .area_code("351")
        .build()
        .expect("locale should be valid")
}

// This setup function simulates getting the engine of a user located in
// Dresden, Germany.
pub(crate) fn get_engine() -> PhoneNumberEngine {
    init_logger();
    PhoneNumberEngine::new(Arc::new(get_test_dataset()), Arc::new(get_locale()))
}

pub(crate) fn get_engine_with_locale(locale: LocaleConfig) -> PhoneNumberEngine {
    init_logger();
    PhoneNumberEngine::new(Arc::new(get_test_dataset()), Arc::new(locale))
}
