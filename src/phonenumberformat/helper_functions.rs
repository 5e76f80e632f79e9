use std::borrow::Cow;

use super::{helper_constants::PLUS_SIGN, helper_types::CountryCodeSource};

/// Drops the separators a phone number may be written with, keeping only
/// ASCII digits and `+`. Borrows when there is nothing to drop.
pub(super) fn normalize_separators(number: &str) -> Cow<'_, str> {
    if number.bytes().all(|b| b.is_ascii_digit() || b == b'+') {
        return Cow::Borrowed(number);
    }
    Cow::Owned(
        number
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect(),
    )
}

/// Turns a matched full-prefix id such as `+49351` into the bare area code by
/// removing the `+` and the country code. Returns `None` if the id does not
/// belong to the country or has nothing left.
pub(super) fn area_code_from_full_prefix<'a>(full_prefix: &'a str, country_code: &str) -> Option<&'a str> {
    let area_code = full_prefix
        .strip_prefix(PLUS_SIGN)
        .unwrap_or(full_prefix)
        .strip_prefix(country_code)?;
    (!area_code.is_empty()).then_some(area_code)
}

/// Returns the number of leading characters taken up by the marker, the
/// country code and the area code of a number written with `source`.
pub(super) fn prefix_length(source: CountryCodeSource, country_code: &str, area_code: &str) -> usize {
    match source {
        CountryCodeSource::FromNumberWithIdd | CountryCodeSource::FromNumberWithPlusSign => {
            source.marker().len() + country_code.len() + area_code.len()
        }
        CountryCodeSource::FromTrunkPrefix => source.marker().len() + area_code.len(),
        // A bare number is taken to be the subscriber number as a whole.
        CountryCodeSource::FromDefaultCountry => 0,
    }
}

/// Cuts the marker, country code and area code off `number` and returns the
/// subscriber part, or `None` if nothing remains.
pub(super) fn local_number_of<'a>(
    number: &'a str,
    source: CountryCodeSource,
    country_code: &str,
    area_code: &str,
) -> Option<&'a str> {
    let pad = prefix_length(source, country_code, area_code).min(number.len());
    let local_number = &number[pad..];
    (!local_number.is_empty()).then_some(local_number)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[test]
    fn normalize_borrows_clean_numbers() {
        assert!(matches!(normalize_separators("+493511234567"), Cow::Borrowed(_)));
        assert_eq!(normalize_separators("+49 (351) 123-45_67"), "+493511234567");
        assert_eq!(normalize_separators("( )"), "");
    }

    #[test]
    fn area_code_requires_matching_country() {
        assert_eq!(area_code_from_full_prefix("+49351", "49"), Some("351"));
        assert_eq!(area_code_from_full_prefix("+49351", "43"), None);
        assert_eq!(area_code_from_full_prefix("+49", "49"), None);
    }

    #[test]
    fn local_number_strips_by_marker() {
        let cases = [
            ("00493511234567", CountryCodeSource::FromNumberWithIdd, "1234567"),
            ("+493511234567", CountryCodeSource::FromNumberWithPlusSign, "1234567"),
            ("03511234567", CountryCodeSource::FromTrunkPrefix, "1234567"),
            ("1234567", CountryCodeSource::FromDefaultCountry, "1234567"),
        ];
        for (number, source, expected) in cases {
            assert_eq!(local_number_of(number, source, "49", "351"), Some(expected));
        }
        assert_eq!(
            local_number_of("+49351", CountryCodeSource::FromNumberWithPlusSign, "49", "351"),
            None
        );
        assert_eq!(
            local_number_of("+4935", CountryCodeSource::FromNumberWithPlusSign, "49", "351"),
            None
        );
    }
}
