/// The maximum length of a country calling code.
pub const MAX_COUNTRYCODE_LENGTH: usize = 4;
/// The maximum length of an area or mobile carrier code.
pub const MAX_AREACODE_LENGTH: usize = 8;
// A full prefix is `+`, the country code and the area code. Anything past this
// belongs to the subscriber and must not take part in prefix matching.
pub const MAX_FULL_PREFIX_LENGTH: usize = 1 + MAX_COUNTRYCODE_LENGTH + MAX_AREACODE_LENGTH;

/// Regular expression of strings accepted as phone numbers: an optional
/// (possibly parenthesized) `+` group followed by digits and the separators
/// `_`, `-`, space and parentheses.
pub const PHONE_NUMBER_PATTERN: &'static str = r"^(\(?\+?[0-9]*\)?)?[0-9_\- \(\)]*$";

pub const PLUS_SIGN: &'static str = "+";
pub const INTERNATIONAL_DIAL_PREFIX: &'static str = "00";
pub const TRUNK_PREFIX: &'static str = "0";
