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

use std::{borrow::Cow, fmt};

use crate::phonenumberformat::ResolvedNumber;

/// The template used for [`crate::DistanceRule::Canonical`].
pub const CANONICAL_FORMAT: &str = "+E (F) G";

/// Placeholder for the country code.
pub const COUNTRY_CODE_TOKEN: char = 'E';
/// Placeholder for the area or carrier code.
pub const AREA_CODE_TOKEN: char = 'F';
/// Placeholder for the subscriber number.
pub const LOCAL_NUMBER_TOKEN: char = 'G';

/// A display pattern made of the tokens `E`, `F`, `G` and literal decoration,
/// e.g. `00EFG` or `+E (F) G`.
///
/// Rendering does not inspect the decoration. A template that lacks a token
/// simply leaves that part out, and every character that is not a token is
/// copied as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatTemplate<'a> {
    pattern: Cow<'a, str>,
}

impl<'a> FormatTemplate<'a> {
    pub fn new(pattern: impl Into<Cow<'a, str>>) -> Self {
        Self { pattern: pattern.into() }
    }

    pub fn canonical() -> FormatTemplate<'static> {
        FormatTemplate::new(CANONICAL_FORMAT)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn render(&self, number: &ResolvedNumber) -> String {
        self.substitute(number.country_code(), number.area_code(), number.local_number())
    }

    /// Replaces every token by its part in one left-to-right pass. Inserted
    /// parts are never scanned for tokens again.
    pub fn substitute(&self, country_code: &str, area_code: &str, local_number: &str) -> String {
        let mut formatted = String::with_capacity(
            self.pattern.len() + country_code.len() + area_code.len() + local_number.len(),
        );
        for c in self.pattern.chars() {
            match c {
                COUNTRY_CODE_TOKEN => formatted.push_str(country_code),
                AREA_CODE_TOKEN => formatted.push_str(area_code),
                LOCAL_NUMBER_TOKEN => formatted.push_str(local_number),
                _ => formatted.push(c),
            }
        }
        formatted
    }
}

impl fmt::Display for FormatTemplate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::FormatTemplate;

    #[test]
    fn canonical_layout() {
        let formatted = FormatTemplate::canonical().substitute("49", "351", "1234567");
        assert_eq!(formatted, "+49 (351) 1234567");
    }

    #[test]
    fn country_templates() {
        assert_eq!(FormatTemplate::new("00EFG").substitute("49", "351", "1234567"), "00493511234567");
        assert_eq!(FormatTemplate::new("0FG").substitute("49", "351", "1234567"), "03511234567");
        assert_eq!(FormatTemplate::new("G").substitute("49", "351", "1234567"), "1234567");
    }

    #[test]
    fn decoration_is_copied_verbatim() {
        let template = FormatTemplate::new(String::from("(0F) G-x"));
        assert_eq!(template.substitute("49", "351", "1234567"), "(0351) 1234567-x");
        assert_eq!(template.to_string(), "(0F) G-x");
        assert_eq!(FormatTemplate::new("").substitute("49", "351", "1"), "");
    }
}
