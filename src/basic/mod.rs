// Copyright (C) 2025 The rphonecheck Authors
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

//! Validation without a provider: length check, dialing-code lookup and a
//! mobile prefix guess. No network access.

pub mod helper_constants;

use std::borrow::Cow;

use log::trace;

use helper_constants::{
    BYTE_ORDER_MARK, FORMATTING_PUNCTUATION, LINE_TYPE_MOBILE, LINE_TYPE_UNKNOWN,
    MAX_LENGTH_FOR_NUMBER, MIN_LENGTH_FOR_NUMBER, NEXT_LINE, PLUS_SIGN,
};

use crate::{
    errors::BasicValidationError,
    registry::{CountryEntry, CountryRegistry, COUNTRY_REGISTRY},
    string_util::{strip_chars, strip_cow_prefix},
    validation_result::{ValidationResult, BASIC_VALIDATION_TYPE},
};

/// A number the basic validator accepted.
#[derive(Debug)]
pub struct BasicMatch<'r, 'a> {
    /// Cleaned number, dialing code included, no leading plus.
    pub number: Cow<'a, str>,
    pub country: &'r CountryEntry,
    pub is_mobile: bool,
}

impl<'r, 'a> BasicMatch<'r, 'a> {
    /// The digits after the dialing code.
    pub fn national_number(&self) -> &str {
        &self.number[self.country.dialing_code.len()..]
    }

    pub fn into_result(self) -> ValidationResult {
        let international_format = fast_cat::concat_str!(PLUS_SIGN, &self.number[..]);
        let country_prefix = fast_cat::concat_str!(PLUS_SIGN, self.country.dialing_code);
        let line_type = if self.is_mobile { LINE_TYPE_MOBILE } else { LINE_TYPE_UNKNOWN };

        ValidationResult {
            valid: true,
            number: self.number.into_owned(),
            international_format: Some(international_format),
            country_prefix: Some(country_prefix),
            country_name: Some(self.country.name.to_owned()),
            location: Some(self.country.region.to_string()),
            line_type: Some(line_type.to_owned()),
            validation_type: Some(BASIC_VALIDATION_TYPE.to_owned()),
            ..Default::default()
        }
    }
}

/// Whitespace as browsers' regex engines see it: Unicode `White_Space`
/// without NEXT LINE, plus the byte order mark.
fn is_separator_space(c: char) -> bool {
    c == BYTE_ORDER_MARK || (c.is_whitespace() && c != NEXT_LINE)
}

/// Strips whitespace, hyphens, parentheses and periods, then one leading
/// plus sign.
pub fn clean_phone_number(raw: &str) -> Cow<'_, str> {
    let cleaned = strip_chars(raw, |c| is_separator_space(c) || FORMATTING_PUNCTUATION.contains(&c));
    strip_cow_prefix(cleaned, PLUS_SIGN).unwrap_or_else(|untouched| untouched)
}

/// Cleans `raw` and classifies it against `registry`.
pub fn match_number<'r, 'a>(
    registry: &'r CountryRegistry,
    raw: &'a str,
) -> Result<BasicMatch<'r, 'a>, BasicValidationError> {
    let number = clean_phone_number(raw);

    let len = number.chars().count();
    if !(MIN_LENGTH_FOR_NUMBER..=MAX_LENGTH_FOR_NUMBER).contains(&len) {
        trace!("Rejecting {}: cleaned length {} is out of range", raw, len);
        return Err(BasicValidationError::InvalidLength);
    }

    let country = registry
        .lookup(&number)
        .ok_or(BasicValidationError::UnrecognizedCountryCode)?;
    let is_mobile = country.is_mobile(&number[country.dialing_code.len()..]);

    Ok(BasicMatch { number, country, is_mobile })
}

/// Validates against the compiled-in country table.
///
/// Rejections echo the raw input in `number` and carry the reason in
/// `error`.
pub fn basic_validation(raw: &str) -> ValidationResult {
    basic_validation_with(&COUNTRY_REGISTRY, raw)
}

pub fn basic_validation_with(registry: &CountryRegistry, raw: &str) -> ValidationResult {
    match match_number(registry, raw) {
        Ok(matched) => matched.into_result(),
        Err(err) => ValidationResult::invalid(raw, err),
    }
}
