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

use serde_json::Value;

use super::{encode_phone, json_fields::{flag_at, string_at}, Provider, ProviderAdapter};
use crate::validation_result::ValidationResult;

/// AbstractAPI phone validation. Formats and country details come in nested
/// `format` and `country` objects, either of which may be missing.
pub struct AbstractApi;

impl ProviderAdapter for AbstractApi {
    fn provider(&self) -> Provider {
        Provider::AbstractApi
    }

    fn display_name(&self) -> &'static str {
        "AbstractAPI"
    }

    fn base_url(&self) -> &'static str {
        "https://phonevalidation.abstractapi.com/v1/"
    }

    fn build_request_url(&self, phone: &str, api_key: &str) -> String {
        let phone = encode_phone(phone);
        fast_cat::concat_str!(
            self.base_url(),
            "?api_key=",
            api_key,
            "&phone=",
            phone.as_str()
        )
    }

    fn normalize(&self, raw: &Value) -> ValidationResult {
        ValidationResult {
            valid: flag_at(raw, &["valid"]),
            number: string_at(raw, &["phone"]).unwrap_or_default(),
            local_format: string_at(raw, &["format", "local"]),
            international_format: string_at(raw, &["format", "international"]),
            country_prefix: string_at(raw, &["country", "prefix"]),
            country_code: string_at(raw, &["country", "code"]),
            country_name: string_at(raw, &["country", "name"]),
            location: string_at(raw, &["location"]),
            carrier: string_at(raw, &["carrier"]),
            line_type: string_at(raw, &["type"]),
            ..Default::default()
        }
    }
}
