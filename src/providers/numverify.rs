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

/// apilayer NumVerify. Authenticates with `access_key`; field names already
/// match the common shape.
pub struct NumVerify;

impl ProviderAdapter for NumVerify {
    fn provider(&self) -> Provider {
        Provider::NumVerify
    }

    fn display_name(&self) -> &'static str {
        "NumVerify"
    }

    fn base_url(&self) -> &'static str {
        "http://apilayer.net/api/validate"
    }

    fn build_request_url(&self, phone: &str, api_key: &str) -> String {
        let phone = encode_phone(phone);
        fast_cat::concat_str!(
            self.base_url(),
            "?access_key=",
            api_key,
            "&number=",
            phone.as_str(),
            "&format=1"
        )
    }

    fn normalize(&self, raw: &Value) -> ValidationResult {
        ValidationResult {
            valid: flag_at(raw, &["valid"]),
            number: string_at(raw, &["number"]).unwrap_or_default(),
            local_format: string_at(raw, &["local_format"]),
            international_format: string_at(raw, &["international_format"]),
            country_prefix: string_at(raw, &["country_prefix"]),
            country_code: string_at(raw, &["country_code"]),
            country_name: string_at(raw, &["country_name"]),
            location: string_at(raw, &["location"]),
            carrier: string_at(raw, &["carrier"]),
            line_type: string_at(raw, &["line_type"]),
            ..Default::default()
        }
    }
}
