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

mod abstractapi;
pub(crate) mod json_fields;
mod numverify;
mod veriphone;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub use abstractapi::AbstractApi;
pub use numverify::NumVerify;
pub use veriphone::Veriphone;

use crate::validation_result::ValidationResult;

/// Characters `encodeURIComponent` leaves alone; everything else in the
/// phone query parameter is percent-encoded.
const PHONE_QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The closed set of third-party validation services.
///
/// Parsed from the request's `provider` field; identifiers are the
/// lowercase variant names and matching is case-sensitive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
    EnumString, EnumIter, AsRefStr, Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    /// apilayer's NumVerify, reached over plain HTTP.
    #[default]
    NumVerify,
    AbstractApi,
    Veriphone,
}

impl Provider {
    pub fn adapter(self) -> &'static dyn ProviderAdapter {
        match self {
            Provider::NumVerify => &NumVerify,
            Provider::AbstractApi => &AbstractApi,
            Provider::Veriphone => &Veriphone,
        }
    }
}

/// Knows how to ask one provider about a number and how to read its answer.
pub trait ProviderAdapter: Send + Sync {
    fn provider(&self) -> Provider;

    /// Human readable service name.
    fn display_name(&self) -> &'static str;

    fn base_url(&self) -> &'static str;

    /// Returns a ready to send GET URL. The phone is percent-encoded, the
    /// key is embedded as is.
    fn build_request_url(&self, phone: &str, api_key: &str) -> String;

    /// Maps the provider's JSON onto the common result shape. Missing
    /// fields become `None`; a missing validity flag reads as invalid.
    fn normalize(&self, raw: &Value) -> ValidationResult;
}

pub(crate) fn encode_phone(phone: &str) -> String {
    utf8_percent_encode(phone, PHONE_QUERY_ENCODE_SET).to_string()
}
