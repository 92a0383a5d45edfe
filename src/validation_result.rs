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

use serde::{Deserialize, Serialize};

/// Marker put into `validation_type` by the dialing-code fallback.
pub const BASIC_VALIDATION_TYPE: &str = "basic";

/// The single output shape every validation path converges to.
///
/// Optional fields are only present when the source of truth supplied
/// them; `None` is left out of the serialized JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub international_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_type: Option<String>,
}

impl ValidationResult {
    /// A rejected number, echoing what the caller sent.
    pub fn invalid(number: impl Into<String>, error: impl ToString) -> Self {
        Self {
            valid: false,
            number: number.into(),
            error: Some(error.to_string()),
            ..Default::default()
        }
    }

    pub fn is_basic(&self) -> bool {
        self.validation_type.as_deref() == Some(BASIC_VALIDATION_TYPE)
    }
}
