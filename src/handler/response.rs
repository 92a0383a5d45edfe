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

use http::StatusCode;
use log::error;
use serde::Serialize;

use crate::validation_result::ValidationResult;

/// Sent with every response, preflight included.
pub const RESPONSE_HEADERS: &[(&str, &str)] = &[
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Content-Type", "application/json"),
];

pub const BASIC_VALIDATION_NOTE: &str = "Basic validation only. Add API key for full validation.";

// Written by hand so it can't fail to serialize.
const SERIALIZATION_FAILURE_BODY: &str =
    r#"{"valid":false,"error":"Internal server error","message":"Failed to serialize response"}"#;

/// What goes back to the trigger adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: StatusCode,
    pub headers: &'static [(&'static str, &'static str)],
    pub body: String,
}

impl HandlerResponse {
    pub fn preflight() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            headers: RESPONSE_HEADERS,
            body: String::new(),
        }
    }

    pub fn json(status: StatusCode, body: &impl Serialize) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self { status, headers: RESPONSE_HEADERS, body },
            Err(err) => {
                error!("Failed to serialize response body: {}", err);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    headers: RESPONSE_HEADERS,
                    body: SERIALIZATION_FAILURE_BODY.to_owned(),
                }
            }
        }
    }

    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

/// A basic validation result with the note telling the caller no provider
/// was consulted.
#[derive(Debug, Serialize)]
pub(super) struct BasicValidationBody<'a> {
    #[serde(flatten)]
    pub result: &'a ValidationResult,
    pub note: &'static str,
}
