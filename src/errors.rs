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
use thiserror::Error;

use crate::providers::json_fields::render;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Dialing code must be 1 to 3 digits, got '{0}'")]
    InvalidDialingCode(String),
    #[error("Dialing code '{0}' is registered twice")]
    DuplicateDialingCode(String),
    #[error("An error occurred while trying to create regex: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Reasons the basic (no API key) validation rejects a number.
///
/// The display strings are what callers see in the `error` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum BasicValidationError {
    /// Cleaned number is shorter than 8 or longer than 15 digits.
    #[error("Invalid phone number length")]
    InvalidLength,
    /// No registered dialing code is a prefix of the number.
    #[error("Unrecognized country code")]
    UnrecognizedCountryCode,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Upstream response is not valid JSON: {0}")]
    Decode(String),
}

/// Failures nobody asked for: the request could not be processed at all.
#[derive(Debug, Error)]
pub enum InternalError {
    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("{0}")]
    Fetch(#[from] FetchError),
}

/// Everything that ends a request without a validation result.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Phone number is required")]
    MissingPhone,
    #[error("Invalid API provider")]
    InvalidProvider,
    /// The provider answered, but reported a failure in its body.
    #[error("{}", render(.message))]
    Upstream { phone: String, message: serde_json::Value },
    #[error("Internal server error")]
    Internal(#[from] InternalError),
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RequestError::MissingPhone
            | RequestError::InvalidProvider
            | RequestError::Upstream { .. } => StatusCode::BAD_REQUEST,
            RequestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Renders the JSON envelope sent back to the caller.
    pub fn to_body(&self) -> serde_json::Value {
        match self {
            RequestError::MethodNotAllowed
            | RequestError::MissingPhone
            | RequestError::InvalidProvider => serde_json::json!({ "error": self.to_string() }),
            RequestError::Upstream { phone, message } => serde_json::json!({
                "valid": false,
                "number": phone,
                "error": message,
            }),
            RequestError::Internal(err) => serde_json::json!({
                "valid": false,
                "error": self.to_string(),
                "message": err.to_string(),
            }),
        }
    }
}

impl From<FetchError> for RequestError {
    fn from(value: FetchError) -> Self {
        InternalError::Fetch(value).into()
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(value: serde_json::Error) -> Self {
        InternalError::MalformedBody(value).into()
    }
}
