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

use std::borrow::Cow;

use http::Method;
use log::warn;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    errors::RequestError,
    providers::{json_fields::is_truthy, Provider},
};

/// What the trigger adapter hands over: the HTTP method and the raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerRequest {
    pub method: Method,
    pub body: Option<String>,
}

impl HandlerRequest {
    pub fn new(method: Method, body: Option<String>) -> Self {
        Self { method, body }
    }

    pub fn post(body: impl Into<String>) -> Self {
        Self::new(Method::POST, Some(body.into()))
    }
}

/// JSON body of a validation request.
///
/// `provider` and `apiKey` accept any JSON type so that an odd value only
/// matters once a provider is actually consulted.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ValidateRequestBody {
    #[serde(default)]
    pub phone: Option<String>,
    /// Provider identifier, `numverify` when absent or `null`.
    #[serde(default)]
    pub provider: Option<Value>,
    /// Used only if the deployment has no key of its own.
    #[serde(default)]
    pub api_key: Option<Value>,
}

impl ValidateRequestBody {
    /// The caller's key as text. Strings are taken as is, non-zero numbers
    /// are rendered; anything else counts as no key.
    pub fn client_api_key(&self) -> Option<Cow<'_, str>> {
        let key = self.api_key.as_ref()?;
        match key {
            Value::String(text) => Some(Cow::Borrowed(text.as_str())),
            Value::Number(number) if is_truthy(key) => Some(Cow::Owned(number.to_string())),
            _ => None,
        }
    }

    pub fn provider(&self) -> Result<Provider, RequestError> {
        let identifier = match &self.provider {
            None => return Ok(Provider::default()),
            Some(Value::String(identifier)) => identifier.as_str(),
            Some(other) => {
                warn!("Provider must be an identifier, got {}", other);
                return Err(RequestError::InvalidProvider);
            }
        };
        identifier.parse::<Provider>().map_err(|_| {
            warn!("Unknown provider requested: {}", identifier);
            RequestError::InvalidProvider
        })
    }
}
