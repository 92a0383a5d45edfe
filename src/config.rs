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

/// Environment variable holding the deployment-wide provider key.
pub const API_KEY_ENV_VAR: &str = "NUMVERIFY_API_KEY";

/// Per-deployment settings, read once by the host and shared by every
/// invocation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Takes precedence over any key a caller sends.
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV_VAR).ok();
        if api_key.is_none() {
            log::debug!("{} is not set, callers must bring their own key", API_KEY_ENV_VAR);
        }
        Self::from_api_key(api_key)
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::from_api_key(Some(api_key.into()))
    }

    fn from_api_key(api_key: Option<String>) -> Self {
        Self { api_key: api_key.filter(|key| !key.is_empty()) }
    }

    /// The environment key if there is one, else the caller's. Empty
    /// strings count as no key.
    pub fn resolve_api_key<'a>(&'a self, client_key: Option<&'a str>) -> Option<&'a str> {
        let present = |key: &&str| !key.is_empty();
        self.api_key
            .as_deref()
            .filter(present)
            .or(client_key.filter(present))
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<REDACTED>"))
            .finish()
    }
}
