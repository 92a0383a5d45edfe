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

use async_trait::async_trait;
use log::trace;
use serde_json::Value;

use crate::errors::FetchError;

/// Outbound HTTP used to reach providers, isolated so hosts and tests can
/// swap the transport.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Issues one GET and parses the body as JSON. The response status is
    /// not inspected.
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// `reqwest` backed fetcher. No retries; timeouts are whatever the wrapped
/// client was built with.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use your own `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JsonFetcher for ReqwestFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await?;
        trace!("Provider answered with status {}", response.status());
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| FetchError::Decode(err.to_string()))
    }
}
