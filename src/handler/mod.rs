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

mod request;
mod response;

use http::{Method, StatusCode};
use log::{debug, error, warn};

pub use request::HandlerRequest;
pub use response::{BASIC_VALIDATION_NOTE, HandlerResponse, RESPONSE_HEADERS};
use request::ValidateRequestBody;
use response::BasicValidationBody;

use crate::{
    basic::basic_validation,
    config::Config,
    errors::RequestError,
    fetcher::{JsonFetcher, ReqwestFetcher},
    providers::json_fields::{render, upstream_error_message},
    validation_result::ValidationResult,
};

/// Successful outcomes; both answer 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated {
    /// No key was available, only the dialing-code table was consulted.
    Basic(ValidationResult),
    /// A provider answered.
    Provider(ValidationResult),
}

impl Validated {
    pub fn result(&self) -> &ValidationResult {
        match self {
            Validated::Basic(result) | Validated::Provider(result) => result,
        }
    }

    fn into_response(self) -> HandlerResponse {
        match self {
            Validated::Basic(result) => HandlerResponse::json(
                StatusCode::OK,
                &BasicValidationBody { result: &result, note: BASIC_VALIDATION_NOTE },
            ),
            Validated::Provider(result) => HandlerResponse::json(StatusCode::OK, &result),
        }
    }
}

/// Bundles the deployment config with the transport used for providers.
#[derive(Debug)]
pub struct PhoneValidationHandler<F = ReqwestFetcher> {
    config: Config,
    fetcher: F,
}

impl PhoneValidationHandler<ReqwestFetcher> {
    /// Reads the key from the environment and talks to providers over a
    /// default `reqwest` client.
    pub fn from_env() -> Self {
        Self::new(Config::from_env(), ReqwestFetcher::new())
    }
}

impl<F: JsonFetcher> PhoneValidationHandler<F> {
    pub fn new(config: Config, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn handle(&self, request: HandlerRequest) -> HandlerResponse {
        handle(request, &self.config, &self.fetcher).await
    }
}

/// Runs one invocation end to end. Never fails: every outcome, including
/// internal errors, is turned into a JSON response.
pub async fn handle(
    request: HandlerRequest,
    config: &Config,
    fetcher: &dyn JsonFetcher,
) -> HandlerResponse {
    if request.method == Method::OPTIONS {
        return HandlerResponse::preflight();
    }

    match validate(request, config, fetcher).await {
        Ok(validated) => validated.into_response(),
        Err(err) => {
            if let RequestError::Internal(cause) = &err {
                error!("Validation error: {}", cause);
            }
            HandlerResponse::json(err.status(), &err.to_body())
        }
    }
}

/// The request state machine, with failures kept typed.
pub async fn validate(
    request: HandlerRequest,
    config: &Config,
    fetcher: &dyn JsonFetcher,
) -> Result<Validated, RequestError> {
    if request.method != Method::POST {
        return Err(RequestError::MethodNotAllowed);
    }

    let mut body: ValidateRequestBody =
        serde_json::from_str(request.body.as_deref().unwrap_or_default())?;
    let phone = body
        .phone
        .take()
        .filter(|phone| !phone.is_empty())
        .ok_or(RequestError::MissingPhone)?;

    let client_key = body.client_api_key();
    let Some(api_key) = config.resolve_api_key(client_key.as_deref()) else {
        debug!("No API key available, falling back to basic validation");
        return Ok(Validated::Basic(basic_validation(&phone)));
    };

    let adapter = body.provider()?.adapter();
    debug!("Validating through {}", adapter.display_name());

    let url = adapter.build_request_url(&phone, api_key);
    let raw = fetcher.get_json(&url).await?;

    if let Some(message) = upstream_error_message(&raw) {
        warn!("{} reported an error: {}", adapter.display_name(), render(&message));
        return Err(RequestError::Upstream { phone, message });
    }

    let mut result = adapter.normalize(&raw);
    if result.number.is_empty() {
        result.number = phone;
    }
    Ok(Validated::Provider(result))
}
