use std::sync::Mutex;

use async_trait::async_trait;
use http::{Method, StatusCode};
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::FetchError,
    fetcher::JsonFetcher,
    handler::{handle, validate, HandlerRequest, HandlerResponse, PhoneValidationHandler, Validated},
};

use super::init_logging;

/// Answers every GET with the same canned payload and remembers the URLs.
struct RecordingFetcher {
    response: Result<Value, String>,
    urls: Mutex<Vec<String>>,
}

impl RecordingFetcher {
    fn answering(response: Value) -> Self {
        Self { response: Ok(response), urls: Mutex::new(Vec::new()) }
    }

    fn failing(message: &str) -> Self {
        Self { response: Err(message.to_owned()), urls: Mutex::new(Vec::new()) }
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonFetcher for RecordingFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self.urls.lock().unwrap().push(url.to_owned());
        self.response.clone().map_err(FetchError::Decode)
    }
}

fn body_of(response: &HandlerResponse) -> Value {
    serde_json::from_str(&response.body).expect("response body must be JSON")
}

fn assert_cors_headers(response: &HandlerResponse) {
    assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
    assert_eq!(response.header("access-control-allow-headers"), Some("Content-Type"));
    assert_eq!(response.header("Access-Control-Allow-Methods"), Some("POST, OPTIONS"));
    assert_eq!(response.header("Content-Type"), Some("application/json"));
}

#[tokio::test]
async fn preflight_is_answered_without_body() {
    init_logging();
    let fetcher = RecordingFetcher::answering(json!({}));
    let response = handle(HandlerRequest::new(Method::OPTIONS, None), &Config::default(), &fetcher).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());
    assert_cors_headers(&response);
}

#[tokio::test]
async fn only_post_is_allowed() {
    let fetcher = RecordingFetcher::answering(json!({}));
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let request = HandlerRequest::new(method, Some(r#"{"phone":"34612345678"}"#.to_owned()));
        let response = handle(request, &Config::default(), &fetcher).await;

        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_of(&response), json!({ "error": "Method not allowed" }));
        assert_cors_headers(&response);
    }
    assert!(fetcher.urls().is_empty());
}

#[tokio::test]
async fn phone_is_required() {
    let fetcher = RecordingFetcher::answering(json!({}));
    let config = Config::with_api_key("k3y");
    for body in ["{}", r#"{"phone":""}"#, r#"{"phone":null,"provider":"veriphone"}"#] {
        let response = handle(HandlerRequest::post(body), &config, &fetcher).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(body_of(&response), json!({ "error": "Phone number is required" }));
    }
    assert!(fetcher.urls().is_empty());
}

#[tokio::test]
async fn basic_validation_without_any_key() {
    init_logging();
    let fetcher = RecordingFetcher::answering(json!({}));
    let response = handle(
        HandlerRequest::post(r#"{"phone":"34612345678"}"#),
        &Config::default(),
        &fetcher,
    ).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_cors_headers(&response);
    assert_eq!(body_of(&response), json!({
        "valid": true,
        "number": "34612345678",
        "international_format": "+34612345678",
        "country_prefix": "+34",
        "country_name": "Spain",
        "location": "Europe",
        "line_type": "mobile",
        "validation_type": "basic",
        "note": "Basic validation only. Add API key for full validation.",
    }));
    assert!(fetcher.urls().is_empty());
}

#[tokio::test]
async fn basic_rejections_still_answer_ok() {
    let fetcher = RecordingFetcher::answering(json!({}));
    let response = handle(HandlerRequest::post(r#"{"phone":"123"}"#), &Config::default(), &fetcher).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(body_of(&response), json!({
        "valid": false,
        "number": "123",
        "error": "Invalid phone number length",
        "note": "Basic validation only. Add API key for full validation.",
    }));
}

#[tokio::test]
async fn unknown_provider_without_key_falls_back_to_basic() {
    let fetcher = RecordingFetcher::answering(json!({}));
    let request = HandlerRequest::post(r#"{"phone":"50212345678","provider":"twilio","apiKey":""}"#);
    let validated = validate(request, &Config::default(), &fetcher).await.unwrap();

    assert!(matches!(&validated, Validated::Basic(_)));
    assert_eq!(validated.result().country_name.as_deref(), Some("Guatemala"));
}

#[tokio::test]
async fn unknown_provider_with_key_is_rejected() {
    let fetcher = RecordingFetcher::answering(json!({}));
    let response = handle(
        HandlerRequest::post(r#"{"phone":"34612345678","provider":"twilio"}"#),
        &Config::with_api_key("k3y"),
        &fetcher,
    ).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(body_of(&response), json!({ "error": "Invalid API provider" }));
    assert!(fetcher.urls().is_empty());
}

#[tokio::test]
async fn upstream_error_is_surfaced() {
    init_logging();
    let fetcher = RecordingFetcher::answering(json!({
        "success": false,
        "error": { "code": 101, "info": "invalid access key" }
    }));
    let response = handle(
        HandlerRequest::post(r#"{"phone":"123","provider":"numverify"}"#),
        &Config::with_api_key("k3y"),
        &fetcher,
    ).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(body_of(&response), json!({
        "valid": false,
        "number": "123",
        "error": "invalid access key",
    }));
    assert_eq!(
        fetcher.urls(),
        ["http://apilayer.net/api/validate?access_key=k3y&number=123&format=1"]
    );
}

#[tokio::test]
async fn upstream_error_detail_is_passed_through_as_json() {
    let fetcher = RecordingFetcher::answering(json!({ "error": { "info": 104, "message": "ignored" } }));
    let request = HandlerRequest::post(r#"{"phone":"34612345678","provider":"numverify"}"#);
    let err = validate(request, &Config::with_api_key("k3y"), &fetcher).await.unwrap_err();

    assert_eq!(err.to_string(), "104");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_body(), json!({ "valid": false, "number": "34612345678", "error": 104 }));

    let fetcher = RecordingFetcher::answering(json!({ "error": { "message": "quota exceeded" } }));
    let request = HandlerRequest::post(r#"{"phone":"34612345678"}"#);
    let err = validate(request, &Config::with_api_key("k3y"), &fetcher).await.unwrap_err();
    assert_eq!(err.to_string(), "quota exceeded");
}

#[tokio::test]
async fn non_string_provider_only_matters_with_a_key() {
    let fetcher = RecordingFetcher::answering(json!({}));
    let body = r#"{"phone":"34612345678","provider":7}"#;

    let response = handle(HandlerRequest::post(body), &Config::default(), &fetcher).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(body_of(&response)["country_name"], json!("Spain"));

    let response = handle(HandlerRequest::post(body), &Config::with_api_key("k3y"), &fetcher).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(body_of(&response), json!({ "error": "Invalid API provider" }));
    assert!(fetcher.urls().is_empty());
}

#[tokio::test]
async fn numeric_caller_key_is_used_as_text() {
    let fetcher = RecordingFetcher::answering(json!({ "valid": true, "number": "34612345678" }));
    for body in [
        r#"{"phone":"34612345678","apiKey":12345}"#,
        r#"{"phone":"34612345678","apiKey":0}"#,
        r#"{"phone":"34612345678","apiKey":true}"#,
        r#"{"phone":"34612345678","apiKey":null}"#,
    ] {
        let response = handle(HandlerRequest::post(body), &Config::default(), &fetcher).await;
        assert_eq!(response.status, StatusCode::OK, "{}", body);
    }

    assert_eq!(
        fetcher.urls(),
        ["http://apilayer.net/api/validate?access_key=12345&number=34612345678&format=1"]
    );
}

#[tokio::test]
async fn empty_deployment_key_defers_to_caller() {
    let fetcher = RecordingFetcher::answering(json!({ "valid": true, "number": "34612345678" }));
    let config = Config { api_key: Some(String::new()) };
    let response = handle(
        HandlerRequest::post(r#"{"phone":"34612345678","apiKey":"caller-key"}"#),
        &config,
        &fetcher,
    ).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        fetcher.urls(),
        ["http://apilayer.net/api/validate?access_key=caller-key&number=34612345678&format=1"]
    );
}

#[tokio::test]
async fn deployment_key_wins_over_caller_key() {
    let fetcher = RecordingFetcher::answering(json!({ "valid": true, "number": "34612345678" }));
    let body = r#"{"phone":"34612345678","apiKey":"caller-key"}"#;

    handle(HandlerRequest::post(body), &Config::with_api_key("deploy-key"), &fetcher).await;
    handle(HandlerRequest::post(body), &Config::default(), &fetcher).await;

    assert_eq!(fetcher.urls(), [
        "http://apilayer.net/api/validate?access_key=deploy-key&number=34612345678&format=1",
        "http://apilayer.net/api/validate?access_key=caller-key&number=34612345678&format=1",
    ]);
}

#[tokio::test]
async fn provider_answer_is_normalized() {
    let fetcher = RecordingFetcher::answering(json!({
        "status": "success",
        "phone": "+34 612 34 56 78",
        "phone_valid": true,
        "phone_type": "mobile",
        "phone_region": "Spain",
        "country": "Spain",
        "country_code": "ES",
        "country_prefix": "34",
        "phone_domestic": "612 34 56 78",
        "phone_e164": "+34612345678",
        "carrier": "Movistar"
    }));
    let handler = PhoneValidationHandler::new(Config::default(), fetcher);
    let response = handler.handle(HandlerRequest::post(
        r#"{"phone":"+34 612 34 56 78","provider":"veriphone","apiKey":"caller-key"}"#,
    )).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(body_of(&response), json!({
        "valid": true,
        "number": "+34 612 34 56 78",
        "local_format": "612 34 56 78",
        "international_format": "+34612345678",
        "country_prefix": "34",
        "country_code": "ES",
        "country_name": "Spain",
        "location": "Spain",
        "carrier": "Movistar",
        "line_type": "mobile",
    }));
}

#[tokio::test]
async fn missing_upstream_number_falls_back_to_request() {
    let fetcher = RecordingFetcher::answering(json!({ "valid": false, "format": {}, "country": null }));
    let request = HandlerRequest::post(r#"{"phone":"999","provider":"abstractapi","apiKey":"k"}"#);
    let validated = validate(request, &Config::default(), &fetcher).await.unwrap();

    assert!(matches!(&validated, Validated::Provider(_)));
    assert_eq!(validated.result().number, "999");
    assert!(!validated.result().valid);
    assert_eq!(fetcher.urls(), ["https://phonevalidation.abstractapi.com/v1/?api_key=k&phone=999"]);
}

#[tokio::test]
async fn fetch_failure_is_internal_error() {
    init_logging();
    let fetcher = RecordingFetcher::failing("connection reset");
    let response = handle(
        HandlerRequest::post(r#"{"phone":"34612345678"}"#),
        &Config::with_api_key("k3y"),
        &fetcher,
    ).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors_headers(&response);
    let body = body_of(&response);
    assert_eq!(body["valid"], json!(false));
    assert_eq!(body["error"], json!("Internal server error"));
    assert_eq!(body["message"], json!("Upstream response is not valid JSON: connection reset"));
}

#[tokio::test]
async fn malformed_body_is_internal_error() {
    let fetcher = RecordingFetcher::answering(json!({}));
    let requests = [
        HandlerRequest::post("{not json"),
        HandlerRequest::post("null"),
        HandlerRequest::post(r#"{"phone":34612345678}"#),
        HandlerRequest::new(Method::POST, None),
    ];
    for request in requests {
        let response = handle(request, &Config::default(), &fetcher).await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(&response);
        assert_eq!(body["error"], json!("Internal server error"));
        assert!(body["message"].as_str().is_some_and(|message| !message.is_empty()));
    }
}

#[test]
fn config_ignores_empty_keys() {
    let config = Config::with_api_key("");
    assert_eq!(config.api_key, None);
    assert_eq!(config.resolve_api_key(Some("")), None);
    assert_eq!(config.resolve_api_key(Some("caller")), Some("caller"));
    assert_eq!(Config::with_api_key("env").resolve_api_key(Some("caller")), Some("env"));

    // built by hand, bypassing the constructors' filtering
    let config = Config { api_key: Some(String::new()) };
    assert_eq!(config.resolve_api_key(Some("caller")), Some("caller"));
    assert_eq!(config.resolve_api_key(None), None);

    assert!(!format!("{:?}", Config::with_api_key("secret")).contains("secret"));
}
