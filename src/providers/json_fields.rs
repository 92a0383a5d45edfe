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

/// Fallback when a provider flags an error without saying what went wrong.
pub const GENERIC_UPSTREAM_ERROR: &str = "API error";

/// Walks nested objects, `None` as soon as a key is missing or a
/// non-object is in the way.
pub fn value_at<'v>(raw: &'v Value, path: &[&str]) -> Option<&'v Value> {
    path.iter().try_fold(raw, |value, key| value.get(*key))
}

/// Reads a scalar as a string. Numbers and booleans are rendered,
/// `null`, arrays and objects count as absent.
pub fn string_at(raw: &Value, path: &[&str]) -> Option<String> {
    match value_at(raw, path)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub fn flag_at(raw: &Value, path: &[&str]) -> bool {
    value_at(raw, path).and_then(Value::as_bool).unwrap_or(false)
}

/// JavaScript truthiness, which is what the providers' clients assume when
/// they look at an `error` field.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a JSON value: strings without quotes, anything else as
/// JSON.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Returns the failure a provider reported in its body, if any.
///
/// Prefers `error.info`, then `error.message`, then a generic message.
/// The detail is passed on with whatever JSON type the provider used.
pub fn upstream_error_message(raw: &Value) -> Option<Value> {
    let error = raw.get("error").filter(|error| is_truthy(error))?;
    let message = ["info", "message"]
        .iter()
        .filter_map(|key| error.get(*key))
        .find(|detail| is_truthy(detail))
        .cloned()
        .unwrap_or_else(|| Value::from(GENERIC_UPSTREAM_ERROR));
    Some(message)
}
