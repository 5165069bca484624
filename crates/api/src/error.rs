// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the gateway layer.
//!
//! Backend error responses come in several shapes (`detail`, `message`,
//! `error`, `non_field_errors`, per-field message lists, plain text).
//! [`normalize_error`] folds all of them into one [`ApiError`].

use roulette_domain::first_str;
use serde_json::Value;
use thiserror::Error;

/// Keys that carry a top-level error message, in priority order.
const MESSAGE_KEYS: &[&str] = &["detail", "message", "error"];

/// Keys that are never treated as per-field validation errors.
const RESERVED_KEYS: &[&str] = &[
    "detail",
    "message",
    "error",
    "non_field_errors",
    "code",
    "status",
    "messages",
];

/// Longest plain-text body carried into an error message.
const MAX_RAW_MESSAGE_CHARS: usize = 200;

/// Validation messages attached to a single request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub messages: Vec<String>,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.messages.join(" "))
    }
}

/// Gateway-level errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The backend rejected the credentials (HTTP 401).
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// The caller lacks permission (HTTP 403).
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// The resource does not exist (HTTP 404).
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The request was rejected by backend validation (HTTP 400/422).
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field_errors: Vec<FieldError>,
    },

    /// The backend failed (HTTP 5xx).
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Any other non-success status.
    #[error("Unexpected response ({status}): {message}")]
    Unexpected { status: u16, message: String },

    /// A request could not be built from the given input.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// Gateway configuration is unusable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ApiError {
    /// Returns true if the stored credentials should be discarded.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Per-field validation messages, empty for non-validation errors.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation { field_errors, .. } => field_errors,
            _ => &[],
        }
    }
}

/// Builds an [`ApiError`] from a non-success status code and response body.
///
/// The message is taken from, in order: `detail` / `message` / `error`,
/// `non_field_errors`, the first field error, the raw body (when it is
/// not JSON), and finally a default for the status.
#[must_use]
pub fn normalize_error(status: u16, body: &str) -> ApiError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let field_errors = parsed.as_ref().map(collect_field_errors).unwrap_or_default();

    let message = parsed
        .as_ref()
        .and_then(extract_message)
        .or_else(|| field_errors.first().map(ToString::to_string))
        .or_else(|| parsed.is_none().then(|| raw_message(body)).flatten())
        .unwrap_or_else(|| default_message(status).to_string());

    match status {
        401 => ApiError::Unauthorized { message },
        403 => ApiError::Forbidden { message },
        404 => ApiError::NotFound { message },
        400 | 422 => ApiError::Validation {
            message,
            field_errors,
        },
        500..=599 => ApiError::Server { status, message },
        _ => ApiError::Unexpected { status, message },
    }
}

fn extract_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Array(items) => join_messages(items),
        Value::Object(object) => first_str(value, MESSAGE_KEYS).or_else(|| {
            object
                .get("non_field_errors")
                .and_then(Value::as_array)
                .and_then(|items| join_messages(items))
        }),
        _ => None,
    }
}

fn collect_field_errors(value: &Value) -> Vec<FieldError> {
    let Some(object) = value.as_object() else {
        return Vec::new();
    };

    object
        .iter()
        .filter(|(field, _)| !RESERVED_KEYS.contains(&field.as_str()))
        .filter_map(|(field, messages)| {
            let messages: Vec<String> = match messages {
                Value::String(s) => non_empty(s).into_iter().collect(),
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .filter_map(non_empty)
                    .collect(),
                _ => Vec::new(),
            };
            (!messages.is_empty()).then(|| FieldError {
                field: field.clone(),
                messages,
            })
        })
        .collect()
}

fn join_messages(items: &[Value]) -> Option<String> {
    let messages: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .filter_map(non_empty)
        .collect();
    (!messages.is_empty()).then(|| messages.join(" "))
}

fn raw_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.chars().take(MAX_RAW_MESSAGE_CHARS).collect())
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

const fn default_message(status: u16) -> &'static str {
    match status {
        401 => "Authentication required",
        403 => "Permission denied",
        404 => "Resource not found",
        400 | 422 => "Invalid request",
        500..=599 => "The server encountered an error",
        _ => "Unexpected response from the server",
    }
}
