// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Outgoing request description.
//!
//! An [`ApiRequest`] carries everything a transport needs to send a call
//! to the backend: method, absolute URL, headers and body. Sending it is
//! the transport's job.
//!
//! ## Form Serialization
//!
//! [`FormFields::from_json`] flattens a JSON object into ordered text
//! fields the way multipart submissions expect them:
//!
//! - `null` values are skipped
//! - Booleans become `"true"` / `"false"`
//! - Numbers and strings are sent as-is
//! - Arrays repeat the key once per element
//! - Nested objects (and objects inside arrays) are JSON-encoded

use crate::auth::TokenStore;
use crate::config::GatewayConfig;
use crate::error::ApiError;
use serde_json::Value;

/// HTTP method of a backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered text fields of a multipart form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes a JSON object into form fields.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if `value` is not a JSON object.
    pub fn from_json(value: &Value) -> Result<Self, ApiError> {
        let object = value.as_object().ok_or_else(|| ApiError::InvalidInput {
            field: String::from("body"),
            message: String::from("form bodies must be JSON objects"),
        })?;

        let mut form = Self::new();
        for (key, entry) in object {
            match entry {
                Value::Array(items) => {
                    for item in items {
                        form.push_value(key, item);
                    }
                }
                other => form.push_value(key, other),
            }
        }
        Ok(form)
    }

    /// Appends a text field.
    pub fn push(&mut self, name: &str, value: &str) {
        self.fields.push((name.to_string(), value.to_string()));
    }

    fn push_value(&mut self, name: &str, value: &Value) {
        match value {
            Value::Null => {}
            Value::Bool(b) => self.push(name, if *b { "true" } else { "false" }),
            Value::Number(n) => self.push(name, &n.to_string()),
            Value::String(s) => self.push(name, s),
            Value::Array(_) | Value::Object(_) => self.push(name, &value.to_string()),
        }
    }

    /// Returns all values recorded under `name`, in insertion order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Body of a backend call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Form(FormFields),
}

impl RequestBody {
    /// The `Content-Type` the transport must send.
    ///
    /// Multipart bodies report the bare media type; the transport appends
    /// the boundary it generates.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some("application/json"),
            Self::Form(_) => Some("multipart/form-data"),
        }
    }
}

/// A fully described backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
    /// The `Authorization` header value, when the session has a token.
    pub authorization: Option<String>,
}

impl ApiRequest {
    /// Describes a call to `path` relative to the configured base URL.
    #[must_use]
    pub fn new(config: &GatewayConfig, method: Method, path: &str) -> Self {
        Self {
            method,
            url: config.endpoint(path),
            body: RequestBody::Empty,
            authorization: None,
        }
    }

    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    /// Attaches a JSON object as multipart form fields.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if `body` is not a JSON object.
    pub fn with_form(mut self, body: &Value) -> Result<Self, ApiError> {
        self.body = RequestBody::Form(FormFields::from_json(body)?);
        Ok(self)
    }

    /// Attaches the session's bearer token, if any.
    #[must_use]
    pub fn authorized(mut self, tokens: &TokenStore) -> Self {
        self.authorization = tokens.authorization_header();
        self
    }

    /// Headers the transport must send, in a stable order.
    #[must_use]
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Accept", String::from("application/json"))];
        if let Some(authorization) = &self.authorization {
            headers.push(("Authorization", authorization.clone()));
        }
        if let Some(content_type) = self.body.content_type() {
            headers.push(("Content-Type", content_type.to_string()));
        }
        headers
    }
}
