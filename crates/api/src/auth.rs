// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bearer-token management for the gateway.
//!
//! The store holds the access and refresh tokens issued at login and
//! produces the `Authorization` header attached to outgoing requests.
//!
//! ## Rules
//!
//! - Tokens are trimmed; empty tokens count as absent
//! - A 401 from the backend clears both tokens
//! - Token values never appear in `Debug` output

use crate::error::ApiError;
use roulette_domain::first_str;
use serde_json::Value;
use tracing::{debug, warn};

const ACCESS_KEYS: &[&str] = &["access", "access_token", "token"];
const REFRESH_KEYS: &[&str] = &["refresh", "refresh_token"];

/// Holds the current session tokens.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenStore {
    access: Option<String>,
    refresh: Option<String>,
}

impl TokenStore {
    /// Creates an empty, unauthenticated store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces both tokens.
    pub fn set_tokens(&mut self, access: &str, refresh: Option<&str>) {
        self.access = normalize_token(access);
        self.refresh = refresh.and_then(normalize_token);
        debug!(
            authenticated = self.is_authenticated(),
            has_refresh = self.refresh.is_some(),
            "Session tokens updated"
        );
    }

    /// Replaces only the access token, keeping the refresh token.
    pub fn set_access(&mut self, access: &str) {
        self.access = normalize_token(access);
    }

    /// Forgets both tokens.
    pub fn clear(&mut self) {
        self.access = None;
        self.refresh = None;
        debug!("Session tokens cleared");
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access.as_deref()
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh.as_deref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.access.is_some()
    }

    /// Returns the `Authorization` header value, if authenticated.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        self.access.as_ref().map(|token| format!("Bearer {token}"))
    }

    /// Stores the tokens from a login or refresh response body.
    ///
    /// Accepts `access` / `access_token` / `token` and `refresh` /
    /// `refresh_token`. A response without a refresh token keeps the
    /// current one, which is how refresh endpoints answer.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the body carries no access token.
    pub fn apply_token_response(&mut self, body: &Value) -> Result<(), ApiError> {
        let access = first_str(body, ACCESS_KEYS).ok_or_else(|| {
            warn!("Token response did not contain an access token");
            ApiError::InvalidInput {
                field: String::from("access"),
                message: String::from("token response did not contain an access token"),
            }
        })?;

        match first_str(body, REFRESH_KEYS) {
            Some(refresh) => self.set_tokens(&access, Some(&refresh)),
            None => self.set_access(&access),
        }
        Ok(())
    }

    /// Reacts to a gateway error, clearing the session on auth failures.
    pub fn observe_error(&mut self, err: &ApiError) {
        if err.is_auth_failure() && self.is_authenticated() {
            warn!(error = %err, "Backend rejected session; clearing tokens");
            self.clear();
        }
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("access", &self.access.as_ref().map(|_| "<redacted>"))
            .field("refresh", &self.refresh.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Extracts the token from a `Bearer <token>` header value.
///
/// The scheme is matched case-insensitively.
#[must_use]
pub fn parse_bearer(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

fn normalize_token(token: &str) -> Option<String> {
    let trimmed = token.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
