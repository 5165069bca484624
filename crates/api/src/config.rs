// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL without a trailing slash.
    base_url: String,
}

impl GatewayConfig {
    /// Creates a configuration for the given base URL.
    ///
    /// Surrounding whitespace and trailing slashes are removed.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfig` if the base URL is empty or is
    /// neither an `http(s)://` URL nor an absolute path.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let raw = base_url.trim();

        if raw.is_empty() {
            return Err(ApiError::InvalidConfig {
                message: String::from("base URL must not be empty"),
            });
        }

        let is_http = raw.starts_with("http://") || raw.starts_with("https://");
        if !is_http && !raw.starts_with('/') {
            return Err(ApiError::InvalidConfig {
                message: format!("base URL '{raw}' must be http(s) or an absolute path"),
            });
        }

        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL with exactly one slash between them.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim().trim_start_matches('/'))
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
