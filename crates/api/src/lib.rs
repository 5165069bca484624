// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Gateway contract between the roulette front-end and its REST backend.
//!
//! This crate describes requests (URL, headers, body), manages the bearer
//! session, normalizes error responses, and turns raw list/detail
//! responses into views carrying resolved lifecycle state. It performs no
//! I/O itself.

mod auth;
mod config;
mod error;
mod request;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{TokenStore, parse_bearer};
pub use config::{DEFAULT_BASE_URL, GatewayConfig};
pub use error::{ApiError, FieldError, normalize_error};
pub use request::{ApiRequest, FormFields, Method, RequestBody};
pub use request_response::{
    ParticipationListResponse, ParticipationView, RaffleListResponse, RaffleView, decode_list,
    resolve_participation_views, resolve_raffle_views,
};

/// Result type for gateway operations.
pub type ApiResult<T> = Result<T, ApiError>;
