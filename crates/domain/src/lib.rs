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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod action;
mod error;
mod lifecycle;
mod lookup;
mod participation;
mod snapshot;
mod timestamp;
mod types;

#[cfg(test)]
mod tests;

pub use action::{Action, ActionDescriptor, resolve_action};
pub use error::DomainError;
pub use lifecycle::{is_window_open, next_boundary, resolve_raffle_state, resolve_raffle_state_now};
pub use lookup::{
    first_count, first_object, first_present, first_str, first_timestamp, first_truthy, is_truthy,
};
pub use participation::{
    ParticipationTally, resolve_participation_state, resolve_participation_state_now,
    tally_participations,
};
pub use snapshot::{ParticipationSnapshot, RaffleSnapshot, malformed_timestamps};
pub use timestamp::{format_timestamp, parse_timestamp};

// Re-export public types
pub use types::{ParticipationState, RaffleState, RaffleStatus};
