// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Raffle lifecycle state resolution.
//!
//! This module classifies a raffle snapshot into exactly one
//! [`RaffleState`] at an evaluation instant `now`. Checks run in a fixed
//! priority order and the first match wins:
//!
//! 1. `completed` - any drawn indicator is set
//! 2. `cancelled` - status is `cancelled`
//! 3. `waiting_draw` - a participation end exists and is `<= now`
//! 4. No window dates: `completed`, `scheduled` or `draft` when the status
//!    says so, `active` otherwise
//! 5. `active` - the participation window is open at `now`
//! 6. `scheduled` - a participation start exists and is `> now`
//! 7. `draft` - fallback
//!
//! ## Invariants
//!
//! - Resolution is total and pure: every snapshot maps to one state
//! - `now` is read once by the caller and threaded through every comparison
//! - Malformed dates are already absent in the snapshot
//! - The status field only overrides the window rule when the snapshot
//!   carries no window dates at all
//!
//! ## Usage
//!
//! This logic is used by:
//! - Participation resolution (delegates for embedded raffles)
//! - Rendering views (state badges and call-to-action)

use crate::snapshot::RaffleSnapshot;
use crate::types::{RaffleState, RaffleStatus};
use time::OffsetDateTime;

/// Resolves the lifecycle state of a raffle at `now`.
///
/// # Arguments
///
/// * `raffle` - The raffle snapshot
/// * `now` - The evaluation instant, captured once per resolution pass
///
/// # Edge Cases
///
/// - No window dates and no status: `active` (open-ended participation)
/// - Drawn with a window still open: `completed`
/// - Start in the future, end far in the future: `scheduled`
/// - Start in the future, end already past: `waiting_draw`
#[must_use]
pub fn resolve_raffle_state(raffle: &RaffleSnapshot, now: OffsetDateTime) -> RaffleState {
    if raffle.is_drawn {
        return RaffleState::Completed;
    }

    if raffle.status == Some(RaffleStatus::Cancelled) {
        return RaffleState::Cancelled;
    }

    if raffle.participation_end.is_some_and(|end| end <= now) {
        return RaffleState::WaitingDraw;
    }

    if raffle.is_open_ended() {
        // Without dates the window is open by default; an explicit status wins.
        return match raffle.status {
            Some(RaffleStatus::Completed) => RaffleState::Completed,
            Some(RaffleStatus::Scheduled) => RaffleState::Scheduled,
            Some(RaffleStatus::Draft) => RaffleState::Draft,
            _ => RaffleState::Active,
        };
    }

    if is_window_open(raffle, now) {
        return RaffleState::Active;
    }

    if raffle.participation_start.is_some_and(|start| start > now) {
        return RaffleState::Scheduled;
    }

    RaffleState::Draft
}

/// Resolves the lifecycle state of a raffle against the wall clock.
///
/// The clock is read exactly once.
#[must_use]
pub fn resolve_raffle_state_now(raffle: &RaffleSnapshot) -> RaffleState {
    resolve_raffle_state(raffle, OffsetDateTime::now_utc())
}

/// Returns true if the participation window is open at `now`.
///
/// - Start absent: open iff the end is absent or after `now`
/// - Start present: open iff the start is at or before `now` and the end
///   is absent or after `now`
#[must_use]
pub fn is_window_open(raffle: &RaffleSnapshot, now: OffsetDateTime) -> bool {
    let started = raffle.participation_start.is_none_or(|start| start <= now);
    let not_ended = raffle.participation_end.is_none_or(|end| end > now);
    started && not_ended
}

/// Returns the next window boundary after `now` at which the resolved
/// state may change.
///
/// - `scheduled`: the participation start
/// - `active`: the participation end, if any
/// - Any other state: `None`, time alone will not move it
///
/// Callers use this to decide when to re-evaluate; nothing here waits.
#[must_use]
pub fn next_boundary(raffle: &RaffleSnapshot, now: OffsetDateTime) -> Option<OffsetDateTime> {
    match resolve_raffle_state(raffle, now) {
        RaffleState::Scheduled => raffle.participation_start.filter(|start| *start > now),
        RaffleState::Active => raffle.participation_end.filter(|end| *end > now),
        RaffleState::Completed
        | RaffleState::Cancelled
        | RaffleState::WaitingDraw
        | RaffleState::Draft => None,
    }
}
