// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Participation state resolution.
//!
//! A participation is `won` whenever it is flagged as a winner, whatever
//! the raffle is doing. Otherwise its state follows the underlying raffle:
//! the embedded raffle snapshot when present, the flat `roulette_status`
//! field when not.

use crate::lifecycle::resolve_raffle_state;
use crate::snapshot::ParticipationSnapshot;
use crate::types::ParticipationState;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Resolves the state of a participation at `now`.
///
/// An absent or unknown flat status resolves to `completed`.
#[must_use]
pub fn resolve_participation_state(
    participation: &ParticipationSnapshot,
    now: OffsetDateTime,
) -> ParticipationState {
    if participation.is_winner {
        return ParticipationState::Won;
    }

    if let Some(raffle) = &participation.roulette {
        return ParticipationState::from_raffle_state(resolve_raffle_state(raffle, now));
    }

    match &participation.roulette_status {
        Some(status) if status.allows_participation() => ParticipationState::Active,
        _ => ParticipationState::Completed,
    }
}

/// Resolves the state of a participation against the wall clock.
#[must_use]
pub fn resolve_participation_state_now(participation: &ParticipationSnapshot) -> ParticipationState {
    resolve_participation_state(participation, OffsetDateTime::now_utc())
}

/// Per-state counts over a user's participations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationTally {
    pub won: usize,
    pub active: usize,
    pub completed: usize,
}

impl ParticipationTally {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.won + self.active + self.completed
    }

    const fn record(&mut self, state: ParticipationState) {
        match state {
            ParticipationState::Won => self.won += 1,
            ParticipationState::Active => self.active += 1,
            ParticipationState::Completed => self.completed += 1,
        }
    }
}

/// Counts participations by resolved state, all evaluated at the same `now`.
#[must_use]
pub fn tally_participations(
    participations: &[ParticipationSnapshot],
    now: OffsetDateTime,
) -> ParticipationTally {
    let mut tally = ParticipationTally::default();
    for participation in participations {
        tally.record(resolve_participation_state(participation, now));
    }
    tally
}
