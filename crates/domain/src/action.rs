// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Call-to-action eligibility.
//!
//! A fixed lookup from resolved raffle state (plus whether the current
//! user already participates) to the action a rendering layer offers.
//! There is no branching beyond the table.

use crate::error::DomainError;
use crate::types::RaffleState;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The action offered for a raffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Participate,
    ViewWinner,
    Closed,
    Upcoming,
    Cancelled,
    AlreadyParticipating,
}

impl Action {
    pub const ALL: [Self; 6] = [
        Self::Participate,
        Self::ViewWinner,
        Self::Closed,
        Self::Upcoming,
        Self::Cancelled,
        Self::AlreadyParticipating,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Participate => "participate",
            Self::ViewWinner => "view_winner",
            Self::Closed => "closed",
            Self::Upcoming => "upcoming",
            Self::Cancelled => "cancelled",
            Self::AlreadyParticipating => "already_participating",
        }
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| DomainError::UnknownAction(s.to_string()))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Presentation-agnostic call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub action: Action,
    pub enabled: bool,
}

impl ActionDescriptor {
    const fn enabled(action: Action) -> Self {
        Self {
            action,
            enabled: true,
        }
    }

    const fn disabled(action: Action) -> Self {
        Self {
            action,
            enabled: false,
        }
    }
}

/// Looks up the call-to-action for a resolved raffle state.
///
/// | state          | not participating     | participating                    |
/// |----------------|-----------------------|----------------------------------|
/// | `active`       | participate (on)      | already participating (off)      |
/// | `completed`    | view winner (on)      | view winner (on)                 |
/// | `cancelled`    | cancelled (off)       | cancelled (off)                  |
/// | `waiting_draw` | closed (off)          | closed (off)                     |
/// | `scheduled`    | upcoming (off)        | upcoming (off)                   |
/// | `draft`        | closed (off)          | closed (off)                     |
#[must_use]
pub const fn resolve_action(state: RaffleState, already_participating: bool) -> ActionDescriptor {
    match (state, already_participating) {
        (RaffleState::Active, false) => ActionDescriptor::enabled(Action::Participate),
        (RaffleState::Active, true) => ActionDescriptor::disabled(Action::AlreadyParticipating),
        (RaffleState::Completed, _) => ActionDescriptor::enabled(Action::ViewWinner),
        (RaffleState::Cancelled, _) => ActionDescriptor::disabled(Action::Cancelled),
        (RaffleState::Scheduled, _) => ActionDescriptor::disabled(Action::Upcoming),
        (RaffleState::WaitingDraw | RaffleState::Draft, _) => {
            ActionDescriptor::disabled(Action::Closed)
        }
    }
}
