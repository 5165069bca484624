// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The `status` field as reported by the backend.
///
/// This is an open domain: the backend is authoritative when it sends a
/// status, but it may send none, a stale one, or a value this crate does
/// not know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RaffleStatus {
    Active,
    Scheduled,
    Completed,
    Cancelled,
    Draft,
    /// Any other non-empty status string, lowercased.
    Other(String),
}

impl RaffleStatus {
    /// Interprets a raw status string.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Both `cancelled` and `canceled` are accepted.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Self::Active,
            "scheduled" => Self::Scheduled,
            "completed" => Self::Completed,
            "cancelled" | "canceled" => Self::Cancelled,
            "draft" => Self::Draft,
            _ => Self::Other(normalized),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Draft => "draft",
            Self::Other(raw) => raw,
        }
    }

    /// Returns true for statuses under which participation is (or will be) possible.
    #[must_use]
    pub const fn allows_participation(&self) -> bool {
        matches!(self, Self::Active | Self::Scheduled)
    }
}

impl std::fmt::Display for RaffleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived lifecycle state of a raffle.
///
/// Variants are declared in decreasing resolution priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaffleState {
    /// A winner has been drawn.
    Completed,
    /// The backend cancelled the raffle.
    Cancelled,
    /// Participation has closed; the draw has not happened yet.
    WaitingDraw,
    /// Participation window is open.
    Active,
    /// Participation window has not opened yet.
    Scheduled,
    /// Nothing else applies.
    Draft,
}

impl RaffleState {
    /// Every state, in resolution priority order.
    pub const ALL: [Self; 6] = [
        Self::Completed,
        Self::Cancelled,
        Self::WaitingDraw,
        Self::Active,
        Self::Scheduled,
        Self::Draft,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::WaitingDraw => "waiting_draw",
            Self::Active => "active",
            Self::Scheduled => "scheduled",
            Self::Draft => "draft",
        }
    }

    /// Returns true if users may currently submit participations.
    #[must_use]
    pub const fn accepts_participations(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns true if no further state change is expected from the
    /// passage of time alone.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl FromStr for RaffleState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| DomainError::UnknownRaffleState(s.to_string()))
    }
}

impl std::fmt::Display for RaffleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived state of a user's participation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipationState {
    /// The participation was drawn as a winner. Sticky.
    Won,
    /// The underlying raffle is still running or about to.
    Active,
    /// The underlying raffle is over and this entry did not win.
    Completed,
}

impl ParticipationState {
    pub const ALL: [Self; 3] = [Self::Won, Self::Active, Self::Completed];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Won => "won",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Maps a resolved raffle state onto the participation domain.
    ///
    /// Only used for non-winning participations.
    #[must_use]
    pub const fn from_raffle_state(state: RaffleState) -> Self {
        match state {
            RaffleState::Active | RaffleState::Scheduled => Self::Active,
            RaffleState::Completed
            | RaffleState::Cancelled
            | RaffleState::WaitingDraw
            | RaffleState::Draft => Self::Completed,
        }
    }

    /// Returns true if this state belongs in the list filtered by `filter`.
    ///
    /// `None` means "all".
    #[must_use]
    pub fn matches_filter(&self, filter: Option<Self>) -> bool {
        filter.is_none_or(|wanted| wanted == *self)
    }
}

impl FromStr for ParticipationState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| DomainError::UnknownParticipationState(s.to_string()))
    }
}

impl std::fmt::Display for ParticipationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
