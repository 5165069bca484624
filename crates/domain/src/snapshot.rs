// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only snapshots of backend records.
//!
//! Snapshots are built from raw JSON and never fail: missing, `null`,
//! mistyped and malformed fields all read as absent, and unknown fields
//! are ignored. Each attribute is resolved through an ordered list of
//! aliases because the backend names the same concept differently across
//! endpoints.

use crate::lookup::{
    first_count, first_object, first_present, first_str, first_timestamp, first_truthy,
};
use crate::types::RaffleStatus;
use serde::Deserialize;
use serde_json::Value;
use time::OffsetDateTime;

pub(crate) const STATUS_KEYS: &[&str] = &["status", "roulette_status"];
pub(crate) const IS_DRAWN_KEYS: &[&str] = &["is_drawn", "drawn"];
pub(crate) const DRAWN_AT_KEYS: &[&str] = &["drawn_at", "winner_drawn_at"];
pub(crate) const WINNER_KEYS: &[&str] = &["winner_id", "winner"];
pub(crate) const START_KEYS: &[&str] = &[
    "participation_start",
    "participation_start_date",
    "start_date",
];
pub(crate) const END_KEYS: &[&str] = &[
    "participation_end",
    "participation_end_date",
    "end_date",
];
pub(crate) const SCHEDULED_KEYS: &[&str] = &["scheduled_date", "draw_date", "scheduled_at"];
pub(crate) const PARTICIPANTS_KEYS: &[&str] = &[
    "participants_count",
    "participant_count",
    "total_participants",
];
pub(crate) const TITLE_KEYS: &[&str] = &["title", "name"];
pub(crate) const IMAGE_KEYS: &[&str] = &["image_url", "image", "cover_image", "banner", "thumbnail"];
pub(crate) const ID_KEYS: &[&str] = &["id", "pk"];

pub(crate) const IS_WINNER_KEYS: &[&str] = &["is_winner", "won", "is_won"];
pub(crate) const PARTICIPATION_STATUS_KEYS: &[&str] = &["roulette_status", "raffle_status"];
pub(crate) const EMBEDDED_RAFFLE_KEYS: &[&str] = &["roulette", "raffle"];
pub(crate) const CREATED_AT_KEYS: &[&str] = &["created_at", "submitted_at"];

/// The subset of a raffle record consumed by lifecycle resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct RaffleSnapshot {
    pub id: Option<String>,
    pub status: Option<RaffleStatus>,
    /// True when `is_drawn` or `winner_id` is truthy, or `drawn_at` holds a
    /// parseable timestamp.
    pub is_drawn: bool,
    pub drawn_at: Option<OffsetDateTime>,
    pub participation_start: Option<OffsetDateTime>,
    pub participation_end: Option<OffsetDateTime>,
    /// Informational only; does not gate participation.
    pub scheduled_date: Option<OffsetDateTime>,
    pub participants_count: Option<u64>,
    pub title: Option<String>,
    pub image_url: Option<String>,
}

impl RaffleSnapshot {
    /// Builds a snapshot from any JSON value.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let is_drawn = first_truthy(value, IS_DRAWN_KEYS)
            || first_timestamp(value, DRAWN_AT_KEYS).is_some()
            || first_truthy(value, WINNER_KEYS);

        Self {
            id: first_str(value, ID_KEYS),
            status: first_str(value, STATUS_KEYS).map(|raw| RaffleStatus::from_raw(&raw)),
            is_drawn,
            drawn_at: first_timestamp(value, DRAWN_AT_KEYS),
            participation_start: first_timestamp(value, START_KEYS),
            participation_end: first_timestamp(value, END_KEYS),
            scheduled_date: first_timestamp(value, SCHEDULED_KEYS),
            participants_count: first_count(value, PARTICIPANTS_KEYS),
            title: first_str(value, TITLE_KEYS),
            image_url: first_str(value, IMAGE_KEYS),
        }
    }

    /// Returns true when neither window boundary is known.
    #[must_use]
    pub const fn is_open_ended(&self) -> bool {
        self.participation_start.is_none() && self.participation_end.is_none()
    }

    /// Returns true when at least one participant has entered.
    ///
    /// An unknown count is treated as no entrants.
    #[must_use]
    pub fn has_entrants(&self) -> bool {
        self.participants_count.is_some_and(|count| count > 0)
    }
}

/// Lists the raffle timestamp attributes that are present in `value` but
/// could not be parsed, and therefore read as absent.
#[must_use]
pub fn malformed_timestamps(value: &Value) -> Vec<&'static str> {
    [
        ("drawn_at", DRAWN_AT_KEYS),
        ("participation_start", START_KEYS),
        ("participation_end", END_KEYS),
        ("scheduled_date", SCHEDULED_KEYS),
    ]
    .into_iter()
    .filter(|(_, keys)| {
        first_present(value, keys).is_some() && first_timestamp(value, keys).is_none()
    })
    .map(|(attribute, _)| attribute)
    .collect()
}

impl From<Value> for RaffleSnapshot {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// A single user's entry into a raffle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct ParticipationSnapshot {
    pub id: Option<String>,
    pub is_winner: bool,
    /// Flat status of the underlying raffle, used when no raffle is embedded.
    pub roulette_status: Option<RaffleStatus>,
    /// Embedded raffle snapshot, when the backend includes one.
    pub roulette: Option<RaffleSnapshot>,
    pub created_at: Option<OffsetDateTime>,
}

impl ParticipationSnapshot {
    /// Builds a snapshot from any JSON value.
    ///
    /// An embedded raffle is only recognised when it is a JSON object; a
    /// bare raffle id in the `roulette` field is ignored.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let roulette = first_object(value, EMBEDDED_RAFFLE_KEYS).map(RaffleSnapshot::from_value);

        Self {
            id: first_str(value, ID_KEYS),
            is_winner: first_truthy(value, IS_WINNER_KEYS),
            roulette_status: first_str(value, PARTICIPATION_STATUS_KEYS)
                .map(|raw| RaffleStatus::from_raw(&raw)),
            roulette,
            created_at: first_timestamp(value, CREATED_AT_KEYS),
        }
    }

    /// Title of the embedded raffle, if any.
    #[must_use]
    pub fn raffle_title(&self) -> Option<&str> {
        self.roulette.as_ref()?.title.as_deref()
    }
}

impl From<Value> for ParticipationSnapshot {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}
