// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Response decoding and rendering views.
//!
//! Views are what rendering collaborators consume: alias-resolved display
//! fields plus lifecycle state and call-to-action, all derived from one
//! snapshot at one `now`.

use roulette_domain::{
    ActionDescriptor, ParticipationSnapshot, ParticipationState, ParticipationTally,
    RaffleSnapshot, RaffleState, format_timestamp, malformed_timestamps, next_boundary,
    resolve_action, resolve_participation_state, resolve_raffle_state, tally_participations,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use time::OffsetDateTime;
use tracing::{debug, warn};

/// Envelope keys that may wrap a list response, in priority order.
const LIST_KEYS: &[&str] = &["results", "data", "items"];

/// Extracts the item list from a list response.
///
/// Accepts a bare array or an envelope object (`results`, `data`,
/// `items`). Anything else yields an empty list.
#[must_use]
pub fn decode_list(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items.as_slice(),
        Value::Object(object) => LIST_KEYS
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or_default(),
        _ => &[],
    }
}

/// A raffle as presented to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaffleView {
    pub id: Option<String>,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub state: RaffleState,
    pub action: ActionDescriptor,
    pub participants_count: Option<u64>,
    /// Distinguishes "active with entrants" from "active but empty".
    pub has_entrants: bool,
    /// RFC 3339 instant at which the state may next change.
    pub next_boundary: Option<String>,
}

impl RaffleView {
    /// Builds a view from a parsed snapshot.
    #[must_use]
    pub fn from_snapshot(
        snapshot: &RaffleSnapshot,
        now: OffsetDateTime,
        already_participating: bool,
    ) -> Self {
        let state = resolve_raffle_state(snapshot, now);
        let action = resolve_action(state, already_participating);

        debug!(
            id = snapshot.id.as_deref().unwrap_or("-"),
            state = %state,
            action = %action.action,
            "Resolved raffle view"
        );

        Self {
            id: snapshot.id.clone(),
            title: snapshot.title.clone(),
            image_url: snapshot.image_url.clone(),
            state,
            action,
            participants_count: snapshot.participants_count,
            has_entrants: snapshot.has_entrants(),
            next_boundary: next_boundary(snapshot, now).and_then(format_timestamp),
        }
    }

    /// Builds a view from a raw backend record.
    ///
    /// Malformed timestamps are logged and treated as absent.
    #[must_use]
    pub fn from_value(value: &Value, now: OffsetDateTime, already_participating: bool) -> Self {
        let snapshot = RaffleSnapshot::from_value(value);
        report_malformed_timestamps(value, &snapshot);
        Self::from_snapshot(&snapshot, now, already_participating)
    }
}

fn report_malformed_timestamps(value: &Value, snapshot: &RaffleSnapshot) {
    for attribute in malformed_timestamps(value) {
        warn!(
            id = snapshot.id.as_deref().unwrap_or("-"),
            attribute, "Ignoring malformed raffle timestamp"
        );
    }
}

/// A participation as presented to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationView {
    pub id: Option<String>,
    pub state: ParticipationState,
    pub raffle_title: Option<String>,
    /// RFC 3339 submission time.
    pub created_at: Option<String>,
}

impl ParticipationView {
    #[must_use]
    pub fn from_snapshot(snapshot: &ParticipationSnapshot, now: OffsetDateTime) -> Self {
        let state = resolve_participation_state(snapshot, now);
        debug!(
            id = snapshot.id.as_deref().unwrap_or("-"),
            state = %state,
            "Resolved participation view"
        );

        Self {
            id: snapshot.id.clone(),
            state,
            raffle_title: snapshot.raffle_title().map(str::to_string),
            created_at: snapshot.created_at.and_then(format_timestamp),
        }
    }

    #[must_use]
    pub fn from_value(value: &Value, now: OffsetDateTime) -> Self {
        Self::from_snapshot(&ParticipationSnapshot::from_value(value), now)
    }
}

/// Resolved raffle list, all entries evaluated at the same instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaffleListResponse {
    pub evaluated_at: Option<String>,
    pub raffles: Vec<RaffleView>,
}

/// Resolves every raffle of a list response.
///
/// `participating_ids` holds the ids of raffles the current user has
/// already entered.
#[must_use]
pub fn resolve_raffle_views(
    list: &Value,
    now: OffsetDateTime,
    participating_ids: &HashSet<String>,
) -> RaffleListResponse {
    let raffles: Vec<RaffleView> = decode_list(list)
        .iter()
        .map(|value| {
            let snapshot = RaffleSnapshot::from_value(value);
            report_malformed_timestamps(value, &snapshot);
            let participating = snapshot
                .id
                .as_ref()
                .is_some_and(|id| participating_ids.contains(id));
            RaffleView::from_snapshot(&snapshot, now, participating)
        })
        .collect();

    debug!(count = raffles.len(), "Resolved raffle list");

    RaffleListResponse {
        evaluated_at: format_timestamp(now),
        raffles,
    }
}

/// Resolved participation list with per-state counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationListResponse {
    pub evaluated_at: Option<String>,
    /// Counts over the whole list, before filtering.
    pub tally: ParticipationTally,
    pub participations: Vec<ParticipationView>,
}

/// Resolves every participation of a list response.
///
/// `filter` keeps only entries in that state; the tally always covers the
/// full list.
#[must_use]
pub fn resolve_participation_views(
    list: &Value,
    now: OffsetDateTime,
    filter: Option<ParticipationState>,
) -> ParticipationListResponse {
    let snapshots: Vec<ParticipationSnapshot> = decode_list(list)
        .iter()
        .map(ParticipationSnapshot::from_value)
        .collect();

    let tally = tally_participations(&snapshots, now);
    debug!(total = tally.total(), "Resolved participation list");

    ParticipationListResponse {
        evaluated_at: format_timestamp(now),
        tally,
        participations: snapshots
            .iter()
            .map(|snapshot| ParticipationView::from_snapshot(snapshot, now))
            .filter(|view| view.state.matches_filter(filter))
            .collect(),
    }
}
