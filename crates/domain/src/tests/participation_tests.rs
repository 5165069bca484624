// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ParticipationState, ParticipationTally, resolve_participation_state, tally_participations,
};
use serde_json::json;

use super::helpers::{participation, test_now};

#[test]
fn test_winner_beats_cancelled_raffle() {
    let snapshot = participation(&json!({ "is_winner": true, "roulette_status": "cancelled" }));
    assert_eq!(
        resolve_participation_state(&snapshot, test_now()),
        ParticipationState::Won
    );
}

#[test]
fn test_winner_is_sticky_over_embedded_raffle() {
    let embedded = vec![
        json!({ "status": "cancelled" }),
        json!({ "is_drawn": true }),
        json!({ "participation_start": "2099-01-01T00:00:00Z" }),
        json!({}),
    ];

    for raffle in embedded {
        let snapshot = participation(&json!({ "is_winner": true, "roulette": raffle }));
        assert_eq!(
            resolve_participation_state(&snapshot, test_now()),
            ParticipationState::Won
        );
    }
}

#[test]
fn test_flat_status_mapping() {
    let cases = vec![
        ("active", ParticipationState::Active),
        ("scheduled", ParticipationState::Active),
        ("completed", ParticipationState::Completed),
        ("cancelled", ParticipationState::Completed),
        ("draft", ParticipationState::Completed),
        ("unknown", ParticipationState::Completed),
    ];

    for (status, expected) in cases {
        let snapshot = participation(&json!({ "roulette_status": status }));
        assert_eq!(
            resolve_participation_state(&snapshot, test_now()),
            expected,
            "roulette_status {status}"
        );
    }
}

#[test]
fn test_missing_status_is_completed() {
    let snapshot = participation(&json!({}));
    assert_eq!(
        resolve_participation_state(&snapshot, test_now()),
        ParticipationState::Completed
    );
}

#[test]
fn test_embedded_raffle_takes_precedence_over_flat_status() {
    let snapshot = participation(&json!({
        "roulette_status": "active",
        "roulette": { "participation_end": "2020-01-01T00:00:00Z" },
    }));
    assert_eq!(
        resolve_participation_state(&snapshot, test_now()),
        ParticipationState::Completed
    );
}

#[test]
fn test_embedded_raffle_states_map_onto_participation() {
    let cases = vec![
        (json!({}), ParticipationState::Active),
        (
            json!({ "participation_start": "2099-01-01T00:00:00Z" }),
            ParticipationState::Active,
        ),
        (
            json!({ "participation_end": "2020-01-01T00:00:00Z" }),
            ParticipationState::Completed,
        ),
        (json!({ "winner_id": 9 }), ParticipationState::Completed),
        (json!({ "status": "cancelled" }), ParticipationState::Completed),
        (json!({ "status": "draft" }), ParticipationState::Completed),
    ];

    for (raffle, expected) in cases {
        let snapshot = participation(&json!({ "roulette": raffle }));
        assert_eq!(resolve_participation_state(&snapshot, test_now()), expected);
    }
}

#[test]
fn test_raffle_id_instead_of_embed_uses_flat_status() {
    let snapshot = participation(&json!({ "roulette": 12, "roulette_status": "scheduled" }));
    assert!(snapshot.roulette.is_none());
    assert_eq!(
        resolve_participation_state(&snapshot, test_now()),
        ParticipationState::Active
    );
}

#[test]
fn test_tally_counts_each_state() {
    let participations = vec![
        participation(&json!({ "is_winner": true })),
        participation(&json!({ "roulette_status": "active" })),
        participation(&json!({ "roulette_status": "scheduled" })),
        participation(&json!({ "roulette_status": "completed" })),
        participation(&json!({})),
    ];

    let tally = tally_participations(&participations, test_now());
    assert_eq!(
        tally,
        ParticipationTally {
            won: 1,
            active: 2,
            completed: 2,
        }
    );
    assert_eq!(tally.total(), 5);
}

#[test]
fn test_tally_of_nothing_is_zero() {
    let tally = tally_participations(&[], test_now());
    assert_eq!(tally.total(), 0);
}

#[test]
fn test_own_status_is_not_raffle_status() {
    let snapshot = participation(&json!({ "status": "active" }));
    assert_eq!(snapshot.roulette_status, None);
    assert_eq!(
        resolve_participation_state(&snapshot, test_now()),
        ParticipationState::Completed
    );
}

#[test]
fn test_matches_filter() {
    assert!(ParticipationState::Won.matches_filter(None));
    assert!(ParticipationState::Won.matches_filter(Some(ParticipationState::Won)));
    assert!(!ParticipationState::Won.matches_filter(Some(ParticipationState::Active)));
}
