// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;

use roulette_domain::{Action, ParticipationState, ParticipationTally, RaffleState};
use serde_json::json;

use crate::{
    ParticipationView, RaffleView, decode_list, resolve_participation_views, resolve_raffle_views,
};

use super::helpers::{create_raffle_page, test_now};

#[test]
fn test_decode_list_shapes() {
    assert_eq!(decode_list(&json!([1, 2])).len(), 2);
    assert_eq!(decode_list(&json!({ "results": [1] })).len(), 1);
    assert_eq!(decode_list(&json!({ "data": [1, 2, 3] })).len(), 3);
    assert_eq!(decode_list(&json!({ "items": [] })).len(), 0);
    assert!(decode_list(&json!({ "results": "nope" })).is_empty());
    assert!(decode_list(&json!("text")).is_empty());
}

#[test]
fn test_raffle_page_resolves_every_state() {
    let response = resolve_raffle_views(&create_raffle_page(), test_now(), &HashSet::new());

    let states: Vec<RaffleState> = response.raffles.iter().map(|view| view.state).collect();
    assert_eq!(
        states,
        vec![
            RaffleState::Completed,
            RaffleState::Cancelled,
            RaffleState::WaitingDraw,
            RaffleState::Active,
            RaffleState::Scheduled,
            RaffleState::Draft,
        ]
    );
    assert_eq!(
        response.evaluated_at.as_deref(),
        Some("2025-01-01T00:00:00Z")
    );
}

#[test]
fn test_open_raffle_view() {
    let response = resolve_raffle_views(&create_raffle_page(), test_now(), &HashSet::new());
    let open = &response.raffles[3];

    assert_eq!(open.id.as_deref(), Some("4"));
    assert_eq!(open.title.as_deref(), Some("Open"));
    assert_eq!(open.image_url.as_deref(), Some("/media/open.png"));
    assert_eq!(open.action.action, Action::Participate);
    assert!(open.action.enabled);
    assert!(open.has_entrants);
    assert_eq!(open.participants_count, Some(3));
    assert_eq!(open.next_boundary.as_deref(), Some("2025-01-15T00:00:00Z"));
}

#[test]
fn test_participating_ids_disable_participation() {
    let participating: HashSet<String> = HashSet::from([String::from("4"), String::from("5")]);
    let response = resolve_raffle_views(&create_raffle_page(), test_now(), &participating);

    assert_eq!(response.raffles[3].action.action, Action::AlreadyParticipating);
    assert!(!response.raffles[3].action.enabled);
    // Participation only changes the action of an active raffle.
    assert_eq!(response.raffles[4].action.action, Action::Upcoming);
}

#[test]
fn test_raffle_view_from_value_tolerates_garbage() {
    let view = RaffleView::from_value(
        &json!({ "participation_end": "whenever", "participants_count": "many" }),
        test_now(),
        false,
    );
    assert_eq!(view.state, RaffleState::Active);
    assert_eq!(view.participants_count, None);
    assert!(!view.has_entrants);
    assert_eq!(view.next_boundary, None);
}

#[test]
fn test_raffle_view_serializes_labels() {
    let value = json!({ "id": "r-1", "status": "cancelled" });
    let view = RaffleView::from_value(&value, test_now(), false);
    let encoded = serde_json::to_value(&view).unwrap();
    assert_eq!(encoded["state"], json!("cancelled"));
    assert_eq!(encoded["action"], json!({ "action": "cancelled", "enabled": false }));
}

#[test]
fn test_participation_view() {
    let view = ParticipationView::from_value(
        &json!({
            "id": 31,
            "is_winner": false,
            "roulette": { "title": "Spring Draw", "participation_start": "2025-03-01" },
            "created_at": "2024-12-20 08:15:00+00:00",
        }),
        test_now(),
    );

    assert_eq!(view.id.as_deref(), Some("31"));
    assert_eq!(view.state, ParticipationState::Active);
    assert_eq!(view.raffle_title.as_deref(), Some("Spring Draw"));
    assert_eq!(view.created_at.as_deref(), Some("2024-12-20T08:15:00Z"));
}

#[test]
fn test_participation_list_with_filter() {
    let list = json!({
        "results": [
            { "id": 1, "is_winner": true, "roulette_status": "cancelled" },
            { "id": 2, "roulette_status": "active" },
            { "id": 3, "roulette_status": "completed" },
            { "id": 4, "roulette_status": "scheduled" },
        ],
    });

    let active = Some(ParticipationState::Active);
    let response = resolve_participation_views(&list, test_now(), active);
    assert_eq!(
        response.tally,
        ParticipationTally {
            won: 1,
            active: 2,
            completed: 1,
        }
    );
    let ids: Vec<&str> = response
        .participations
        .iter()
        .filter_map(|view| view.id.as_deref())
        .collect();
    assert_eq!(ids, vec!["2", "4"]);

    let all = resolve_participation_views(&list, test_now(), None);
    assert_eq!(all.participations.len(), 4);
    assert_eq!(all.participations[0].state, ParticipationState::Won);
}
