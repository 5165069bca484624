// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use serde_json::{Value, json};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{GatewayConfig, TokenStore};

pub const fn test_now() -> OffsetDateTime {
    datetime!(2025-01-01 0:00 UTC)
}

pub fn create_test_config() -> GatewayConfig {
    GatewayConfig::new("https://api.example.com/api/").unwrap()
}

pub fn create_authenticated_store() -> TokenStore {
    let mut tokens = TokenStore::new();
    tokens.set_tokens("access-abc", Some("refresh-xyz"));
    tokens
}

/// A paginated raffle list covering every lifecycle state.
pub fn create_raffle_page() -> Value {
    json!({
        "count": 6,
        "next": null,
        "previous": null,
        "results": [
            { "id": 1, "title": "Drawn", "is_drawn": true, "winner_id": 55 },
            { "id": 2, "title": "Cancelled", "status": "cancelled" },
            { "id": 3, "title": "Closed", "participation_end": "2024-12-31T00:00:00Z" },
            {
                "id": 4,
                "title": "Open",
                "participation_start": "2024-12-01T00:00:00Z",
                "participation_end": "2025-01-15T00:00:00Z",
                "participants_count": 3,
                "image": "/media/open.png",
            },
            { "id": 5, "title": "Soon", "participation_start": "2025-02-01T00:00:00Z" },
            { "id": 6, "title": "Draft", "status": "draft" },
        ],
    })
}
