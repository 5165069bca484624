// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ParticipationSnapshot, RaffleSnapshot};
use serde_json::Value;
use time::OffsetDateTime;
use time::macros::datetime;

/// The evaluation instant used throughout the scenario tests.
pub const fn test_now() -> OffsetDateTime {
    datetime!(2025-01-01 0:00 UTC)
}

pub fn raffle(value: &Value) -> RaffleSnapshot {
    RaffleSnapshot::from_value(value)
}

pub fn participation(value: &Value) -> ParticipationSnapshot {
    ParticipationSnapshot::from_value(value)
}
