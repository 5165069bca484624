// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised when parsing state labels received from outside.
///
/// Resolution itself never fails; these only surface when a caller asks
/// to turn an arbitrary string back into one of the closed label sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The label is not a raffle lifecycle state.
    UnknownRaffleState(String),
    /// The label is not a participation state.
    UnknownParticipationState(String),
    /// The label is not a call-to-action.
    UnknownAction(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRaffleState(label) => write!(f, "Unknown raffle state: '{label}'"),
            Self::UnknownParticipationState(label) => {
                write!(f, "Unknown participation state: '{label}'")
            }
            Self::UnknownAction(label) => write!(f, "Unknown action: '{label}'"),
        }
    }
}

impl std::error::Error for DomainError {}
