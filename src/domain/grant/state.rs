// src/domain/grant/state.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;

/// Lifecycle of a single grant: `Approved -> Minted -> (Redeemed | Expired |
/// Replayed)`. Redeemed is terminal success; Expired and Replayed are
/// terminal failures. Nothing leaves a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantState {
    Approved,
    Minted,
    Redeemed,
    Expired,
    Replayed,
}

impl GrantState {
    pub fn as_str(self) -> &'static str {
        match self {
            GrantState::Approved => "approved",
            GrantState::Minted => "minted",
            GrantState::Redeemed => "redeemed",
            GrantState::Expired => "expired",
            GrantState::Replayed => "replayed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GrantState::Redeemed | GrantState::Expired | GrantState::Replayed
        )
    }

    fn may_advance_to(self, next: GrantState) -> bool {
        matches!(
            (self, next),
            (GrantState::Approved, GrantState::Minted)
                | (
                    GrantState::Minted,
                    GrantState::Redeemed | GrantState::Expired | GrantState::Replayed
                )
        )
    }
}

impl fmt::Display for GrantState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records the current state together with when it was entered, so terminal
/// outcomes carry their own timestamp instead of being inferred later.
#[derive(Debug, Clone)]
pub struct GrantLifecycle {
    state: GrantState,
    changed_at: DateTime<Utc>,
}

impl GrantLifecycle {
    pub fn approved(at: DateTime<Utc>) -> Self {
        Self {
            state: GrantState::Approved,
            changed_at: at,
        }
    }

    pub fn minted(at: DateTime<Utc>) -> Self {
        Self {
            state: GrantState::Minted,
            changed_at: at,
        }
    }

    pub fn state(&self) -> GrantState {
        self.state
    }

    pub fn changed_at(&self) -> DateTime<Utc> {
        self.changed_at
    }

    pub fn advance(&mut self, next: GrantState, at: DateTime<Utc>) -> DomainResult<()> {
        if !self.state.may_advance_to(next) {
            return Err(DomainError::Validation(format!(
                "illegal grant transition {} -> {next}",
                self.state
            )));
        }
        self.state = next;
        self.changed_at = at;
        Ok(())
    }
}
