// src/domain/grant/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::grant::state::{GrantLifecycle, GrantState};
use crate::domain::grant::store::NonceStore;
use crate::domain::grant::value_objects::{
    CallbackUrl, ClientId, Nonce, ResourceOwnerId, ScopeSet,
};
use chrono::{DateTime, Duration, Utc};

/// One issued authorization grant, bound to the exact parameters of the
/// approval that created it. Immutable once minted: verification fails on a
/// mismatch, it never rebinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode {
    client_id: ClientId,
    callback: CallbackUrl,
    scope: ScopeSet,
    authorized_by: ResourceOwnerId,
    issued_at: DateTime<Utc>,
    key_id: String,
    nonce: Nonce,
}

impl VerificationCode {
    /// Bind a fresh grant to the given approval parameters. Pure
    /// construction: nothing is stored or sent anywhere. `issued_at` is
    /// truncated to whole seconds so the serialized form round-trips
    /// byte-identically.
    pub fn mint(
        key_id: impl Into<String>,
        client_id: ClientId,
        callback: CallbackUrl,
        scope: ScopeSet,
        authorized_by: ResourceOwnerId,
        now: DateTime<Utc>,
    ) -> Self {
        let issued_at = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);
        Self {
            client_id,
            callback,
            scope,
            authorized_by,
            issued_at,
            key_id: key_id.into(),
            nonce: Nonce::generate(),
        }
    }

    /// Reassemble an already-authenticated code. Codec use only.
    pub(crate) fn from_parts(
        client_id: ClientId,
        callback: CallbackUrl,
        scope: ScopeSet,
        authorized_by: ResourceOwnerId,
        issued_at: DateTime<Utc>,
        key_id: String,
        nonce: Nonce,
    ) -> Self {
        Self {
            client_id,
            callback,
            scope,
            authorized_by,
            issued_at,
            key_id,
            nonce,
        }
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn callback(&self) -> &CallbackUrl {
        &self.callback
    }

    pub fn scope(&self) -> &ScopeSet {
        &self.scope
    }

    pub fn authorized_by(&self) -> &ResourceOwnerId {
        &self.authorized_by
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// Exact comparison against the callback bound at mint time. A
    /// trailing-slash or case variant is a mismatch.
    pub fn verify_callback(&self, presented: &CallbackUrl) -> DomainResult<()> {
        if self.callback == *presented {
            Ok(())
        } else {
            Err(DomainError::CallbackMismatch)
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now.signed_duration_since(self.issued_at) > max_age
    }

    /// Mark the grant's nonce as consumed. An already-consumed nonce is a
    /// protocol violation, not a retryable condition.
    pub async fn consume(&self, store: &dyn NonceStore) -> DomainResult<()> {
        store.mark_used(&self.nonce).await
    }

    /// The full redemption transition: expiry check, callback binding, then
    /// atomic nonce consumption. Returns the terminal lifecycle record on
    /// success; every failure aborts the whole token-issuance attempt.
    pub async fn redeem(
        &self,
        presented_callback: &CallbackUrl,
        now: DateTime<Utc>,
        max_age: Duration,
        store: &dyn NonceStore,
    ) -> DomainResult<GrantLifecycle> {
        let mut lifecycle = GrantLifecycle::minted(self.issued_at);

        if self.is_expired(now, max_age) {
            lifecycle.advance(GrantState::Expired, now)?;
            return Err(DomainError::Expired);
        }

        self.verify_callback(presented_callback)?;

        match self.consume(store).await {
            Ok(()) => {
                lifecycle.advance(GrantState::Redeemed, now)?;
                Ok(lifecycle)
            }
            Err(DomainError::ReplayDetected) => {
                lifecycle.advance(GrantState::Replayed, now)?;
                Err(DomainError::ReplayDetected)
            }
            Err(other) => Err(other),
        }
    }
}
