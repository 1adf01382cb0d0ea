// src/domain/grant/store.rs
use crate::domain::errors::DomainResult;
use crate::domain::grant::value_objects::Nonce;
use async_trait::async_trait;

/// Replay-prevention ledger. The sole mechanism keeping a redeemed grant
/// from being redeemed again, so `mark_used` must be atomic across
/// concurrent callers: of N simultaneous attempts on one nonce exactly one
/// may succeed.
#[async_trait]
pub trait NonceStore: Send + Sync {
    /// Record the nonce as consumed. Fails with
    /// [`DomainError::ReplayDetected`](crate::domain::errors::DomainError::ReplayDetected)
    /// if it was already consumed.
    async fn mark_used(&self, nonce: &Nonce) -> DomainResult<()>;
}
