// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// The crypto/replay variants deliberately carry no payload so a caller
/// cannot learn which embedded field failed verification.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("malformed verification code")]
    MalformedCode,
    #[error("verification code signature mismatch")]
    InvalidSignature,
    #[error("callback does not match the one bound at issuance")]
    CallbackMismatch,
    #[error("verification code already redeemed")]
    ReplayDetected,
    #[error("verification code expired")]
    Expired,
}
