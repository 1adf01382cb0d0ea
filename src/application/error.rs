// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// OAuth error code presented to the client. Every redemption failure
    /// collapses to `invalid_grant`; the precise cause stays in server logs
    /// so a caller cannot probe which check failed.
    pub fn oauth_error_code(&self) -> &'static str {
        match self {
            Self::Domain(
                DomainError::MalformedCode
                | DomainError::InvalidSignature
                | DomainError::CallbackMismatch
                | DomainError::ReplayDetected
                | DomainError::Expired,
            ) => "invalid_grant",
            Self::Domain(DomainError::Validation(_)) | Self::Validation(_) => "invalid_request",
            Self::Domain(DomainError::Persistence(_)) | Self::Infrastructure(_) => "server_error",
        }
    }
}
