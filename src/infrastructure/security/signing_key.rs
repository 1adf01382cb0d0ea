// src/infrastructure/security/signing_key.rs
use crate::application::error::ApplicationError;
use crate::application::ports::signing_key::SigningKeyProvider;
use std::sync::Arc;

/// Key provider holding a single static secret, typically decoded from
/// configuration at startup.
#[derive(Clone)]
pub struct StaticSigningKeyProvider {
    key_id: String,
    secret: Vec<u8>,
}

impl StaticSigningKeyProvider {
    pub fn new(key_id: impl Into<String>, secret: Vec<u8>) -> Result<Self, ApplicationError> {
        if secret.is_empty() {
            return Err(ApplicationError::validation("signing secret cannot be empty"));
        }
        Ok(Self {
            key_id: key_id.into(),
            secret,
        })
    }
}

impl SigningKeyProvider for StaticSigningKeyProvider {
    fn key_id(&self) -> &str {
        &self.key_id
    }

    fn secret(&self) -> &[u8] {
        &self.secret
    }
}

pub fn into_arc(provider: StaticSigningKeyProvider) -> Arc<dyn SigningKeyProvider> {
    Arc::new(provider)
}
