// src/infrastructure/security/nonce_store.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::grant::store::NonceStore;
use crate::domain::grant::value_objects::Nonce;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Process-local replay ledger. Insertion happens under a single lock, so
/// two concurrent redemptions of the same nonce cannot both win.
#[derive(Default)]
pub struct InMemoryNonceStore {
    used: Mutex<HashSet<String>>,
}

impl InMemoryNonceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NonceStore for InMemoryNonceStore {
    async fn mark_used(&self, nonce: &Nonce) -> DomainResult<()> {
        let mut guard = self.used.lock().unwrap();
        if guard.insert(nonce.as_str().to_string()) {
            Ok(())
        } else {
            Err(DomainError::ReplayDetected)
        }
    }
}

pub fn into_arc(store: InMemoryNonceStore) -> Arc<dyn NonceStore> {
    Arc::new(store)
}
