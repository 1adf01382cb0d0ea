// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;
use tegata_core::application::ports::signing_key::SigningKeyProvider;
use tegata_core::application::ports::time::Clock;
use tegata_core::domain::errors::{DomainError, DomainResult};
use tegata_core::domain::grant::{Nonce, NonceStore};

pub const TEST_SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";
pub const OTHER_SECRET: &[u8] = b"fedcba9876543210fedcba9876543210";

/// Route test logs through the capture machinery. Safe to call from every
/// test; only the first initialisation wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct TestKeyProvider {
    id: String,
    secret: Vec<u8>,
}

impl TestKeyProvider {
    pub fn new(id: impl Into<String>, secret: &[u8]) -> Self {
        Self {
            id: id.into(),
            secret: secret.to_vec(),
        }
    }

    pub fn primary() -> Self {
        Self::new("primary", TEST_SECRET)
    }
}

impl SigningKeyProvider for TestKeyProvider {
    fn key_id(&self) -> &str {
        &self.id
    }

    fn secret(&self) -> &[u8] {
        &self.secret
    }
}

/// Clock pinned to a known instant, advanced explicitly by tests.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.lock().unwrap();
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// A nonce store whose backend is down. Lets tests check that store
/// failures surface as persistence errors rather than replay verdicts.
pub struct UnavailableNonceStore;

#[async_trait]
impl NonceStore for UnavailableNonceStore {
    async fn mark_used(&self, _nonce: &Nonce) -> DomainResult<()> {
        Err(DomainError::Persistence("nonce store unavailable".into()))
    }
}
