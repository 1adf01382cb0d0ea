// src/config.rs
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    signing_secret: Vec<u8>,
    signing_key_id: String,
    code_ttl: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_key_id() -> String {
    "primary".into()
}

fn default_code_ttl() -> u64 {
    600
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let secret_b64 = env::var("GRANT_SIGNING_SECRET")
            .map_err(|_| ConfigError::Missing("GRANT_SIGNING_SECRET"))?;
        let signing_secret = STANDARD.decode(secret_b64.trim()).map_err(|err| {
            ConfigError::Invalid(format!("GRANT_SIGNING_SECRET is not valid base64: {err}"))
        })?;
        if signing_secret.len() < 32 {
            return Err(ConfigError::Invalid(
                "GRANT_SIGNING_SECRET must decode to at least 32 bytes".into(),
            ));
        }

        let signing_key_id =
            env::var("GRANT_SIGNING_KEY_ID").unwrap_or_else(|_| default_key_id());

        let code_ttl_secs = env::var("CODE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(default_code_ttl);

        Ok(Self {
            signing_secret,
            signing_key_id,
            code_ttl: Duration::from_secs(code_ttl_secs),
        })
    }

    pub fn signing_secret(&self) -> &[u8] {
        &self.signing_secret
    }

    pub fn signing_key_id(&self) -> &str {
        &self.signing_key_id
    }

    /// Maximum age of an unredeemed code.
    pub fn code_ttl(&self) -> Duration {
        self.code_ttl
    }
}
