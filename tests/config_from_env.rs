// tests/config_from_env.rs
use base64::{Engine as _, engine::general_purpose::STANDARD};
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;
use tegata_core::config::{AppConfig, ConfigError};

// from_env reads process-global environment variables, so the tests in this
// binary must not interleave.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(Mutex::default);

const VARS: [&str; 3] = [
    "GRANT_SIGNING_SECRET",
    "GRANT_SIGNING_KEY_ID",
    "CODE_TTL_SECONDS",
];

fn with_env(vars: &[(&str, &str)], f: impl FnOnce()) {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    for name in VARS {
        unsafe { env::remove_var(name) };
    }
    for (name, value) in vars {
        unsafe { env::set_var(name, value) };
    }
    f();
    for name in VARS {
        unsafe { env::remove_var(name) };
    }
}

fn valid_secret() -> String {
    STANDARD.encode([7u8; 32])
}

#[test]
fn missing_secret_is_reported() {
    with_env(&[], || {
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::Missing("GRANT_SIGNING_SECRET"))
        ));
    });
}

#[test]
fn secret_must_be_base64() {
    with_env(&[("GRANT_SIGNING_SECRET", "not base64!!!")], || {
        assert!(matches!(AppConfig::from_env(), Err(ConfigError::Invalid(_))));
    });
}

#[test]
fn secret_must_decode_to_at_least_32_bytes() {
    let short = STANDARD.encode([7u8; 16]);
    with_env(&[("GRANT_SIGNING_SECRET", short.as_str())], || {
        assert!(matches!(AppConfig::from_env(), Err(ConfigError::Invalid(_))));
    });
}

#[test]
fn defaults_apply_when_optionals_are_unset() {
    let secret = valid_secret();
    with_env(&[("GRANT_SIGNING_SECRET", secret.as_str())], || {
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.signing_secret(), [7u8; 32].as_slice());
        assert_eq!(config.signing_key_id(), "primary");
        assert_eq!(config.code_ttl().as_secs(), 600);
    });
}

#[test]
fn optional_overrides_are_honoured() {
    let secret = valid_secret();
    with_env(
        &[
            ("GRANT_SIGNING_SECRET", secret.as_str()),
            ("GRANT_SIGNING_KEY_ID", "2026-rotation"),
            ("CODE_TTL_SECONDS", "90"),
        ],
        || {
            let config = AppConfig::from_env().unwrap();
            assert_eq!(config.signing_key_id(), "2026-rotation");
            assert_eq!(config.code_ttl().as_secs(), 90);
        },
    );
}
