// src/application/ports/mod.rs
pub mod signing_key;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type SigningKeyProviderPort = dyn signing_key::SigningKeyProvider;
pub type ClockPort = dyn time::Clock;
