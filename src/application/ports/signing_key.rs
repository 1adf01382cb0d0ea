// src/application/ports/signing_key.rs

/// Source of the server secret used to tag and verify codes. Exactly one
/// secret is current at a time; there is no multi-key fallback, so a code
/// minted under a rotated-out key simply fails verification.
pub trait SigningKeyProvider: Send + Sync {
    /// Stable identifier embedded in minted codes instead of the secret.
    fn key_id(&self) -> &str;

    fn secret(&self) -> &[u8];
}
