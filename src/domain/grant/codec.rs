// src/domain/grant/codec.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::grant::entity::VerificationCode;
use crate::domain::grant::value_objects::{
    CallbackUrl, ClientId, Nonce, ResourceOwnerId, ScopeSet,
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::DateTime;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Wire layout: `base64url(payload) "." base64url(tag)` where the tag is
/// HMAC-SHA256 over the raw payload bytes. The payload field order is fixed
/// and the scope list sorted, so the same code always serializes to the
/// same string.
#[derive(Serialize, Deserialize)]
struct CodePayload {
    client_id: String,
    callback: String,
    scope: Vec<String>,
    authorized_by: String,
    issued_at: i64,
    key_id: String,
    nonce: String,
}

fn sign(secret: &[u8], payload: &[u8]) -> DomainResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| DomainError::Validation("invalid signing secret".into()))?;
    mac.update(payload);
    Ok(mac.finalize().into_bytes().to_vec())
}

impl VerificationCode {
    /// Deterministic, tamper-evident encoding of this grant.
    pub fn serialize(&self, secret: &[u8]) -> DomainResult<String> {
        let payload = CodePayload {
            client_id: self.client_id().as_str().to_string(),
            callback: self.callback().as_str().to_string(),
            scope: self.scope().to_vec(),
            authorized_by: self.authorized_by().as_str().to_string(),
            issued_at: self.issued_at().timestamp(),
            key_id: self.key_id().to_string(),
            nonce: self.nonce().as_str().to_string(),
        };
        let raw = serde_json::to_vec(&payload)
            .map_err(|_| DomainError::Validation("could not encode code payload".into()))?;
        let tag = sign(secret, &raw)?;

        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&raw),
            URL_SAFE_NO_PAD.encode(&tag)
        ))
    }

    /// Recover a grant from its wire form, accepting it only if the tag
    /// verifies under `secret`. The tag is checked before the payload is
    /// parsed, and every failure collapses to `MalformedCode` or
    /// `InvalidSignature` so nothing leaks about which embedded field was
    /// wrong.
    pub fn deserialize_and_authenticate(raw: &str, secret: &[u8]) -> DomainResult<Self> {
        let (payload_b64, tag_b64) = raw.split_once('.').ok_or(DomainError::MalformedCode)?;
        if payload_b64.is_empty() || tag_b64.is_empty() {
            return Err(DomainError::MalformedCode);
        }

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| DomainError::MalformedCode)?;
        let tag = URL_SAFE_NO_PAD
            .decode(tag_b64)
            .map_err(|_| DomainError::MalformedCode)?;

        let mut mac = HmacSha256::new_from_slice(secret)
            .map_err(|_| DomainError::Validation("invalid signing secret".into()))?;
        mac.update(&payload);
        mac.verify_slice(&tag)
            .map_err(|_| DomainError::InvalidSignature)?;

        let parsed: CodePayload =
            serde_json::from_slice(&payload).map_err(|_| DomainError::MalformedCode)?;

        let issued_at =
            DateTime::from_timestamp(parsed.issued_at, 0).ok_or(DomainError::MalformedCode)?;
        let client_id = ClientId::new(parsed.client_id).map_err(|_| DomainError::MalformedCode)?;
        let callback = CallbackUrl::new(parsed.callback).map_err(|_| DomainError::MalformedCode)?;
        let scope = ScopeSet::new(parsed.scope).map_err(|_| DomainError::MalformedCode)?;
        let authorized_by =
            ResourceOwnerId::new(parsed.authorized_by).map_err(|_| DomainError::MalformedCode)?;
        let nonce = Nonce::new(parsed.nonce).map_err(|_| DomainError::MalformedCode)?;

        Ok(Self::from_parts(
            client_id,
            callback,
            scope,
            authorized_by,
            issued_at,
            parsed.key_id,
            nonce,
        ))
    }
}
