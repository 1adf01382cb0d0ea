// src/domain/grant/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::{collections::BTreeSet, fmt};
use uuid::Uuid;

/// Opaque client identifier as registered with the authorization server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("client id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ClientId> for String {
    fn from(value: ClientId) -> Self {
        value.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Callback URL stored verbatim. No normalization happens here or anywhere
/// later; redemption compares the exact bytes bound at issuance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallbackUrl(String);

impl CallbackUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("callback url cannot be empty".into()));
        }
        if !(value.starts_with("http://") || value.starts_with("https://")) {
            return Err(DomainError::Validation(
                "callback url must be an absolute http(s) url".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CallbackUrl> for String {
    fn from(value: CallbackUrl) -> Self {
        value.0
    }
}

impl fmt::Display for CallbackUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Granted scope tokens. Backed by a BTreeSet so iteration order, and with
/// it the serialized form of a code, is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScopeSet(BTreeSet<String>);

impl ScopeSet {
    pub fn new<I, S>(scopes: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for scope in scopes {
            let scope = scope.into();
            if scope.is_empty() {
                return Err(DomainError::Validation("scope token cannot be empty".into()));
            }
            if scope.contains(char::is_whitespace) {
                return Err(DomainError::Validation(
                    "scope token cannot contain whitespace".into(),
                ));
            }
            set.insert(scope);
        }
        Ok(Self(set))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.0.contains(scope)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sorted list form, used by the code payload.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

/// Identifier of the resource owner who approved the grant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceOwnerId(String);

impl ResourceOwnerId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "resource owner id cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ResourceOwnerId> for String {
    fn from(value: ResourceOwnerId) -> Self {
        value.0
    }
}

impl fmt::Display for ResourceOwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Single-use consumption token minted with the grant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nonce(String);

impl Nonce {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("nonce cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_id_rejects_empty() {
        assert!(ClientId::new("").is_err());
        assert!(ClientId::new("   ").is_err());
        assert!(ClientId::new("c1").is_ok());
    }

    #[test]
    fn callback_requires_absolute_http_url() {
        assert!(CallbackUrl::new("https://client.example/cb").is_ok());
        assert!(CallbackUrl::new("http://localhost:9999/cb").is_ok());
        assert!(CallbackUrl::new("ftp://client.example/cb").is_err());
        assert!(CallbackUrl::new("client.example/cb").is_err());
        assert!(CallbackUrl::new("").is_err());
    }

    #[test]
    fn callback_is_stored_verbatim() {
        let cb = CallbackUrl::new("https://client.example/cb/").unwrap();
        assert_eq!(cb.as_str(), "https://client.example/cb/");
    }

    #[test]
    fn scope_set_orders_and_dedupes() {
        let scope = ScopeSet::new(["write", "read", "write"]).unwrap();
        assert_eq!(scope.len(), 2);
        assert_eq!(scope.to_vec(), vec!["read".to_string(), "write".to_string()]);
        assert!(scope.contains("read"));
        assert!(!scope.contains("admin"));
    }

    #[test]
    fn scope_set_rejects_bad_tokens() {
        assert!(ScopeSet::new([""]).is_err());
        assert!(ScopeSet::new(["read write"]).is_err());
    }

    #[test]
    fn generated_nonces_are_unique() {
        assert_ne!(Nonce::generate(), Nonce::generate());
    }
}
