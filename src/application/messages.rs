// src/application/messages.rs
use crate::domain::grant::{CallbackUrl, ClientId, ResourceOwnerId, ScopeSet, VerificationCode};

/// The message roles channel stages know about. A stage matches the variant
/// it handles and reports "not applicable" for everything else, so the
/// runtime can keep its stage ordering decisions deterministic.
#[derive(Debug, Clone)]
pub enum ProtocolMessage {
    AuthorizationSuccess(AuthorizationSuccessResponse),
    AccessTokenRequest(AccessTokenRequest),
}

/// Outgoing message telling the client that the resource owner approved its
/// access request. Carries the originating request's binding parameters so
/// channel stages can mint without re-correlating.
///
/// `authorization_code` and `access_token` may both be populated: the
/// response type supports issuing an access token alongside the code, and
/// the code stays authoritative for the redemption leg.
#[derive(Debug, Clone)]
pub struct AuthorizationSuccessResponse {
    pub client_id: ClientId,
    pub callback: CallbackUrl,
    pub scope: ScopeSet,
    pub authorized_by: ResourceOwnerId,
    /// Opaque client state echoed back for CSRF protection.
    pub client_state: Option<String>,
    /// Wire form of the issued code, filled in by the grant stage.
    pub authorization_code: Option<String>,
    pub access_token: Option<String>,
    /// The minted grant, attached so downstream stages can consult it
    /// without re-parsing the wire code.
    pub verification_code: Option<VerificationCode>,
}

impl AuthorizationSuccessResponse {
    pub fn new(
        client_id: ClientId,
        callback: CallbackUrl,
        scope: ScopeSet,
        authorized_by: ResourceOwnerId,
    ) -> Self {
        Self {
            client_id,
            callback,
            scope,
            authorized_by,
            client_state: None,
            authorization_code: None,
            access_token: None,
            verification_code: None,
        }
    }

    pub fn with_client_state(mut self, state: impl Into<String>) -> Self {
        self.client_state = Some(state.into());
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

/// Incoming request redeeming an authorization code for an access token.
#[derive(Debug, Clone)]
pub struct AccessTokenRequest {
    pub client_id: ClientId,
    /// Callback the client claims to have used at authorization time.
    pub callback: CallbackUrl,
    /// The presented wire code.
    pub code: String,
    /// Recovered grant, populated by the code-resolution stage.
    pub verification_code: Option<VerificationCode>,
}

impl AccessTokenRequest {
    pub fn new(client_id: ClientId, callback: CallbackUrl, code: impl Into<String>) -> Self {
        Self {
            client_id,
            callback,
            code: code.into(),
            verification_code: None,
        }
    }
}
