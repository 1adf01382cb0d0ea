// tests/support/builders.rs
use tegata_core::application::messages::{
    AccessTokenRequest, AuthorizationSuccessResponse, ProtocolMessage,
};
use tegata_core::domain::grant::{CallbackUrl, ClientId, ResourceOwnerId, ScopeSet};

pub const CLIENT_ID: &str = "c1";
pub const CALLBACK: &str = "https://client.example/cb";
pub const USER: &str = "alice";

pub fn client_id() -> ClientId {
    ClientId::new(CLIENT_ID).unwrap()
}

pub fn callback() -> CallbackUrl {
    CallbackUrl::new(CALLBACK).unwrap()
}

pub fn scope() -> ScopeSet {
    ScopeSet::new(["read"]).unwrap()
}

pub fn resource_owner() -> ResourceOwnerId {
    ResourceOwnerId::new(USER).unwrap()
}

pub fn success_response() -> ProtocolMessage {
    ProtocolMessage::AuthorizationSuccess(AuthorizationSuccessResponse::new(
        client_id(),
        callback(),
        scope(),
        resource_owner(),
    ))
}

pub fn token_request(code: impl Into<String>) -> ProtocolMessage {
    ProtocolMessage::AccessTokenRequest(AccessTokenRequest::new(client_id(), callback(), code))
}

pub fn token_request_with_callback(
    presented_callback: &str,
    code: impl Into<String>,
) -> ProtocolMessage {
    ProtocolMessage::AccessTokenRequest(AccessTokenRequest::new(
        client_id(),
        CallbackUrl::new(presented_callback).unwrap(),
        code,
    ))
}
