// src/application/channel/code_resolution.rs
use crate::application::ApplicationResult;
use crate::application::channel::{BindingElement, MessageProtections};
use crate::application::messages::ProtocolMessage;
use crate::application::ports::SigningKeyProviderPort;
use crate::domain::errors::DomainError;
use crate::domain::grant::VerificationCode;
use async_trait::async_trait;
use std::sync::Arc;

/// Recovers the grant entity from the presented wire code on incoming
/// redemption requests, so later stages can validate the binding without
/// re-parsing. Runs before the grant stage in the channel stack.
pub struct CodeResolutionBindingElement {
    signing_key: Arc<SigningKeyProviderPort>,
}

impl CodeResolutionBindingElement {
    pub fn new(signing_key: Arc<SigningKeyProviderPort>) -> Self {
        Self { signing_key }
    }
}

#[async_trait]
impl BindingElement for CodeResolutionBindingElement {
    fn protection(&self) -> MessageProtections {
        MessageProtections::TamperProtection
    }

    async fn process_outgoing(
        &self,
        _message: &mut ProtocolMessage,
    ) -> ApplicationResult<Option<MessageProtections>> {
        // The grant stage serializes at mint time; nothing to do here.
        Ok(None)
    }

    async fn process_incoming(
        &self,
        message: &mut ProtocolMessage,
    ) -> ApplicationResult<Option<MessageProtections>> {
        let request = match message {
            ProtocolMessage::AccessTokenRequest(request) => request,
            ProtocolMessage::AuthorizationSuccess(_) => return Ok(None),
        };

        // An empty code field is always invalid, never "no code issued".
        if request.code.is_empty() {
            tracing::warn!(client_id = %request.client_id, "redemption request carried an empty code");
            return Err(DomainError::MalformedCode.into());
        }

        let code = VerificationCode::deserialize_and_authenticate(
            &request.code,
            self.signing_key.secret(),
        )
        .map_err(|err| {
            tracing::warn!(
                client_id = %request.client_id,
                cause = %err,
                "could not authenticate presented code"
            );
            err
        })?;

        tracing::debug!(
            client_id = %request.client_id,
            key_id = code.key_id(),
            "resolved verification code"
        );
        request.verification_code = Some(code);

        Ok(Some(MessageProtections::TamperProtection))
    }
}
