// src/application/channel/authorization_grant.rs
use crate::application::ApplicationResult;
use crate::application::channel::{BindingElement, MessageProtections};
use crate::application::messages::ProtocolMessage;
use crate::application::ports::{ClockPort, SigningKeyProviderPort};
use crate::domain::errors::DomainError;
use crate::domain::grant::{NonceStore, VerificationCode};
use async_trait::async_trait;
use chrono::Duration as ChronoDuration;
use std::sync::Arc;
use std::time::Duration;

/// Creates and verifies issued verification codes as part of obtaining
/// access tokens. On the outgoing pass it mints a grant for successful
/// authorization responses; on the incoming pass it redeems the grant
/// attached to a token request, checking expiry, callback binding, and
/// replay state.
///
/// All collaborators are injected; the element holds no mutable state of
/// its own.
pub struct AuthorizationGrantBindingElement {
    signing_key: Arc<SigningKeyProviderPort>,
    nonce_store: Arc<dyn NonceStore>,
    clock: Arc<ClockPort>,
    code_max_age: ChronoDuration,
}

impl AuthorizationGrantBindingElement {
    pub fn new(
        signing_key: Arc<SigningKeyProviderPort>,
        nonce_store: Arc<dyn NonceStore>,
        clock: Arc<ClockPort>,
        code_max_age: Duration,
    ) -> Self {
        let code_max_age = ChronoDuration::from_std(code_max_age)
            .unwrap_or_else(|_| ChronoDuration::seconds(code_max_age.as_secs() as i64));
        Self {
            signing_key,
            nonce_store,
            clock,
            code_max_age,
        }
    }
}

#[async_trait]
impl BindingElement for AuthorizationGrantBindingElement {
    /// Integrity comes from the code's own tag, not the general
    /// message-protection mechanism.
    fn protection(&self) -> MessageProtections {
        MessageProtections::None
    }

    async fn process_outgoing(
        &self,
        message: &mut ProtocolMessage,
    ) -> ApplicationResult<Option<MessageProtections>> {
        let response = match message {
            ProtocolMessage::AuthorizationSuccess(response) => response,
            ProtocolMessage::AccessTokenRequest(_) => return Ok(None),
        };

        let code = VerificationCode::mint(
            self.signing_key.key_id(),
            response.client_id.clone(),
            response.callback.clone(),
            response.scope.clone(),
            response.authorized_by.clone(),
            self.clock.now(),
        );
        let serialized = code.serialize(self.signing_key.secret())?;

        tracing::debug!(
            client_id = %code.client_id(),
            authorized_by = %code.authorized_by(),
            key_id = code.key_id(),
            "minted verification code"
        );

        response.authorization_code = Some(serialized);
        response.verification_code = Some(code);

        Ok(Some(MessageProtections::None))
    }

    async fn process_incoming(
        &self,
        message: &mut ProtocolMessage,
    ) -> ApplicationResult<Option<MessageProtections>> {
        let request = match message {
            ProtocolMessage::AccessTokenRequest(request) => request,
            ProtocolMessage::AuthorizationSuccess(_) => return Ok(None),
        };

        let Some(code) = request.verification_code.as_ref() else {
            tracing::warn!(
                client_id = %request.client_id,
                "redemption request reached the grant stage without a resolved code"
            );
            return Err(DomainError::MalformedCode.into());
        };

        let now = self.clock.now();
        match code
            .redeem(&request.callback, now, self.code_max_age, self.nonce_store.as_ref())
            .await
        {
            Ok(lifecycle) => {
                tracing::debug!(
                    client_id = %request.client_id,
                    state = %lifecycle.state(),
                    "verification code redeemed"
                );
                Ok(Some(MessageProtections::None))
            }
            Err(err) => {
                tracing::warn!(
                    client_id = %request.client_id,
                    cause = %err,
                    "rejected token redemption"
                );
                Err(err.into())
            }
        }
    }
}
