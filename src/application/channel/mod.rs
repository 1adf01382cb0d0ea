// src/application/channel/mod.rs
pub mod authorization_grant;
pub mod code_resolution;

pub use authorization_grant::AuthorizationGrantBindingElement;
pub use code_resolution::CodeResolutionBindingElement;

use crate::application::ApplicationResult;
use crate::application::messages::ProtocolMessage;
use async_trait::async_trait;
use std::fmt;

/// Protection a channel stage can claim for a message it processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageProtections {
    None,
    TamperProtection,
    ReplayProtection,
    Expiration,
}

impl MessageProtections {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageProtections::None => "none",
            MessageProtections::TamperProtection => "tamper-protection",
            MessageProtections::ReplayProtection => "replay-protection",
            MessageProtections::Expiration => "expiration",
        }
    }
}

impl fmt::Display for MessageProtections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stage in the ordered message channel. Stages are stateless and
/// shared: the runtime may invoke the same element concurrently for
/// unrelated messages.
///
/// The return value distinguishes two outcomes the runtime must not
/// conflate: `Some(protections)` means the stage handled the message
/// (possibly applying `MessageProtections::None`); a bare `None` means the
/// message kind is not one this stage acts on at all.
#[async_trait]
pub trait BindingElement: Send + Sync {
    /// Protection commonly offered by this stage, used to sort the channel
    /// stack deterministically.
    fn protection(&self) -> MessageProtections;

    /// Decorate an outgoing message.
    async fn process_outgoing(
        &self,
        message: &mut ProtocolMessage,
    ) -> ApplicationResult<Option<MessageProtections>>;

    /// Validate or transform an incoming message. An error aborts
    /// processing of the whole message.
    async fn process_incoming(
        &self,
        message: &mut ProtocolMessage,
    ) -> ApplicationResult<Option<MessageProtections>>;
}
