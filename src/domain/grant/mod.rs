// src/domain/grant/mod.rs
pub mod codec;
pub mod entity;
pub mod state;
pub mod store;
pub mod value_objects;

pub use entity::VerificationCode;
pub use state::{GrantLifecycle, GrantState};
pub use store::NonceStore;
pub use value_objects::{CallbackUrl, ClientId, Nonce, ResourceOwnerId, ScopeSet};
