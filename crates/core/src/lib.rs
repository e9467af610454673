//! `syncstudy-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage or transport
//! concerns): the opaque credential and identity newtypes the session layer
//! is built from, plus the domain error model.

pub mod credential;
pub mod error;
pub mod id;

pub use credential::AuthToken;
pub use error::{SessionError, SessionResult};
pub use id::PrincipalId;
