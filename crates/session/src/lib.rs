//! `syncstudy-session` — client-side session state machine.
//!
//! Single source of truth for "who is logged in and what can they do",
//! durable across restarts via an injected key-value store. Two states:
//! logged out (initial) and logged in; `login`/`logout`/`restore` are the
//! only writers.

pub mod attempt;
pub mod roles;
pub mod session;
pub mod store;

pub use attempt::{AttemptRegistry, AttemptToken, FailureNotice};
pub use roles::{Role, RoleSet};
pub use session::{Identity, Session};
pub use store::SessionStore;
