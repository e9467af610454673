//! `syncstudy-routing` — route access policies and the navigation guard.
//!
//! The guard is a pure decision function over the declared per-route policy
//! and the current session value. It performs no I/O and never suspends, so
//! it is safe to evaluate on every navigation.

pub mod guard;
pub mod policy;
pub mod table;

pub use guard::{authorize, Decision, DenialReason, LOGIN_ROUTE};
pub use policy::RouteAccessPolicy;
pub use table::{RouteError, RouteTable, RouteTableBuilder};
