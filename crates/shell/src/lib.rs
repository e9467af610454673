//! `syncstudy-shell` — application wiring.
//!
//! Owns the boot sequence (observability → storage → session restore →
//! route table), the navigator that consults the guard per navigation, and
//! the login flow against the external authentication service.

pub mod auth;
pub mod login;
pub mod navigator;
pub mod shell;

pub use auth::{AuthError, AuthenticationGrant, Authenticator, RestAuthenticator};
pub use login::{LoginOutcome, LoginView};
pub use navigator::{Navigation, Navigator};
pub use shell::{AppShell, ShellConfig};
