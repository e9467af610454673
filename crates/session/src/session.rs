//! The session value consumed by every reader.

use syncstudy_core::{AuthToken, PrincipalId};

use crate::roles::RoleSet;

/// Everything known about the logged-in principal.
///
/// Constructing this value requires a token and a principal id, so the
/// "authenticated iff both present" invariant holds by construction; a
/// half-populated authenticated session is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub token: AuthToken,
    pub principal_id: PrincipalId,
    pub display_name: Option<String>,
    pub roles: RoleSet,
}

/// Current authentication state.
///
/// `LoggedOut` is the initial state. The only transitions are
/// `login()` (out → in) and `logout()`/credential invalidation (in → out);
/// there is no intermediate "logging in" state here — in-flight request
/// state belongs to the login view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(Identity),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::LoggedOut => None,
            Session::LoggedIn(identity) => Some(identity),
        }
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.identity().map(|i| &i.token)
    }

    pub fn principal_id(&self) -> Option<&PrincipalId> {
        self.identity().map(|i| &i.principal_id)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.identity().and_then(|i| i.display_name.as_deref())
    }

    /// Granted roles; the empty set when unauthenticated.
    pub fn roles(&self) -> RoleSet {
        self.identity().map(|i| i.roles.clone()).unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.identity().is_some_and(|i| i.roles.is_admin())
    }

    pub fn is_super_admin(&self) -> bool {
        self.identity().is_some_and(|i| i.roles.is_super_admin())
    }

    /// `Authorization` header value for outgoing API calls, when logged in.
    pub fn bearer_header(&self) -> Option<String> {
        self.token().map(AuthToken::bearer)
    }
}
