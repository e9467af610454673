//! The navigation guard.

use syncstudy_session::Session;

use crate::policy::RouteAccessPolicy;

/// Where denied navigations are sent.
///
/// Both denial reasons redirect here; the reason is still carried on the
/// decision so a view layer can say "please log in" vs "insufficient
/// permission" instead of a bare redirect.
pub const LOGIN_ROUTE: &str = "/auth/login";

/// Why a navigation was denied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DenialReason {
    /// No principal is logged in.
    NotAuthenticated,
    /// A principal is logged in but lacks the required capability.
    InsufficientRole,
}

/// Outcome of evaluating a route's policy against the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny {
        reason: DenialReason,
        redirect_to: &'static str,
    },
}

impl Decision {
    fn deny(reason: DenialReason) -> Self {
        Decision::Deny {
            reason,
            redirect_to: LOGIN_ROUTE,
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Gate a navigation.
///
/// Pure and synchronous: no I/O, no suspension. `AdminOnly` requires the
/// super-admin capability specifically; an ADMIN role alone is denied.
pub fn authorize(policy: RouteAccessPolicy, session: &Session) -> Decision {
    match policy {
        RouteAccessPolicy::Public => Decision::Allow,
        RouteAccessPolicy::Authenticated => {
            if session.is_authenticated() {
                Decision::Allow
            } else {
                Decision::deny(DenialReason::NotAuthenticated)
            }
        }
        RouteAccessPolicy::AdminOnly => {
            if !session.is_authenticated() {
                Decision::deny(DenialReason::NotAuthenticated)
            } else if session.is_super_admin() {
                Decision::Allow
            } else {
                Decision::deny(DenialReason::InsufficientRole)
            }
        }
    }
}
