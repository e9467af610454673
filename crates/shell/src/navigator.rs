//! Per-navigation guard evaluation.

use std::sync::Arc;

use syncstudy_routing::{authorize, Decision, DenialReason, RouteError, RouteTable};
use syncstudy_session::SessionStore;

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Render the requested view.
    Render { path: String },
    /// Send the user to `to` instead. The reason lets a view layer show
    /// "please log in" vs "insufficient permission"; the observed UX shows
    /// neither and just redirects.
    Redirect {
        to: &'static str,
        reason: DenialReason,
    },
}

pub struct Navigator {
    table: RouteTable,
    session: Arc<SessionStore>,
}

impl Navigator {
    pub fn new(table: RouteTable, session: Arc<SessionStore>) -> Self {
        Self { table, session }
    }

    /// Evaluate a navigation against the route's declared policy and the
    /// current session.
    pub fn navigate(&self, path: &str) -> Result<Navigation, RouteError> {
        let policy = self.table.policy_for(path)?;
        let session = self.session.current();

        match authorize(policy, &session) {
            Decision::Allow => Ok(Navigation::Render {
                path: path.to_string(),
            }),
            Decision::Deny { reason, redirect_to } => {
                tracing::info!(path, %policy, ?reason, "navigation denied");
                Ok(Navigation::Redirect {
                    to: redirect_to,
                    reason,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syncstudy_core::{AuthToken, PrincipalId};
    use syncstudy_routing::RouteAccessPolicy;
    use syncstudy_session::{Role, RoleSet};
    use syncstudy_storage::InMemoryStore;

    fn navigator() -> (Navigator, Arc<SessionStore>) {
        let session = Arc::new(SessionStore::new(Arc::new(InMemoryStore::new())));
        let table = RouteTable::builder()
            .route("/auth/login", RouteAccessPolicy::Public)
            .route("/home", RouteAccessPolicy::Authenticated)
            .route("/admin/organizations", RouteAccessPolicy::AdminOnly)
            .build()
            .unwrap();
        (Navigator::new(table, session.clone()), session)
    }

    fn login(session: &SessionStore, roles: RoleSet) {
        session.login(
            AuthToken::new("t").unwrap(),
            None,
            PrincipalId::new("1").unwrap(),
            roles,
        );
    }

    #[test]
    fn anonymous_user_is_redirected_from_guarded_routes() {
        let (navigator, _session) = navigator();

        assert_eq!(
            navigator.navigate("/home").unwrap(),
            Navigation::Redirect {
                to: "/auth/login",
                reason: DenialReason::NotAuthenticated,
            }
        );
        assert_eq!(
            navigator.navigate("/auth/login").unwrap(),
            Navigation::Render {
                path: "/auth/login".to_string()
            }
        );
    }

    #[test]
    fn admin_role_is_insufficient_for_admin_routes() {
        let (navigator, session) = navigator();
        login(&session, RoleSet::new([Role::Admin]));

        assert!(matches!(
            navigator.navigate("/home").unwrap(),
            Navigation::Render { .. }
        ));
        assert_eq!(
            navigator.navigate("/admin/organizations").unwrap(),
            Navigation::Redirect {
                to: "/auth/login",
                reason: DenialReason::InsufficientRole,
            }
        );
    }

    #[test]
    fn unknown_route_surfaces_as_error() {
        let (navigator, _session) = navigator();
        assert!(matches!(
            navigator.navigate("/no-such-route"),
            Err(RouteError::UnknownRoute(_))
        ));
    }
}
