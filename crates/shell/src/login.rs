//! Login view flow: credential exchange, session mutation, redirect target.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use syncstudy_session::{AttemptRegistry, AttemptToken, FailureNotice, SessionStore};
use syncstudy_storage::KeyValueStore;

use crate::auth::{AuthError, AuthenticationGrant, Authenticator};

// The navbar persists the user's browsing mode; login lands study-mode
// users on the book list.
const KEY_MODE: &str = "mode";

/// What the view does after a submit resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session updated; navigate to the post-login destination.
    LoggedIn { destination: &'static str },
    /// Credentials rejected (or the exchange failed); session unchanged,
    /// an auto-dismissing notice is now visible.
    Rejected,
    /// The user navigated away before the response arrived; the response
    /// was discarded and the session is unchanged.
    Abandoned,
}

/// The login view's non-visual state.
///
/// In-flight request state lives here, never in the session itself. The
/// attempt registry guarantees that a response arriving after the user has
/// left the view cannot mutate the session.
pub struct LoginView {
    session: Arc<SessionStore>,
    storage: Arc<dyn KeyValueStore>,
    authenticator: Arc<dyn Authenticator>,
    attempts: AttemptRegistry,
    notice: RwLock<Option<FailureNotice>>,
}

impl LoginView {
    pub fn new(
        session: Arc<SessionStore>,
        storage: Arc<dyn KeyValueStore>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            session,
            storage,
            authenticator,
            attempts: AttemptRegistry::new(),
            notice: RwLock::new(None),
        }
    }

    /// Exchange credentials and, if still wanted, log the session in.
    pub async fn submit(&self, username: &str, password: &str) -> LoginOutcome {
        let attempt = self.begin();
        let result = self.authenticator.authenticate(username, password).await;
        self.complete(attempt, username, result)
    }

    /// Start a new attempt, superseding any earlier in-flight one.
    pub fn begin(&self) -> AttemptToken {
        self.attempts.begin()
    }

    /// Apply the result of a credential exchange for `attempt`.
    ///
    /// Stale attempts are discarded without touching the session.
    pub fn complete(
        &self,
        attempt: AttemptToken,
        username: &str,
        result: Result<AuthenticationGrant, AuthError>,
    ) -> LoginOutcome {
        if !self.attempts.is_current(attempt) {
            tracing::debug!("discarding stale authentication response");
            return LoginOutcome::Abandoned;
        }

        match result {
            Ok(grant) => {
                self.session.login(
                    grant.token,
                    Some(username.to_string()),
                    grant.principal_id,
                    grant.roles,
                );
                LoginOutcome::LoggedIn {
                    destination: self.post_login_destination(),
                }
            }
            Err(e) => {
                tracing::info!(error = %e, "login failed");
                *self.notice.write().unwrap_or_else(|p| p.into_inner()) =
                    Some(FailureNotice::raised_at(Utc::now()));
                LoginOutcome::Rejected
            }
        }
    }

    /// Called when the user navigates away from the view; any in-flight
    /// attempt becomes stale.
    pub fn leave(&self) {
        self.attempts.abandon();
    }

    /// Whether the invalid-credentials message is currently on screen.
    pub fn failure_visible(&self, now: DateTime<Utc>) -> bool {
        self.notice
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .is_some_and(|n| n.is_visible(now))
    }

    fn post_login_destination(&self) -> &'static str {
        let mode = self.storage.get(KEY_MODE).ok().flatten();
        match mode.as_deref() {
            Some("study") => "/books",
            _ => "/home",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Duration;
    use syncstudy_core::{AuthToken, PrincipalId};
    use syncstudy_session::{Role, RoleSet};
    use syncstudy_storage::InMemoryStore;

    struct FixedAuthenticator {
        result: fn() -> Result<AuthenticationGrant, AuthError>,
    }

    #[async_trait]
    impl Authenticator for FixedAuthenticator {
        async fn authenticate(
            &self,
            _username: &str,
            _password: &str,
        ) -> Result<AuthenticationGrant, AuthError> {
            (self.result)()
        }
    }

    fn grant() -> Result<AuthenticationGrant, AuthError> {
        Ok(AuthenticationGrant {
            token: AuthToken::new("jwt").unwrap(),
            principal_id: PrincipalId::new("12").unwrap(),
            roles: RoleSet::new([Role::Admin]),
        })
    }

    fn rejected() -> Result<AuthenticationGrant, AuthError> {
        Err(AuthError::Rejected)
    }

    fn view(result: fn() -> Result<AuthenticationGrant, AuthError>) -> (LoginView, Arc<SessionStore>) {
        let storage: Arc<InMemoryStore> = Arc::new(InMemoryStore::new());
        let session = Arc::new(SessionStore::new(storage.clone()));
        let view = LoginView::new(
            session.clone(),
            storage,
            Arc::new(FixedAuthenticator { result }),
        );
        (view, session)
    }

    #[tokio::test]
    async fn successful_submit_logs_the_session_in() {
        let (view, session) = view(grant);

        let outcome = view.submit("ada@example.edu", "pw").await;
        assert_eq!(outcome, LoginOutcome::LoggedIn { destination: "/home" });

        let current = session.current();
        assert!(current.is_authenticated());
        assert_eq!(current.display_name(), Some("ada@example.edu"));
        assert!(current.is_admin());
    }

    #[tokio::test]
    async fn study_mode_redirects_to_the_book_list() {
        let storage: Arc<InMemoryStore> = Arc::new(InMemoryStore::new());
        storage.set("mode", "study").unwrap();
        let session = Arc::new(SessionStore::new(storage.clone()));
        let view = LoginView::new(
            session,
            storage,
            Arc::new(FixedAuthenticator { result: grant }),
        );

        let outcome = view.submit("u", "pw").await;
        assert_eq!(outcome, LoginOutcome::LoggedIn { destination: "/books" });
    }

    #[tokio::test]
    async fn rejected_submit_leaves_session_unchanged_and_raises_notice() {
        let (view, session) = view(rejected);

        let outcome = view.submit("ada@example.edu", "wrong").await;
        assert_eq!(outcome, LoginOutcome::Rejected);
        assert!(!session.is_authenticated());

        let now = Utc::now();
        assert!(view.failure_visible(now));
        assert!(!view.failure_visible(now + Duration::seconds(4)));
    }

    #[tokio::test]
    async fn stale_response_is_discarded_after_leaving_the_view() {
        let (view, session) = view(grant);

        let attempt = view.begin();
        view.leave();

        let outcome = view.complete(attempt, "ada@example.edu", grant());
        assert_eq!(outcome, LoginOutcome::Abandoned);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn superseded_attempt_cannot_win_over_the_newer_one() {
        let (view, session) = view(grant);

        let old = view.begin();
        let new = view.begin();

        assert_eq!(view.complete(old, "old@example.edu", grant()), LoginOutcome::Abandoned);
        assert!(!session.is_authenticated());

        assert!(matches!(
            view.complete(new, "new@example.edu", grant()),
            LoginOutcome::LoggedIn { .. }
        ));
        assert_eq!(session.current().display_name(), Some("new@example.edu"));
    }
}
