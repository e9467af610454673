//! Boot sequence and application-root wiring.

use std::path::PathBuf;
use std::sync::Arc;

use syncstudy_routing::{RouteAccessPolicy, RouteError, RouteTable};
use syncstudy_session::SessionStore;
use syncstudy_storage::{FileStore, InMemoryStore, KeyValueStore};

use crate::auth::{Authenticator, RestAuthenticator};
use crate::login::LoginView;
use crate::navigator::Navigator;

/// Shell configuration, read from the environment with dev defaults.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Base URL of the authentication/API backend.
    pub auth_url: String,
    /// Where the durable session file lives. `None` keeps the session
    /// in memory only.
    pub state_path: Option<PathBuf>,
}

impl ShellConfig {
    pub fn from_env() -> Self {
        let auth_url = std::env::var("SYNCSTUDY_AUTH_URL").unwrap_or_else(|_| {
            tracing::warn!("SYNCSTUDY_AUTH_URL not set; using dev default");
            "http://localhost:8081".to_string()
        });
        let state_path = std::env::var_os("SYNCSTUDY_STATE_PATH").map(PathBuf::from);
        Self {
            auth_url,
            state_path,
        }
    }
}

/// The application root: owns the one session store and hands it to the
/// navigator and the login view.
pub struct AppShell {
    session: Arc<SessionStore>,
    navigator: Navigator,
    login_view: LoginView,
}

impl AppShell {
    /// Boot: storage → session restore → route table. The restore completes
    /// before this returns, so the first `navigate` call never sees a
    /// stale logged-out state for a persisted session.
    pub fn boot(config: &ShellConfig) -> Result<Self, RouteError> {
        let storage: Arc<dyn KeyValueStore> = match &config.state_path {
            Some(path) => match FileStore::open(path.clone()) {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    tracing::warn!(error = %e, "durable storage unavailable; session will not survive a restart");
                    Arc::new(InMemoryStore::new())
                }
            },
            None => Arc::new(InMemoryStore::new()),
        };

        let authenticator: Arc<dyn Authenticator> =
            Arc::new(RestAuthenticator::new(config.auth_url.clone()));

        Self::assemble(storage, authenticator)
    }

    /// Wiring entry point with injected collaborators (tests use this with
    /// in-memory storage and a fake authenticator).
    pub fn assemble(
        storage: Arc<dyn KeyValueStore>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self, RouteError> {
        let session = Arc::new(SessionStore::new(storage.clone()));
        session.restore();

        let navigator = Navigator::new(default_routes()?, session.clone());
        let login_view = LoginView::new(session.clone(), storage, authenticator);

        Ok(Self {
            session,
            navigator,
            login_view,
        })
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn login_view(&self) -> &LoginView {
        &self.login_view
    }
}

/// The application's route table.
fn default_routes() -> Result<RouteTable, RouteError> {
    RouteTable::builder()
        .route("/auth/login", RouteAccessPolicy::Public)
        .route("/register", RouteAccessPolicy::Public)
        .route("/", RouteAccessPolicy::Authenticated)
        .route("/home", RouteAccessPolicy::Authenticated)
        .route("/books", RouteAccessPolicy::Authenticated)
        .route("/book/upload", RouteAccessPolicy::Authenticated)
        .route("/chat", RouteAccessPolicy::Authenticated)
        .route("/market-place", RouteAccessPolicy::Authenticated)
        .route("/cabshare", RouteAccessPolicy::Authenticated)
        .route("/user", RouteAccessPolicy::Authenticated)
        .route("/admin/organizations", RouteAccessPolicy::AdminOnly)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_route_table_builds() {
        let table = default_routes().unwrap();
        assert_eq!(table.len(), 11);
        assert_eq!(
            table.policy_for("/admin/organizations").unwrap(),
            RouteAccessPolicy::AdminOnly
        );
    }
}
