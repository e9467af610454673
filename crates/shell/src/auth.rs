//! Credential exchange with the external authentication service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use syncstudy_core::{AuthToken, PrincipalId};
use syncstudy_session::RoleSet;

/// Result of a successful credential exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationGrant {
    pub token: AuthToken,
    pub principal_id: PrincipalId,
    pub roles: RoleSet,
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// The service answered, but the credentials were not accepted.
    #[error("credentials rejected")]
    Rejected,

    /// The service could not be reached or answered garbage.
    #[error("authentication transport failure: {0}")]
    Transport(String),
}

/// Boundary to the authentication service.
///
/// Implementations must not touch the session; the login view decides
/// whether a response is still wanted before any state changes.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticationGrant, AuthError>;
}

#[derive(Debug, Serialize)]
struct AuthenticateRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthenticateResponse {
    token: String,
    #[serde(rename = "userId")]
    user_id: String,
    #[serde(default)]
    roles: Vec<String>,
}

/// `POST /authenticate` against the backend.
pub struct RestAuthenticator {
    base_url: String,
    client: reqwest::Client,
}

impl RestAuthenticator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Authenticator for RestAuthenticator {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticationGrant, AuthError> {
        let response = self
            .client
            .post(format!("{}/authenticate", self.base_url))
            .json(&AuthenticateRequest { username, password })
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected);
        }

        let body: AuthenticateResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let token =
            AuthToken::new(body.token).map_err(|e| AuthError::Transport(e.to_string()))?;
        let principal_id =
            PrincipalId::new(body.user_id).map_err(|e| AuthError::Transport(e.to_string()))?;

        Ok(AuthenticationGrant {
            token,
            principal_id,
            roles: RoleSet::from_tags(&body.roles),
        })
    }
}
