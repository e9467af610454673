//! Opaque bearer credential.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Bearer token issued by the authentication service.
///
/// The client never decodes it; it is stored, attached to outgoing requests
/// and discarded on logout. Non-emptiness is the only enforced invariant.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Result<Self, SessionError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(SessionError::validation("AuthToken must be non-empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value for the authorized HTTP client.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Redact the credential from debug/log output.
impl core::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

impl FromStr for AuthToken {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
