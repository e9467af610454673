//! Strongly-typed identifiers used across the session domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Identifier of an authenticated principal.
///
/// The backend issues these; the client treats them as opaque, non-empty
/// strings. No format beyond non-emptiness is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(String);

impl PrincipalId {
    pub fn new(value: impl Into<String>) -> Result<Self, SessionError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(SessionError::validation("PrincipalId must be non-empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PrincipalId {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<PrincipalId> for String {
    fn from(value: PrincipalId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_id_is_accepted() {
        let id = PrincipalId::new("42").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn empty_and_whitespace_ids_are_rejected() {
        assert!(PrincipalId::new("").is_err());
        assert!(PrincipalId::new("   ").is_err());
    }
}
