//! Static path → policy table.

use std::collections::HashMap;

use thiserror::Error;

use crate::policy::RouteAccessPolicy;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    #[error("route registered twice: {0}")]
    DuplicateRoute(String),
}

/// Immutable route table built once at application start.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, RouteAccessPolicy>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    pub fn policy_for(&self, path: &str) -> Result<RouteAccessPolicy, RouteError> {
        self.routes
            .get(path)
            .copied()
            .ok_or_else(|| RouteError::UnknownRoute(path.to_string()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: HashMap<String, RouteAccessPolicy>,
    duplicate: Option<String>,
}

impl RouteTableBuilder {
    pub fn route(mut self, path: impl Into<String>, policy: RouteAccessPolicy) -> Self {
        let path = path.into();
        if self.routes.insert(path.clone(), policy).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(path);
        }
        self
    }

    pub fn build(self) -> Result<RouteTable, RouteError> {
        if let Some(path) = self.duplicate {
            return Err(RouteError::DuplicateRoute(path));
        }
        Ok(RouteTable {
            routes: self.routes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_registered_policy() {
        let table = RouteTable::builder()
            .route("/auth/login", RouteAccessPolicy::Public)
            .route("/home", RouteAccessPolicy::Authenticated)
            .route("/admin/organizations", RouteAccessPolicy::AdminOnly)
            .build()
            .unwrap();

        assert_eq!(
            table.policy_for("/home").unwrap(),
            RouteAccessPolicy::Authenticated
        );
        assert_eq!(
            table.policy_for("/admin/organizations").unwrap(),
            RouteAccessPolicy::AdminOnly
        );
    }

    #[test]
    fn unknown_path_is_a_modeled_error() {
        let table = RouteTable::builder()
            .route("/home", RouteAccessPolicy::Authenticated)
            .build()
            .unwrap();

        assert_eq!(
            table.policy_for("/nope"),
            Err(RouteError::UnknownRoute("/nope".to_string()))
        );
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let result = RouteTable::builder()
            .route("/home", RouteAccessPolicy::Authenticated)
            .route("/home", RouteAccessPolicy::Public)
            .build();

        assert_eq!(
            result.unwrap_err(),
            RouteError::DuplicateRoute("/home".to_string())
        );
    }
}
