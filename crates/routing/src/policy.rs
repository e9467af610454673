//! Per-route access policy.

use serde::{Deserialize, Serialize};

/// Minimum capability required to view a route.
///
/// Declared once at route-registration time and immutable for the lifetime
/// of the process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteAccessPolicy {
    /// Anyone, logged in or not.
    Public,
    /// Any authenticated principal.
    Authenticated,
    /// Super-admin capability required. Deliberately tighter than
    /// `is_admin`: a plain ADMIN role is not sufficient.
    AdminOnly,
}

impl core::fmt::Display for RouteAccessPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RouteAccessPolicy::Public => f.write_str("public"),
            RouteAccessPolicy::Authenticated => f.write_str("authenticated"),
            RouteAccessPolicy::AdminOnly => f.write_str("admin_only"),
        }
    }
}
