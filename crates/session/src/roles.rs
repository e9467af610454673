//! Role tags and derived capabilities.
//!
//! Roles are a closed enumeration rather than free-form strings, so a typo
//! in a backend tag can never silently grant or deny a capability. Unknown
//! tags are dropped (with a warning) at the parse boundary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Capability tag granted to a principal by the authentication service.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    SuperAdmin,
}

impl Role {
    /// Parse a backend role tag. Accepts both the bare and the
    /// `ROLE_`-prefixed spelling the authentication service has used.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim_start_matches("ROLE_") {
            "ADMIN" => Some(Role::Admin),
            "SUPERADMIN" => Some(Role::SuperAdmin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::SuperAdmin => "SUPERADMIN",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of roles granted to the current principal.
///
/// Capability predicates are derived on every read, never cached separately.
/// SUPERADMIN implies ADMIN-level capability.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        Self(roles.into_iter().collect())
    }

    /// Parse a list of backend tags, discarding unknown ones with a warning.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        let mut roles = BTreeSet::new();
        for tag in tags {
            match Role::parse(tag.as_ref()) {
                Some(role) => {
                    roles.insert(role);
                }
                None => {
                    tracing::warn!(tag = tag.as_ref(), "ignoring unknown role tag");
                }
            }
        }
        Self(roles)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_admin(&self) -> bool {
        self.contains(Role::Admin) || self.contains(Role::SuperAdmin)
    }

    pub fn is_super_admin(&self) -> bool {
        self.contains(Role::SuperAdmin)
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_and_prefixed_tags() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("ROLE_ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("ROLE_SUPERADMIN"), Some(Role::SuperAdmin));
    }

    #[test]
    fn unknown_tags_are_dropped_not_granted() {
        let roles = RoleSet::from_tags(&["ROLE_ADMINN", "moderator", ""]);
        assert!(roles.is_empty());
        assert!(!roles.is_admin());
    }

    #[test]
    fn admin_alone_is_admin_but_not_super_admin() {
        let roles = RoleSet::new([Role::Admin]);
        assert!(roles.is_admin());
        assert!(!roles.is_super_admin());
    }

    #[test]
    fn super_admin_implies_admin() {
        let roles = RoleSet::new([Role::SuperAdmin]);
        assert!(roles.is_super_admin());
        assert!(roles.is_admin());
    }

    #[test]
    fn empty_set_grants_nothing() {
        let roles = RoleSet::empty();
        assert!(!roles.is_admin());
        assert!(!roles.is_super_admin());
    }

    mod derivation_properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_roles() -> impl Strategy<Value = RoleSet> {
            proptest::collection::btree_set(
                prop_oneof![Just(Role::Admin), Just(Role::SuperAdmin)],
                0..=2,
            )
            .prop_map(|s| s.into_iter().collect())
        }

        proptest! {
            #[test]
            fn super_admin_implies_admin(roles in arb_roles()) {
                if roles.is_super_admin() {
                    prop_assert!(roles.is_admin());
                }
            }

            #[test]
            fn admin_capability_matches_membership(roles in arb_roles()) {
                let expected = roles.contains(Role::Admin) || roles.contains(Role::SuperAdmin);
                prop_assert_eq!(roles.is_admin(), expected);
                prop_assert_eq!(roles.is_super_admin(), roles.contains(Role::SuperAdmin));
            }
        }
    }
}
