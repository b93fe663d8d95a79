//! External state consumed by the builder, and the role-based permission model.

use community_types::{Action, LookupFailure, PERMISSIONS, PermissionTable, Role};

/// Answers "does this community exist". Used only by `create`.
pub trait CommunityDirectory {
    fn community_exists(&self, name: &str) -> Result<bool, LookupFailure>;
}

/// Role assignment state: the role `account` holds in `community`, if any.
pub trait RoleLookup {
    fn role_of(&self, account: &str, community: &str) -> Result<Option<Role>, LookupFailure>;
}

/// Authorization oracle keyed by gate name.
pub trait PermissionOracle {
    fn is_permitted(
        &self,
        account: &str,
        community: &str,
        action: Action,
    ) -> Result<bool, LookupFailure>;
}

impl<T: CommunityDirectory + ?Sized> CommunityDirectory for &T {
    fn community_exists(&self, name: &str) -> Result<bool, LookupFailure> {
        (**self).community_exists(name)
    }
}

impl<T: RoleLookup + ?Sized> RoleLookup for &T {
    fn role_of(&self, account: &str, community: &str) -> Result<Option<Role>, LookupFailure> {
        (**self).role_of(account, community)
    }
}

/// Permission model backed by the static [`PermissionTable`].
///
/// Accounts with no role in the community are denied; lookup errors are
/// passed through untouched.
#[derive(Clone, Debug)]
pub struct RolePermissions<L> {
    roles: L,
    table: PermissionTable,
}

impl<L: RoleLookup> RolePermissions<L> {
    pub fn new(roles: L) -> Self {
        Self {
            roles,
            table: PERMISSIONS,
        }
    }
}

impl<L: RoleLookup> PermissionOracle for RolePermissions<L> {
    fn is_permitted(
        &self,
        account: &str,
        community: &str,
        action: Action,
    ) -> Result<bool, LookupFailure> {
        Ok(self
            .roles
            .role_of(account, community)?
            .is_some_and(|role| self.table.permits(role, action)))
    }
}
