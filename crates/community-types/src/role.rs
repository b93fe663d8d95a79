//! Community roles and the static permission table.

use serde::{Deserialize, Serialize};

use crate::{Action, CommunityError};

/// Role an account holds within a community.
///
/// Ordered low to high; a higher role's table entry covers the lower one's,
/// but [`PermissionTable`] stays the only place that decides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Poster,
    Moderator,
    Admin,
}

impl Role {
    /// Key set of the permission table, in display order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Moderator, Role::Poster];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::Poster => "poster",
        }
    }

    /// Comma separated list of every known role name.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = CommunityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| {
                CommunityError::InvalidArgument(format!(
                    "Invalid role `{s}`. options: {}",
                    Self::valid_names()
                ))
            })
    }
}

const ADMIN_ACTIONS: &[Action] = &[
    Action::UpdateSettings,
    Action::AddAdmins,
    Action::RemoveAdmins,
    Action::AddModerators,
    Action::RemoveModerators,
    Action::AddPosters,
    Action::RemovePosters,
    Action::SetUserTitle,
    Action::MuteUser,
    Action::UnmuteUser,
    Action::MutePost,
    Action::UnmutePost,
    Action::PinPost,
    Action::UnpinPost,
    Action::FlagPost,
];

const MODERATOR_ACTIONS: &[Action] = &[
    Action::AddPosters,
    Action::RemovePosters,
    Action::SetUserTitle,
    Action::MuteUser,
    Action::UnmuteUser,
    Action::MutePost,
    Action::UnmutePost,
    Action::PinPost,
    Action::UnpinPost,
    Action::FlagPost,
];

const POSTER_ACTIONS: &[Action] = &[Action::FlagPost];

/// Role → permitted actions. Total over [`Role`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PermissionTable;

/// Process-wide permission table.
pub const PERMISSIONS: PermissionTable = PermissionTable;

impl PermissionTable {
    pub fn roles(&self) -> &'static [Role] {
        &Role::ALL
    }

    pub fn actions_for(&self, role: Role) -> &'static [Action] {
        match role {
            Role::Admin => ADMIN_ACTIONS,
            Role::Moderator => MODERATOR_ACTIONS,
            Role::Poster => POSTER_ACTIONS,
        }
    }

    #[inline]
    pub fn permits(&self, role: Role, action: Action) -> bool {
        self.actions_for(role).contains(&action)
    }
}
