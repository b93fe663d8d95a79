//! Governance action vocabulary. Every action doubles as its permission gate name.

use serde::{Deserialize, Serialize};

use crate::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    UpdateSettings,
    AddAdmins,
    RemoveAdmins,
    AddModerators,
    RemoveModerators,
    AddPosters,
    RemovePosters,
    SetUserTitle,
    MuteUser,
    UnmuteUser,
    MutePost,
    UnmutePost,
    PinPost,
    UnpinPost,
    FlagPost,
}

/// Direction of a role assignment change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MembershipChange {
    Add,
    Remove,
}

impl MembershipChange {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl Action {
    pub const ALL: [Action; 16] = [
        Action::Create,
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

    /// Wire name, also used as the permission gate name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::UpdateSettings => "update_settings",
            Self::AddAdmins => "add_admins",
            Self::RemoveAdmins => "remove_admins",
            Self::AddModerators => "add_moderators",
            Self::RemoveModerators => "remove_moderators",
            Self::AddPosters => "add_posters",
            Self::RemovePosters => "remove_posters",
            Self::SetUserTitle => "set_user_title",
            Self::MuteUser => "mute_user",
            Self::UnmuteUser => "unmute_user",
            Self::MutePost => "mute_post",
            Self::UnmutePost => "unmute_post",
            Self::PinPost => "pin_post",
            Self::UnpinPost => "unpin_post",
            Self::FlagPost => "flag_post",
        }
    }

    /// `{add|remove}_{role}s`
    pub fn membership(change: MembershipChange, role: Role) -> Self {
        match (change, role) {
            (MembershipChange::Add, Role::Admin) => Self::AddAdmins,
            (MembershipChange::Add, Role::Moderator) => Self::AddModerators,
            (MembershipChange::Add, Role::Poster) => Self::AddPosters,
            (MembershipChange::Remove, Role::Admin) => Self::RemoveAdmins,
            (MembershipChange::Remove, Role::Moderator) => Self::RemoveModerators,
            (MembershipChange::Remove, Role::Poster) => Self::RemovePosters,
        }
    }

    /// Ungated actions skip the permission check entirely. `create` is the only
    /// one: its authority is the self-registration check (`community == account`)
    /// plus the existence check, since a new community has no role assignments.
    #[inline]
    pub fn is_gated(self) -> bool {
        !matches!(self, Self::Create)
    }

    /// Requires the target community to not exist yet.
    #[inline]
    pub fn is_existence_checked(self) -> bool {
        matches!(self, Self::Create)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
