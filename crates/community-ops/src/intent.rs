//! JSON intent front-end: `{"action": "...", ...params}` dispatched to the
//! matching builder.

use community_types::{Accounts, CommitEnvelope, CommunityError, CommunityType};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::builder::Community;

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    Create {
        #[serde(default, rename = "type")]
        community_type: CommunityType,
        #[serde(default)]
        admins: Option<Accounts>,
    },
    UpdateSettings {
        settings: Map<String, Value>,
    },
    AddUsers {
        accounts: Accounts,
        role: String,
    },
    RemoveUsers {
        accounts: Accounts,
        role: String,
    },
    SetUserTitle {
        account: String,
        title: String,
    },
    MuteUser {
        account: String,
    },
    UnmuteUser {
        account: String,
    },
    MutePost {
        author: String,
        permlink: String,
        #[serde(default)]
        notes: String,
    },
    UnmutePost {
        author: String,
        permlink: String,
        #[serde(default)]
        notes: String,
    },
    PinPost {
        author: String,
        permlink: String,
    },
    UnpinPost {
        author: String,
        permlink: String,
    },
    FlagPost {
        author: String,
        permlink: String,
        #[serde(default)]
        comment: String,
    },
}

impl Intent {
    pub fn apply(self, community: &Community<'_>) -> Result<CommitEnvelope, CommunityError> {
        match self {
            Self::Create {
                community_type,
                admins,
            } => community.create(community_type, admins),
            Self::UpdateSettings { settings } => community.update_settings(settings),
            Self::AddUsers { accounts, role } => community.add_users(accounts, &role),
            Self::RemoveUsers { accounts, role } => community.remove_users(accounts, &role),
            Self::SetUserTitle { account, title } => community.set_user_title(&account, &title),
            Self::MuteUser { account } => community.mute_user(&account),
            Self::UnmuteUser { account } => community.unmute_user(&account),
            Self::MutePost {
                author,
                permlink,
                notes,
            } => community.mute_post(&author, &permlink, &notes),
            Self::UnmutePost {
                author,
                permlink,
                notes,
            } => community.unmute_post(&author, &permlink, &notes),
            Self::PinPost { author, permlink } => community.pin_post(&author, &permlink),
            Self::UnpinPost { author, permlink } => community.unpin_post(&author, &permlink),
            Self::FlagPost {
                author,
                permlink,
                comment,
            } => community.flag_post(&author, &permlink, &comment),
        }
    }
}

/// Request read by the binary: who acts, where, and what.
#[derive(Clone, Debug, Deserialize)]
pub struct IntentRequest {
    pub community: String,
    pub account: String,
    pub intent: Intent,
}
