//! Operation builder: the single path from a governance intent to a packaged
//! commit envelope.
//!
//! Every builder normalizes its inputs first, then authorizes against the
//! directory and permission oracle, then assembles the operation. Nothing is
//! produced unless every step succeeds.

use community_types::{
    Accounts, Action, CommitEnvelope, CommitPayload, CommunityError, CommunityOperation,
    CommunityType, MembershipChange, NamespaceId, Role, filter_settings,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::commit::commit;
use crate::lookup::{CommunityDirectory, PermissionOracle};

/// Builds operations for one community on behalf of one acting account.
pub struct Community<'a> {
    community: String,
    account: String,
    id: NamespaceId,
    directory: &'a dyn CommunityDirectory,
    oracle: &'a dyn PermissionOracle,
}

fn params<const N: usize>(entries: [(&str, Value); N]) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

impl<'a> Community<'a> {
    pub fn new(
        community: impl Into<String>,
        account: impl Into<String>,
        directory: &'a dyn CommunityDirectory,
        oracle: &'a dyn PermissionOracle,
    ) -> Self {
        Self {
            community: community.into(),
            account: account.into(),
            id: NamespaceId::default(),
            directory,
            oracle,
        }
    }

    pub fn with_namespace(mut self, id: NamespaceId) -> Self {
        self.id = id;
        self
    }

    pub fn community(&self) -> &str {
        &self.community
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn namespace_id(&self) -> &NamespaceId {
        &self.id
    }

    /// Whether the acting account may perform `action` here.
    pub fn has_permission(&self, action: Action) -> Result<bool, CommunityError> {
        self.has_permission_for(action, &self.account)
    }

    /// Whether `account` may perform `action` here.
    pub fn has_permission_for(
        &self,
        action: Action,
        account: &str,
    ) -> Result<bool, CommunityError> {
        Ok(self.oracle.is_permitted(account, &self.community, action)?)
    }

    /// Upgrade the acting account into a new community.
    ///
    /// `admins` defaults to the community account itself.
    pub fn create(
        &self,
        community_type: CommunityType,
        admins: Option<Accounts>,
    ) -> Result<CommitEnvelope, CommunityError> {
        let admins = admins
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| Accounts::from(self.community.as_str()));

        if self.community != self.account {
            return Err(CommunityError::InvalidArgument(
                "Account name and community name need to be the same".into(),
            ));
        }

        self.authorize(Action::Create)?;
        self.finish(
            Action::Create,
            params([
                ("type", Value::from(community_type.as_str())),
                ("admins", Value::from(admins.into_vec())),
            ]),
        )
    }

    /// Update community metadata. Unrecognized setting keys are dropped.
    pub fn update_settings(
        &self,
        settings: Map<String, Value>,
    ) -> Result<CommitEnvelope, CommunityError> {
        let (settings, dropped) = filter_settings(settings);
        if !dropped.is_empty() {
            debug!(community = %self.community, dropped = ?dropped, "Ignoring unknown settings");
        }

        self.authorize(Action::UpdateSettings)?;
        self.finish(
            Action::UpdateSettings,
            params([("settings", Value::Object(settings))]),
        )
    }

    /// Add accounts to the community under `role`.
    pub fn add_users(
        &self,
        accounts: impl Into<Accounts>,
        role: &str,
    ) -> Result<CommitEnvelope, CommunityError> {
        self.change_membership(MembershipChange::Add, accounts.into(), role)
    }

    /// Remove accounts from `role`.
    pub fn remove_users(
        &self,
        accounts: impl Into<Accounts>,
        role: &str,
    ) -> Result<CommitEnvelope, CommunityError> {
        self.change_membership(MembershipChange::Remove, accounts.into(), role)
    }

    fn change_membership(
        &self,
        change: MembershipChange,
        accounts: Accounts,
        role: &str,
    ) -> Result<CommitEnvelope, CommunityError> {
        let role: Role = role.parse()?;
        if accounts.is_empty() {
            return Err(CommunityError::InvalidArgument(format!(
                "no accounts to {} as {role}",
                change.as_str()
            )));
        }

        let action = Action::membership(change, role);
        self.authorize(action)?;
        self.finish(action, params([("accounts", Value::from(accounts.into_vec()))]))
    }

    pub fn set_user_title(
        &self,
        account: &str,
        title: &str,
    ) -> Result<CommitEnvelope, CommunityError> {
        self.authorize(Action::SetUserTitle)?;
        self.finish(
            Action::SetUserTitle,
            params([("account", Value::from(account)), ("title", Value::from(title))]),
        )
    }

    pub fn mute_user(&self, account: &str) -> Result<CommitEnvelope, CommunityError> {
        self.user_action(Action::MuteUser, account)
    }

    pub fn unmute_user(&self, account: &str) -> Result<CommitEnvelope, CommunityError> {
        self.user_action(Action::UnmuteUser, account)
    }

    fn user_action(&self, action: Action, account: &str) -> Result<CommitEnvelope, CommunityError> {
        self.authorize(action)?;
        self.finish(action, params([("account", Value::from(account))]))
    }

    pub fn mute_post(
        &self,
        author: &str,
        permlink: &str,
        notes: &str,
    ) -> Result<CommitEnvelope, CommunityError> {
        self.post_action(Action::MutePost, author, permlink, Some(("notes", notes)))
    }

    pub fn unmute_post(
        &self,
        author: &str,
        permlink: &str,
        notes: &str,
    ) -> Result<CommitEnvelope, CommunityError> {
        self.post_action(Action::UnmutePost, author, permlink, Some(("notes", notes)))
    }

    pub fn pin_post(
        &self,
        author: &str,
        permlink: &str,
    ) -> Result<CommitEnvelope, CommunityError> {
        self.post_action(Action::PinPost, author, permlink, None)
    }

    pub fn unpin_post(
        &self,
        author: &str,
        permlink: &str,
    ) -> Result<CommitEnvelope, CommunityError> {
        self.post_action(Action::UnpinPost, author, permlink, None)
    }

    pub fn flag_post(
        &self,
        author: &str,
        permlink: &str,
        comment: &str,
    ) -> Result<CommitEnvelope, CommunityError> {
        self.post_action(Action::FlagPost, author, permlink, Some(("comment", comment)))
    }

    fn post_action(
        &self,
        action: Action,
        author: &str,
        permlink: &str,
        extra: Option<(&str, &str)>,
    ) -> Result<CommitEnvelope, CommunityError> {
        self.authorize(action)?;
        let mut map = params([
            ("author", Value::from(author)),
            ("permlink", Value::from(permlink)),
        ]);
        if let Some((key, text)) = extra {
            map.insert(key.to_string(), Value::from(text));
        }
        self.finish(action, map)
    }

    /// Package an operation built out of band, structured or raw JSON.
    pub fn commit(
        &self,
        payload: impl Into<CommitPayload>,
    ) -> Result<CommitEnvelope, CommunityError> {
        commit(&self.id, &self.account, payload)
    }

    fn authorize(&self, action: Action) -> Result<(), CommunityError> {
        if action.is_existence_checked() && self.directory.community_exists(&self.community)? {
            warn!(community = %self.community, "Community already exists");
            return Err(CommunityError::DuplicateEntity(format!(
                "community {} already exists.",
                self.community
            )));
        }

        if action.is_gated() && !self.has_permission(action)? {
            warn!(
                community = %self.community,
                account = %self.account,
                action = %action,
                "Insufficient community permissions"
            );
            return Err(CommunityError::PermissionDenied(
                action.to_string(),
                self.account.clone(),
            ));
        }

        Ok(())
    }

    fn finish(
        &self,
        action: Action,
        params: Map<String, Value>,
    ) -> Result<CommitEnvelope, CommunityError> {
        let op = CommunityOperation::new(action, self.community.clone(), params)?;
        debug!(
            community = %self.community,
            account = %self.account,
            action = %action,
            "Built community operation"
        );
        self.commit(op)
    }
}
