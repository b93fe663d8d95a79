//! In-memory directory snapshot: community existence and role assignments
//! materialized from prior ledger history.

use std::collections::BTreeMap;
use std::path::Path;

use community_types::{CommunityError, LookupFailure, Role};
use serde::{Deserialize, Serialize};

use crate::lookup::{CommunityDirectory, RoleLookup};

/// JSON shape: `{"communities": {"<community>": {"<account>": "<role>"}}}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorySnapshot {
    #[serde(default)]
    communities: BTreeMap<String, BTreeMap<String, Role>>,
}

impl DirectorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(text: &str) -> Result<Self, CommunityError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, CommunityError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CommunityError::LookupFailure(format!("snapshot {}: {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Register a community with no role assignments.
    pub fn with_community(mut self, community: &str) -> Self {
        self.communities.entry(community.to_string()).or_default();
        self
    }

    /// Assign `role` to `account` in `community`, registering the community.
    pub fn with_role(mut self, community: &str, account: &str, role: Role) -> Self {
        self.communities
            .entry(community.to_string())
            .or_default()
            .insert(account.to_string(), role);
        self
    }
}

impl CommunityDirectory for DirectorySnapshot {
    fn community_exists(&self, name: &str) -> Result<bool, LookupFailure> {
        Ok(self.communities.contains_key(name))
    }
}

impl RoleLookup for DirectorySnapshot {
    fn role_of(&self, account: &str, community: &str) -> Result<Option<Role>, LookupFailure> {
        Ok(self
            .communities
            .get(community)
            .and_then(|members| members.get(account))
            .copied())
    }
}
