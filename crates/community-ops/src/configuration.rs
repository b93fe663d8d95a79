//! Runtime configuration: optional `community.toml`, then `COMMUNITY_*` env vars.

use std::path::PathBuf;

use community_types::{DEFAULT_NAMESPACE, NamespaceId};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ledger namespace; the custom operation id is `com.<namespace>.community`.
    pub namespace: String,
    /// JSON directory snapshot. Without one every community is unknown.
    pub snapshot_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            snapshot_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("community").required(false))
            .add_source(config::Environment::with_prefix("COMMUNITY"))
            .build()?
            .try_deserialize()
    }

    pub fn namespace_id(&self) -> NamespaceId {
        NamespaceId::for_namespace(&self.namespace)
    }
}
