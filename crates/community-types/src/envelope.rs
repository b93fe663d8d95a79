//! Ledger custom-payload envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{CommunityError, CommunityOperation};

pub const DEFAULT_NAMESPACE: &str = "steemit";

/// Custom operation id, `com.<namespace>.community`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceId(String);

impl NamespaceId {
    pub fn for_namespace(namespace: &str) -> Self {
        Self(format!("com.{namespace}.community"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NamespaceId {
    fn default() -> Self {
        Self::for_namespace(DEFAULT_NAMESPACE)
    }
}

impl std::fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload accepted by the packager: a built operation, an already parsed
/// JSON value, or raw JSON text built out of band.
#[derive(Clone, Debug)]
pub enum CommitPayload {
    Operation(CommunityOperation),
    Json(Value),
    Raw(String),
}

impl CommitPayload {
    /// Only raw text can fail, and only when it is not valid JSON.
    pub fn into_value(self) -> Result<Value, CommunityError> {
        match self {
            Self::Operation(op) => Ok(op.to_json()),
            Self::Json(value) => Ok(value),
            Self::Raw(text) => Ok(serde_json::from_str(&text)?),
        }
    }
}

impl From<CommunityOperation> for CommitPayload {
    fn from(op: CommunityOperation) -> Self {
        Self::Operation(op)
    }
}

impl From<Value> for CommitPayload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<&str> for CommitPayload {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}

impl From<String> for CommitPayload {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

/// Shape handed to the ledger submission collaborator.
///
/// Governance actions are authorized with posting authority only, so
/// `required_auths` is always empty and `required_posting_auths` holds the
/// single acting account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommitEnvelope {
    pub json: Value,
    pub required_auths: Vec<String>,
    pub required_posting_auths: Vec<String>,
    pub id: NamespaceId,
}

impl CommitEnvelope {
    pub fn posting(id: NamespaceId, account: &str, json: Value) -> Self {
        Self {
            json,
            required_auths: Vec::new(),
            required_posting_auths: vec![account.to_string()],
            id,
        }
    }
}
