//! Canonical community operation record.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{Action, CommunityError};

/// `{action, community, params}`.
///
/// Wire form is `[action, {"community": .., ...params}]`: the community goes
/// first and the parameters follow in construction order.
#[derive(Clone, Debug, PartialEq)]
pub struct CommunityOperation {
    action: Action,
    community: String,
    params: Map<String, Value>,
}

impl CommunityOperation {
    /// `params` must not carry `community`; it is supplied positionally.
    pub fn new(
        action: Action,
        community: impl Into<String>,
        params: Map<String, Value>,
    ) -> Result<Self, CommunityError> {
        if params.contains_key("community") {
            return Err(CommunityError::InvalidArgument(
                "community is positional and cannot appear in params".into(),
            ));
        }
        Ok(Self {
            action,
            community: community.into(),
            params,
        })
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn community(&self) -> &str {
        &self.community
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    pub fn to_json(&self) -> Value {
        let mut body = Map::with_capacity(self.params.len() + 1);
        body.insert("community".into(), Value::String(self.community.clone()));
        for (key, value) in &self.params {
            body.insert(key.clone(), value.clone());
        }
        Value::Array(vec![
            Value::String(self.action.as_str().into()),
            Value::Object(body),
        ])
    }
}

impl Serialize for CommunityOperation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
