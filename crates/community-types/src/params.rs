//! Parameter shapes accepted by the operation builders, normalized at the boundary.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Setting keys `update_settings` accepts. Anything else is dropped.
pub const VALID_SETTINGS: [&str; 5] = ["title", "about", "description", "language", "is_nsfw"];

/// Ordered, de-duplicated list of account names.
///
/// Accepts a single name or a collection; both normalize to a sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Accounts(Vec<String>);

impl Accounts {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !out.contains(&name) {
                out.push(name);
            }
        }
        Self(out)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Accounts {
    fn from(name: &str) -> Self {
        Self::new([name])
    }
}

impl From<String> for Accounts {
    fn from(name: String) -> Self {
        Self::new([name])
    }
}

impl From<Vec<String>> for Accounts {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<Vec<&str>> for Accounts {
    fn from(names: Vec<&str>) -> Self {
        Self::new(names)
    }
}

impl From<&[&str]> for Accounts {
    fn from(names: &[&str]) -> Self {
        Self::new(names.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Accounts {
    fn from(names: [&str; N]) -> Self {
        Self::new(names)
    }
}

impl<'de> Deserialize<'de> for Accounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(String),
            Many(Vec<String>),
        }

        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(name) => Self::from(name),
            OneOrMany::Many(names) => Self::from(names),
        })
    }
}

/// Community visibility chosen at creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunityType {
    #[default]
    Public,
    Restricted,
}

impl CommunityType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Restricted => "restricted",
        }
    }
}

/// Keep only recognized setting keys, in input order. Returns the kept
/// settings and the names of the dropped keys.
pub fn filter_settings(settings: Map<String, Value>) -> (Map<String, Value>, Vec<String>) {
    let mut kept = Map::new();
    let mut dropped = Vec::new();
    for (key, value) in settings {
        if VALID_SETTINGS.contains(&key.as_str()) {
            kept.insert(key, value);
        } else {
            dropped.push(key);
        }
    }
    (kept, dropped)
}
