//! Shared types and pure-logic vocabulary for community governance operations.
//! No lookup or runtime dependency — usable by builders, indexers and tests alike.

mod action;
mod envelope;
mod error;
mod operation;
mod params;
mod role;

pub use action::{Action, MembershipChange};
pub use envelope::{CommitEnvelope, CommitPayload, DEFAULT_NAMESPACE, NamespaceId};
pub use error::{CommunityError, LookupFailure};
pub use operation::CommunityOperation;
pub use params::{Accounts, CommunityType, VALID_SETTINGS, filter_settings};
pub use role::{PERMISSIONS, PermissionTable, Role};
