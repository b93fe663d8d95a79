//! Permission-gated construction of community governance operations and
//! their packaging into ledger commit envelopes.

pub mod builder;
pub mod commit;
pub mod configuration;
pub mod intent;
pub mod lookup;
pub mod snapshot;

pub use builder::Community;
pub use commit::commit;
pub use configuration::Config;
pub use intent::{Intent, IntentRequest};
pub use lookup::{CommunityDirectory, PermissionOracle, RoleLookup, RolePermissions};
pub use snapshot::DirectorySnapshot;

pub use community_types::*;
