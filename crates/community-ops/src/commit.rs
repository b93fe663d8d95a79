//! Commit packaging: wraps a payload into the ledger custom-operation envelope.

use community_types::{CommitEnvelope, CommitPayload, CommunityError, NamespaceId};
use tracing::debug;

/// Package `payload` for submission by `account`.
///
/// Payload contents are not validated here. The only failure is raw JSON
/// text that does not parse.
pub fn commit(
    id: &NamespaceId,
    account: &str,
    payload: impl Into<CommitPayload>,
) -> Result<CommitEnvelope, CommunityError> {
    let json = payload.into().into_value()?;
    debug!(id = %id, account = %account, "Packaged commit envelope");
    Ok(CommitEnvelope::posting(id.clone(), account, json))
}
