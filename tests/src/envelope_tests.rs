// =============================================================================
// Commit Envelope Integration Tests
// =============================================================================
// Envelope shape, authority model, out-of-band payloads and determinism.
//
// Run with:
//   cargo test -p community-integration-tests envelope_tests

use community_ops::{CommitEnvelope, CommunityError, CommunityType, NamespaceId};
use serde_json::json;

use crate::utils::{snapshot, with_community};

#[test]
fn posting_authority_for_every_builder() -> anyhow::Result<()> {
    let snap = snapshot()?;
    let envelopes: Vec<CommitEnvelope> = with_community(&snap, "hive-100", "founder", |c| {
        Ok::<_, CommunityError>(vec![
            c.update_settings(serde_json::Map::new())?,
            c.add_users("x", "admin")?,
            c.remove_users("x", "moderator")?,
            c.set_user_title("x", "t")?,
            c.mute_user("x")?,
            c.unmute_user("x")?,
            c.mute_post("x", "p", "n")?,
            c.unmute_post("x", "p", "n")?,
            c.pin_post("x", "p")?,
            c.unpin_post("x", "p")?,
            c.flag_post("x", "p", "c")?,
            c.commit(r#"["custom", {"community": "hive-100"}]"#)?,
        ])
    })?;
    let created = with_community(&snap, "fresh", "fresh", |c| {
        c.create(CommunityType::Public, None)
    })?;

    for env in envelopes.iter().chain(std::iter::once(&created)) {
        assert!(env.required_auths.is_empty());
        assert_eq!(env.id, NamespaceId::default());
    }
    for env in &envelopes {
        assert_eq!(env.required_posting_auths, vec!["founder"]);
    }
    assert_eq!(created.required_posting_auths, vec!["fresh"]);
    Ok(())
}

#[test]
fn envelope_wire_shape() -> anyhow::Result<()> {
    let snap = snapshot()?;
    let env = with_community(&snap, "hive-100", "ann", |c| c.mute_user("troll"))?;
    assert_eq!(
        serde_json::to_string(&env)?,
        r#"{"json":["mute_user",{"community":"hive-100","account":"troll"}],"required_auths":[],"required_posting_auths":["ann"],"id":"com.steemit.community"}"#
    );
    Ok(())
}

#[test]
fn identical_inputs_identical_bytes() -> anyhow::Result<()> {
    let snap = snapshot()?;
    let build = || {
        with_community(&snap, "hive-100", "ann", |c| {
            let settings = json!({"about": "a", "title": "t", "bogus": 1});
            c.update_settings(settings.as_object().cloned().unwrap_or_default())
        })
    };
    let first = serde_json::to_vec(&build()?)?;
    let second = serde_json::to_vec(&build()?)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn raw_payload_round_trips_through_envelope() -> anyhow::Result<()> {
    let snap = snapshot()?;
    let structured = with_community(&snap, "hive-100", "ann", |c| c.pin_post("ann", "rules"))?;
    let raw = serde_json::to_string(&structured.json)?;
    let from_raw = with_community(&snap, "hive-100", "ann", |c| c.commit(raw))?;
    assert_eq!(structured, from_raw);
    Ok(())
}

#[test]
fn malformed_raw_payload() -> anyhow::Result<()> {
    let snap = snapshot()?;
    let err = with_community(&snap, "hive-100", "ann", |c| c.commit("{\"json\": ")).unwrap_err();
    assert!(matches!(err, CommunityError::ParseError(_)));
    Ok(())
}
