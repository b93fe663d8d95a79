// =============================================================================
// Governance Flow Integration Tests
// =============================================================================
// Drives every builder through JSON intents the way the binary does, from
// community creation through moderation.
//
// Run with:
//   cargo test -p community-integration-tests governance_flow_tests

use community_ops::{CommunityError, CommunityType, DirectorySnapshot, Intent, IntentRequest};
use serde_json::json;

use crate::utils::{snapshot, with_community};

fn apply(
    snap: &DirectorySnapshot,
    request: serde_json::Value,
) -> Result<serde_json::Value, CommunityError> {
    let request: IntentRequest = serde_json::from_value(request)?;
    let intent = request.intent;
    with_community(snap, &request.community, &request.account, |c| intent.apply(c))
        .map(|env| env.json)
}

#[test]
fn create_new_community() -> anyhow::Result<()> {
    let snap = snapshot()?;
    let json = apply(
        &snap,
        json!({
            "community": "hive-300",
            "account": "hive-300",
            "intent": {"action": "create", "type": "restricted", "admins": ["ann", "founder"]}
        }),
    )?;
    assert_eq!(
        json,
        json!(["create", {"community": "hive-300", "type": "restricted", "admins": ["ann", "founder"]}])
    );
    Ok(())
}

#[test]
fn create_rejects_mismatched_account() -> anyhow::Result<()> {
    let snap = snapshot()?;
    let err = with_community(&snap, "alice", "bob", |c| c.create(CommunityType::Public, None))
        .unwrap_err();
    assert!(matches!(err, CommunityError::InvalidArgument(_)));
    Ok(())
}

#[test]
fn create_existing_community_is_duplicate() -> anyhow::Result<()> {
    let snap = snapshot()?;
    let err = with_community(&snap, "hive-100", "hive-100", |c| {
        c.create(CommunityType::Public, None)
    })
    .unwrap_err();
    assert!(matches!(err, CommunityError::DuplicateEntity(_)));
    Ok(())
}

#[test]
fn every_moderation_intent() -> anyhow::Result<()> {
    let snap = snapshot()?;
    let cases = [
        (
            json!({"action": "set_user_title", "account": "pat", "title": "Regular"}),
            json!(["set_user_title", {"community": "hive-100", "account": "pat", "title": "Regular"}]),
        ),
        (
            json!({"action": "mute_user", "account": "troll"}),
            json!(["mute_user", {"community": "hive-100", "account": "troll"}]),
        ),
        (
            json!({"action": "unmute_user", "account": "troll"}),
            json!(["unmute_user", {"community": "hive-100", "account": "troll"}]),
        ),
        (
            json!({"action": "mute_post", "author": "troll", "permlink": "bait", "notes": "rule 2"}),
            json!(["mute_post", {"community": "hive-100", "author": "troll", "permlink": "bait", "notes": "rule 2"}]),
        ),
        (
            json!({"action": "unmute_post", "author": "troll", "permlink": "bait", "notes": "appeal"}),
            json!(["unmute_post", {"community": "hive-100", "author": "troll", "permlink": "bait", "notes": "appeal"}]),
        ),
        (
            json!({"action": "pin_post", "author": "ann", "permlink": "rules"}),
            json!(["pin_post", {"community": "hive-100", "author": "ann", "permlink": "rules"}]),
        ),
        (
            json!({"action": "unpin_post", "author": "ann", "permlink": "rules"}),
            json!(["unpin_post", {"community": "hive-100", "author": "ann", "permlink": "rules"}]),
        ),
        (
            json!({"action": "flag_post", "author": "troll", "permlink": "bait", "comment": "spam"}),
            json!(["flag_post", {"community": "hive-100", "author": "troll", "permlink": "bait", "comment": "spam"}]),
        ),
        (
            json!({"action": "remove_users", "accounts": ["pat", "pat"], "role": "poster"}),
            json!(["remove_posters", {"community": "hive-100", "accounts": ["pat"]}]),
        ),
    ];

    for (intent, expected) in cases {
        let json = apply(
            &snap,
            json!({"community": "hive-100", "account": "mo", "intent": intent}),
        )?;
        assert_eq!(json, expected);
    }
    Ok(())
}

#[test]
fn update_settings_drops_unknown_keys() -> anyhow::Result<()> {
    let snap = snapshot()?;
    let json = apply(
        &snap,
        json!({
            "community": "hive-100",
            "account": "founder",
            "intent": {
                "action": "update_settings",
                "settings": {"title": "T", "unknown_key": "x", "language": "en", "is_nsfw": true}
            }
        }),
    )?;
    assert_eq!(
        json[1]["settings"],
        json!({"title": "T", "language": "en", "is_nsfw": true})
    );
    assert!(json[1]["settings"].get("unknown_key").is_none());
    Ok(())
}

#[test]
fn denied_intent_produces_nothing() -> anyhow::Result<()> {
    let snap = snapshot()?;
    let err = apply(
        &snap,
        json!({
            "community": "hive-100",
            "account": "pat",
            "intent": {"action": "mute_post", "author": "ann", "permlink": "rules"}
        }),
    )
    .unwrap_err();
    assert_eq!(
        err,
        CommunityError::PermissionDenied("mute_post".into(), "pat".into())
    );
    Ok(())
}

#[test]
fn malformed_intent_is_parse_error() {
    let err = serde_json::from_value::<Intent>(json!({"action": "mute_user"}))
        .map_err(CommunityError::from)
        .unwrap_err();
    assert!(matches!(err, CommunityError::ParseError(_)));
}
