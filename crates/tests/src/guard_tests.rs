use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{decode_claims, require_admin, require_auth, GuardDecision};

use crate::common;

#[test]
fn test_empty_token_redirects_dashboard_to_landing() {
    let decision = require_auth("");
    assert_eq!(decision, GuardDecision::RedirectToLanding);
    assert_eq!(decision.redirect_path(), Some("/"));
    assert_eq!(require_admin(""), GuardDecision::RedirectToLanding);
}

#[test]
fn test_any_token_passes_auth_guard() {
    assert!(require_auth(&common::user_token()).is_admitted());
    assert!(require_auth("garbage").is_admitted());
}

#[test]
fn test_admin_sub_renders_admin_dashboard() {
    let token = common::mint_token(&json!({ "sub": "admin" }));
    assert_eq!(require_admin(&token), GuardDecision::Admit);
}

#[test]
fn test_admin_role_renders_admin_dashboard() {
    let token = common::mint_token(&json!({ "sub": "42", "role": "admin" }));
    assert_eq!(require_admin(&token), GuardDecision::Admit);
}

#[test]
fn test_regular_user_redirects_to_dashboard() {
    let token = common::mint_token(&json!({ "sub": "alice", "role": "user" }));
    let decision = require_admin(&token);
    assert_eq!(decision, GuardDecision::RedirectToDashboard);
    assert_eq!(decision.redirect_path(), Some("/dashboard"));
}

#[test]
fn test_admin_match_is_exact() {
    let token = common::mint_token(&json!({ "sub": "Admin", "role": "administrator" }));
    assert_eq!(require_admin(&token), GuardDecision::RedirectToDashboard);
}

#[test]
fn test_malformed_tokens_redirect_to_dashboard() {
    for token in ["garbage", "a.b", "a.!!!.c", "a.bm90IGpzb24.c", "a.WzEsMl0.c", "a.b.c.d"] {
        assert_eq!(require_admin(token), GuardDecision::RedirectToDashboard, "{token}");
    }
}

#[test]
fn test_decoded_claims_match_minted_object() {
    let claims = json!({
        "sub": "alice",
        "role": "user",
        "exp": 1_900_000_000,
        "scopes": ["read", "write"],
        "meta": { "plan": "pro", "beta": true }
    });
    let token = common::mint_token(&claims);

    let decoded = decode_claims(&token).unwrap();
    assert_eq!(serde_json::Value::Object(decoded.into_map()), claims);
}

#[test]
fn test_admin_profile_from_minted_token() {
    let claims = decode_claims(&common::admin_token()).unwrap();
    let profile = claims.admin_profile().unwrap();
    assert_eq!(profile.username, "root");
    assert_eq!(profile.email, "root@example.com");
    assert!(claims.is_admin());
}
