use api_client::{load_admin_dashboard, load_stats, load_user_dashboard, load_users};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, DashboardScope, StatsSummary};

use crate::common;

#[tokio::test]
async fn test_stats_server_error_renders_zeros() {
    let token = common::admin_token();
    let mock = common::spawn_mock_api(&token, &[("/admin/stats", StatusCode::INTERNAL_SERVER_ERROR)]).await;

    let loaded = load_stats(&mock.client(), DashboardScope::Admin, &token).await;
    assert_eq!(loaded.value, StatsSummary::default());
    assert_eq!(loaded.value.regular_user_count(), 0);
    let err = loaded.error.unwrap();
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.status, Some(500));
}

#[tokio::test]
async fn test_users_failure_renders_empty_list() {
    let token = common::user_token();
    let mock = common::spawn_mock_api(&token, &[("/dashboard/users", StatusCode::BAD_GATEWAY)]).await;

    let loaded = load_users(&mock.client(), DashboardScope::User, &token).await;
    assert!(loaded.value.is_empty());
    assert!(loaded.is_fallback());
}

#[tokio::test]
async fn test_stats_failure_does_not_block_users() {
    let token = common::admin_token();
    let mock = common::spawn_mock_api(&token, &[("/admin/stats", StatusCode::SERVICE_UNAVAILABLE)]).await;

    let data = load_admin_dashboard(&mock.client(), &token).await;
    assert!(data.stats.is_fallback());
    assert!(!data.users.is_fallback());
    assert_eq!(data.users.value.len(), 4);

    let mut paths: Vec<String> = mock.seen().into_iter().map(|r| r.path).collect();
    paths.sort();
    assert_eq!(paths, vec!["/admin/stats", "/admin/users"]);
}

#[tokio::test]
async fn test_rejected_token_falls_back_on_both_halves() {
    let mock = common::spawn_mock_api(&common::admin_token(), &[]).await;

    let data = load_user_dashboard(&mock.client(), &common::user_token()).await;
    assert_eq!(data.stats.value, StatsSummary::default());
    assert!(data.users.value.is_empty());
    assert_eq!(data.stats.error.unwrap().kind, AppErrorKind::Unauthorized);
    assert_eq!(data.users.error.unwrap().kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_unreachable_api_falls_back() {
    let token = common::admin_token();
    let client = api_client::ApiClient::new("http://127.0.0.1:9");

    let data = load_admin_dashboard(&client, &token).await;
    assert_eq!(data.stats.value, StatsSummary::default());
    assert!(data.users.value.is_empty());
    assert_eq!(data.stats.error.unwrap().kind, AppErrorKind::Network);
}
