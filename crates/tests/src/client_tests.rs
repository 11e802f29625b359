use api_client::api;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common;

#[tokio::test]
async fn test_admin_stats_decode() {
    let token = common::admin_token();
    let mock = common::spawn_mock_api(&token, &[]).await;

    let stats = api::fetch_admin_stats(&mock.client(), &token).await.unwrap();
    assert_eq!(stats.system.total_users, 6);
    assert_eq!(stats.system.total_downloads, 120);
    assert_eq!(stats.system.active_users, 3);
    assert_eq!(stats.recent_activity.downloads_last_7_days, 14);
    assert_eq!(stats.regular_user_count(), 5);
}

#[tokio::test]
async fn test_requests_carry_bearer_and_json_headers() {
    let token = common::user_token();
    let mock = common::spawn_mock_api(&token, &[]).await;

    api::fetch_dashboard_stats(&mock.client(), &token).await.unwrap();

    let seen = mock.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].path, "/dashboard/stats");
    assert_eq!(seen[0].authorization, Some(format!("Bearer {token}")));
    assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_admin_users_unfiltered_at_client_level() {
    let token = common::admin_token();
    let mock = common::spawn_mock_api(&token, &[]).await;

    let users = api::fetch_admin_users(&mock.client(), &token).await.unwrap();
    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[tokio::test]
async fn test_user_download_counts_from_each_shape() {
    let token = common::user_token();
    let mock = common::spawn_mock_api(&token, &[]).await;

    let users = api::fetch_dashboard_users(&mock.client(), &token).await.unwrap();
    let counts: Vec<(i64, i64)> = users.iter().map(|u| (u.id, u.download_count())).collect();
    assert_eq!(counts, vec![(1, 10), (2, 0), (3, 0), (4, 7), (5, 0), (6, 3), (7, 0)]);
    assert_eq!(users[0].joined_on(), "2024-01-15");
    assert_eq!(users[2].joined_on(), "2023-12-02");
}

#[tokio::test]
async fn test_null_fields_keep_the_record() {
    let token = common::user_token();
    let mock = common::spawn_mock_api(&token, &[]).await;

    let users = api::fetch_dashboard_users(&mock.client(), &token).await.unwrap();
    let erin = users.iter().find(|u| u.id == 7).unwrap();
    assert_eq!(erin.username, "erin");
    assert_eq!(erin.email, "");
    assert_eq!(erin.created_at, "");
    assert_eq!(erin.download_count(), 0);
}

#[tokio::test]
async fn test_wrong_token_is_unauthorized() {
    let mock = common::spawn_mock_api(&common::admin_token(), &[]).await;

    let err = api::fetch_admin_stats(&mock.client(), "not.the.token")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.status, Some(401));
    assert_eq!(err.message, "invalid or missing token");
}

#[tokio::test]
async fn test_forbidden_status_maps_to_forbidden() {
    let token = common::user_token();
    let mock = common::spawn_mock_api(&token, &[("/admin/users", StatusCode::FORBIDDEN)]).await;

    let err = api::fetch_admin_users(&mock.client(), &token).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.friendly_message(), "Access denied. Admin privileges required.");
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let token = common::user_token();
    let mock = common::spawn_mock_api(&token, &[]).await;
    let client = api_client::ApiClient::new(format!("{}/", mock.base_url));

    api::fetch_dashboard_users(&client, &token).await.unwrap();
    assert_eq!(mock.seen()[0].path, "/dashboard/users");
}
