use shared_types::{AppError, DashboardScope, StatsSummary, UserSummary};

use crate::http::ApiClient;

/// `GET /admin/stats`. The API rejects non-admin tokens.
pub async fn fetch_admin_stats(client: &ApiClient, token: &str) -> Result<StatsSummary, AppError> {
    client.get_json(DashboardScope::Admin.stats_path(), token).await
}

/// `GET /admin/users`, unfiltered. See [`crate::load_users`] for the list the
/// admin view actually renders.
pub async fn fetch_admin_users(client: &ApiClient, token: &str) -> Result<Vec<UserSummary>, AppError> {
    client.get_json(DashboardScope::Admin.users_path(), token).await
}
