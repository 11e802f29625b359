use shared_types::{AppError, DashboardScope, StatsSummary, UserSummary};

use crate::http::ApiClient;

/// `GET /dashboard/stats` for any signed-in user.
pub async fn fetch_dashboard_stats(client: &ApiClient, token: &str) -> Result<StatsSummary, AppError> {
    client.get_json(DashboardScope::User.stats_path(), token).await
}

/// `GET /dashboard/users` for any signed-in user.
pub async fn fetch_dashboard_users(client: &ApiClient, token: &str) -> Result<Vec<UserSummary>, AppError> {
    client.get_json(DashboardScope::User.users_path(), token).await
}
