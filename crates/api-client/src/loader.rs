//! Best-effort loading for the dashboard views.
//!
//! A failed fetch never surfaces as an error: stats fall back to the
//! all-zero summary and user lists to an empty list. The error is kept
//! alongside the fallback so the view can decide whether to notify.

use shared_types::{without_admin_accounts, AppError, DashboardScope, StatsSummary, UserSummary};

use crate::api;
use crate::http::ApiClient;

/// Something that can answer the two dashboard queries.
#[allow(async_fn_in_trait)]
pub trait DashboardSource {
    async fn stats(&self, scope: DashboardScope, token: &str) -> Result<StatsSummary, AppError>;
    async fn users(&self, scope: DashboardScope, token: &str) -> Result<Vec<UserSummary>, AppError>;
}

impl DashboardSource for ApiClient {
    async fn stats(&self, scope: DashboardScope, token: &str) -> Result<StatsSummary, AppError> {
        match scope {
            DashboardScope::Admin => api::fetch_admin_stats(self, token).await,
            DashboardScope::User => api::fetch_dashboard_stats(self, token).await,
        }
    }

    async fn users(&self, scope: DashboardScope, token: &str) -> Result<Vec<UserSummary>, AppError> {
        match scope {
            DashboardScope::Admin => api::fetch_admin_users(self, token).await,
            DashboardScope::User => api::fetch_dashboard_users(self, token).await,
        }
    }
}

/// A value that is always renderable, plus the error that forced a fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub error: Option<AppError>,
}

impl<T> Loaded<T> {
    pub fn fresh(value: T) -> Self {
        Self { value, error: None }
    }

    pub fn fallback(value: T, error: AppError) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Fetch stats, substituting zeros on any failure.
pub async fn load_stats<S: DashboardSource>(
    source: &S,
    scope: DashboardScope,
    token: &str,
) -> Loaded<StatsSummary> {
    match source.stats(scope, token).await {
        Ok(stats) => {
            tracing::info!(scope = scope.as_str(), "stats loaded");
            Loaded::fresh(stats)
        }
        Err(err) => {
            tracing::warn!(scope = scope.as_str(), error = %err, "stats unavailable, showing zeros");
            Loaded::fallback(StatsSummary::default(), err)
        }
    }
}

/// Fetch the user listing, substituting an empty list on any failure.
///
/// For the admin scope, records that look like admin accounts are removed
/// before returning.
pub async fn load_users<S: DashboardSource>(
    source: &S,
    scope: DashboardScope,
    token: &str,
) -> Loaded<Vec<UserSummary>> {
    match source.users(scope, token).await {
        Ok(users) => {
            let fetched = users.len();
            let users = match scope {
                DashboardScope::Admin => without_admin_accounts(users),
                DashboardScope::User => users,
            };
            tracing::info!(scope = scope.as_str(), fetched, shown = users.len(), "users loaded");
            Loaded::fresh(users)
        }
        Err(err) => {
            tracing::warn!(scope = scope.as_str(), error = %err, "users unavailable, showing empty list");
            Loaded::fallback(Vec::new(), err)
        }
    }
}

/// Both halves of a dashboard, each with its own fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub stats: Loaded<StatsSummary>,
    pub users: Loaded<Vec<UserSummary>>,
}

/// Run both loaders concurrently and wait for both to settle.
///
/// Neither result depends on the other; joining only marks the point where
/// the whole view is ready.
pub async fn load_dashboard<S: DashboardSource>(
    source: &S,
    scope: DashboardScope,
    token: &str,
) -> DashboardData {
    let (stats, users) = futures::join!(
        load_stats(source, scope, token),
        load_users(source, scope, token)
    );
    DashboardData { stats, users }
}

pub async fn load_admin_dashboard<S: DashboardSource>(source: &S, token: &str) -> DashboardData {
    load_dashboard(source, DashboardScope::Admin, token).await
}

pub async fn load_user_dashboard<S: DashboardSource>(source: &S, token: &str) -> DashboardData {
    load_dashboard(source, DashboardScope::User, token).await
}
