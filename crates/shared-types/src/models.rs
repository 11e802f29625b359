use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::claims::ADMIN_CLAIM_VALUE;

/// Which endpoint pair a dashboard view reads from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DashboardScope {
    /// `/admin/stats` and `/admin/users`.
    Admin,
    /// `/dashboard/stats` and `/dashboard/users`.
    User,
}

impl DashboardScope {
    pub fn stats_path(&self) -> &'static str {
        match self {
            DashboardScope::Admin => "/admin/stats",
            DashboardScope::User => "/dashboard/stats",
        }
    }

    pub fn users_path(&self) -> &'static str {
        match self {
            DashboardScope::Admin => "/admin/users",
            DashboardScope::User => "/dashboard/users",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardScope::Admin => "admin",
            DashboardScope::User => "user",
        }
    }
}

/// Reads an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// System-wide counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SystemStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_users: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_downloads: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_users: i64,
}

/// Counters over a recent window.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecentActivity {
    #[serde(default, deserialize_with = "null_as_default")]
    pub downloads_last_7_days: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub new_users_today: i64,
}

/// Aggregate statistics served by the stats endpoints.
///
/// `Default` is the all-zero summary shown when the fetch fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatsSummary {
    #[serde(default)]
    pub system: SystemStats,
    #[serde(default)]
    pub recent_activity: RecentActivity,
}

impl StatsSummary {
    /// Users other than the administrator account itself.
    pub fn regular_user_count(&self) -> i64 {
        self.system.total_users.saturating_sub(1).max(0)
    }
}

/// Per-user counters nested in some user listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub download_count: i64,
}

/// A user record as listed by the users endpoints. Display only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, alias = "downloads", deserialize_with = "null_as_default")]
    pub total_downloads: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<UserStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl UserSummary {
    /// Downloads for display; the nested `stats` block wins when present.
    pub fn download_count(&self) -> i64 {
        self.stats
            .as_ref()
            .map(|s| s.download_count)
            .unwrap_or(self.total_downloads)
    }

    /// Uppercased first character of the username, for avatar fallbacks.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Join date as `YYYY-MM-DD`. Accepts RFC 3339 timestamps and plain
    /// dates; anything else is shown verbatim.
    pub fn joined_on(&self) -> String {
        if let Ok(ts) = DateTime::parse_from_rfc3339(&self.created_at) {
            return ts.with_timezone(&Utc).date_naive().to_string();
        }
        if let Ok(date) = NaiveDate::parse_from_str(&self.created_at, "%Y-%m-%d") {
            return date.to_string();
        }
        if let Some((date, _)) = self.created_at.split_once(['T', ' ']) {
            if let Ok(date) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                return date.to_string();
            }
        }
        self.created_at.clone()
    }

    /// Heuristic used by the admin view to hide administrator accounts:
    /// `role == "admin"`, `sub == "admin"`, or "admin" anywhere in the
    /// username regardless of case.
    pub fn looks_like_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_CLAIM_VALUE)
            || self.sub.as_deref() == Some(ADMIN_CLAIM_VALUE)
            || self.username.to_lowercase().contains(ADMIN_CLAIM_VALUE)
    }
}

/// Drop every record that looks like an admin account, keeping order.
pub fn without_admin_accounts(users: Vec<UserSummary>) -> Vec<UserSummary> {
    users.into_iter().filter(|u| !u.looks_like_admin()).collect()
}

/// Admin identity shown in the admin view header, read from the token claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminProfile {
    pub username: String,
    pub email: String,
    /// Picture URL from the `picture` claim; the header falls back to initials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}
