use api_client::{config::config, load_stats, load_users, ApiClient, Loaded};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdUserPlus, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{AdminProfile, DashboardScope, StatsSummary};
use shared_ui::{
    use_toast, AvatarSize, Badge, BadgeVariant, LoadingSpinner, Panel, StatAccent, StatCard,
    ToastOptions, UserAvatar,
};

use crate::auth::use_auth;
use crate::components::UserList;

/// Avatar text when the admin has no picture claim.
const ADMIN_AVATAR_FALLBACK: &str = "AD";

/// Toast text for a load that fell back, if it did.
fn fallback_toast<T>(subject: &str, loaded: &Loaded<T>) -> Option<String> {
    loaded
        .error
        .as_ref()
        .map(|err| format!("Could not load {subject}. {}", err.friendly_message()))
}

/// Administrator view: system counters and the most recent regular users.
///
/// Stats and users load independently; a failure in either falls back to
/// zeros or an empty list and raises a toast.
#[component]
pub fn AdminDashboard() -> Element {
    let auth = use_auth();
    let toast = use_toast();

    let profile = use_memo(move || auth.admin_profile());

    let stats = use_resource(move || {
        let token = auth.token();
        async move {
            let client = ApiClient::from_config(config());
            let loaded = load_stats(&client, DashboardScope::Admin, &token).await;
            if let Some(message) = fallback_toast("statistics", &loaded) {
                toast.error(message, ToastOptions::new());
            }
            loaded.value
        }
    });

    let users = use_resource(move || {
        let token = auth.token();
        async move {
            let client = ApiClient::from_config(config());
            let loaded = load_users(&client, DashboardScope::Admin, &token).await;
            if let Some(message) = fallback_toast("users", &loaded) {
                toast.error(message, ToastOptions::new());
            }
            loaded.value
        }
    });

    let stats = stats.read().as_ref().cloned();
    let users = users.read().as_ref().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            AdminHeader { profile: profile() }

            match stats {
                None => rsx! { LoadingSpinner { message: "Loading admin dashboard..." } },
                Some(stats) => rsx! { AdminStatsGrid { stats } },
            }

            Panel {
                title: "Recent Regular Users",
                subtitle: "Admin users are hidden from this list",
                match users {
                    None => rsx! { LoadingSpinner { message: "Loading users..." } },
                    Some(users) => rsx! { UserList { users } },
                }
            }
        }
    }
}

/// Title row with the signed-in administrator's identity.
#[component]
fn AdminHeader(profile: Option<AdminProfile>) -> Element {
    rsx! {
        div { class: "dashboard-header",
            if let Some(profile) = profile {
                UserAvatar {
                    initials: ADMIN_AVATAR_FALLBACK,
                    image_url: profile.avatar_url.clone(),
                    size: AvatarSize::Large,
                    tone: "admin",
                }
                div { class: "dashboard-heading",
                    h1 { class: "dashboard-title", "Admin Dashboard" }
                    p { class: "dashboard-subtitle",
                        span { class: "dashboard-username", "{profile.username}" }
                        span { class: "dashboard-email", "{profile.email}" }
                    }
                }
                Badge { variant: BadgeVariant::Danger, "ADMIN" }
            } else {
                div { class: "dashboard-heading",
                    h1 { class: "dashboard-title", "Admin Dashboard" }
                }
                Badge { variant: BadgeVariant::Danger, "ADMIN" }
            }
        }
    }
}

#[component]
fn AdminStatsGrid(stats: StatsSummary) -> Element {
    rsx! {
        div { class: "stats-grid",
            StatCard {
                title: "Total Regular Users",
                value: stats.regular_user_count(),
                accent: StatAccent::Blue,
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
            }
            StatCard {
                title: "Total Downloads",
                value: stats.system.total_downloads,
                accent: StatAccent::Green,
                icon: rsx! { Icon::<LdDownload> { icon: LdDownload, width: 24, height: 24 } },
            }
            StatCard {
                title: "New Users Last 7 Days",
                value: stats.recent_activity.downloads_last_7_days,
                accent: StatAccent::Purple,
                icon: rsx! { Icon::<LdUserPlus> { icon: LdUserPlus, width: 24, height: 24 } },
            }
        }
    }
}
