use api_client::{config::config, load_stats, load_users, ApiClient};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdDownload, LdTrendingUp};
use dioxus_free_icons::Icon;
use shared_types::{DashboardScope, StatsSummary};
use shared_ui::{LoadingSpinner, Panel, StatAccent, StatCard};

use crate::auth::use_auth;
use crate::components::UserList;

/// Greeting for the header, falling back when the token names nobody.
fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("Welcome back, {name}"),
        _ => "Welcome back".to_string(),
    }
}

/// Dashboard for any signed-in user.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();

    let welcome = use_memo(move || {
        let claims = auth.claims();
        greeting(claims.as_ref().and_then(|c| c.display_name()))
    });

    let stats = use_resource(move || {
        let token = auth.token();
        async move {
            let client = ApiClient::from_config(config());
            load_stats(&client, DashboardScope::User, &token).await.value
        }
    });

    let users = use_resource(move || {
        let token = auth.token();
        async move {
            let client = ApiClient::from_config(config());
            load_users(&client, DashboardScope::User, &token).await.value
        }
    });

    let stats = stats.read().as_ref().cloned();
    let users = users.read().as_ref().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            div { class: "dashboard-header",
                div { class: "dashboard-heading",
                    h1 { class: "dashboard-title", "Dashboard" }
                    p { class: "dashboard-subtitle", "{welcome}" }
                }
            }

            match stats {
                None => rsx! { LoadingSpinner { message: "Loading dashboard..." } },
                Some(stats) => rsx! { DownloadStatsGrid { stats } },
            }

            Panel { title: "Recent Users",
                match users {
                    None => rsx! { LoadingSpinner { message: "Loading users..." } },
                    Some(users) => rsx! { UserList { users } },
                }
            }
        }
    }
}

#[component]
fn DownloadStatsGrid(stats: StatsSummary) -> Element {
    rsx! {
        div { class: "stats-grid",
            StatCard {
                title: "Total Downloads",
                value: stats.system.total_downloads,
                accent: StatAccent::Green,
                icon: rsx! { Icon::<LdDownload> { icon: LdDownload, width: 24, height: 24 } },
            }
            StatCard {
                title: "Downloads Last 7 Days",
                value: stats.recent_activity.downloads_last_7_days,
                accent: StatAccent::Blue,
                icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 24, height: 24 } },
            }
            StatCard {
                title: "Active Users",
                value: stats.system.active_users,
                accent: StatAccent::Purple,
                icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 24, height: 24 } },
            }
        }
    }
}
