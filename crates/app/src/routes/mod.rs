pub mod admin_dashboard;
pub mod dashboard;
pub mod home;
pub mod not_found;

use crate::auth::{use_auth, use_is_admin, AuthState};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdLogOut, LdShield};
use dioxus_free_icons::Icon;
use shared_types::{require_admin, require_auth, GuardDecision};

use admin_dashboard::AdminDashboard;
use dashboard::Dashboard;
use home::Home;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[layout(RequireAuth)]
            #[route("/dashboard")]
            Dashboard {},
        #[end_layout]
        #[layout(RequireAdmin)]
            #[route("/admin-dashboard")]
            AdminDashboard {},
        #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Where a refused guard sends the user.
    pub fn for_redirect(decision: &GuardDecision) -> Option<Route> {
        match decision {
            GuardDecision::Admit => None,
            GuardDecision::RedirectToLanding => Some(Route::Home {}),
            GuardDecision::RedirectToDashboard => Some(Route::Dashboard {}),
        }
    }
}

/// Placeholder shown while a guard waits or redirects.
#[component]
fn GuardPlaceholder(message: String) -> Element {
    rsx! {
        div { class: "auth-guard-loading",
            p { "{message}" }
        }
    }
}

/// What a guard shows for the current auth state.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    /// The persisted token has not been read back yet.
    Pending,
    Render,
    Redirect(Route),
}

pub fn guard_outcome(restored: bool, decision: &GuardDecision) -> GuardOutcome {
    if !restored {
        return GuardOutcome::Pending;
    }
    match Route::for_redirect(decision) {
        None => GuardOutcome::Render,
        Some(target) => GuardOutcome::Redirect(target),
    }
}

/// Render the outlet or replace the location, depending on `decision`.
fn apply_guard(auth: &AuthState, decision: GuardDecision) -> Element {
    match guard_outcome(auth.is_restored(), &decision) {
        GuardOutcome::Pending => rsx! { GuardPlaceholder { message: "Loading..." } },
        GuardOutcome::Render => rsx! { Outlet::<Route> {} },
        GuardOutcome::Redirect(target) => {
            tracing::debug!(?decision, "guard refused route");
            navigator().replace(target);
            rsx! { GuardPlaceholder { message: "Redirecting..." } }
        }
    }
}

/// Admits any non-empty token.
#[component]
fn RequireAuth() -> Element {
    let auth = use_auth();
    let decision = require_auth(&auth.token());
    apply_guard(&auth, decision)
}

/// Admits tokens whose claims name an administrator.
#[component]
fn RequireAdmin() -> Element {
    let auth = use_auth();
    let decision = require_admin(&auth.token());
    apply_guard(&auth, decision)
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "app-nav-link active"
    } else {
        "app-nav-link"
    }
}

/// Top bar with navigation and sign-out.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let is_admin = use_is_admin();
    let signed_in = auth.is_authenticated();
    let display_name = auth
        .claims()
        .and_then(|c| c.display_name().map(str::to_string));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            header { class: "app-header",
                Link { to: Route::Home {}, class: "app-brand", "Downloads Dashboard" }

                if signed_in {
                    nav { class: "app-nav",
                        Link {
                            to: Route::Dashboard {},
                            class: nav_class(matches!(route, Route::Dashboard {})),
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                            "Dashboard"
                        }
                        if is_admin {
                            Link {
                                to: Route::AdminDashboard {},
                                class: nav_class(matches!(route, Route::AdminDashboard {})),
                                Icon::<LdShield> { icon: LdShield, width: 16, height: 16 }
                                "Admin"
                            }
                        }
                    }
                    div { class: "app-header-user",
                        if let Some(name) = display_name {
                            span { class: "app-header-name", "{name}" }
                        }
                        button {
                            class: "app-sign-out",
                            onclick: move |_| {
                                tracing::info!("signing out");
                                auth.clear();
                                navigator().replace(Route::Home {});
                            },
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            "Sign out"
                        }
                    }
                }
            }

            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
