use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Catch-all for unmatched paths. Signed-in users are pointed back at their
/// dashboard, everyone else at the landing page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let auth = use_auth();
    let path = format!("/{}", route.join("/"));

    let (target, label) = if auth.is_authenticated() {
        (Route::Dashboard {}, "Go to dashboard")
    } else {
        (Route::Home {}, "Go to start page")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                span { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Nothing here" }
                p { class: "not-found-message",
                    "No page lives at "
                    code { "{path}" }
                    "."
                }
                Link { to: target, class: "not-found-link", "{label}" }
            }
        }
    }
}
