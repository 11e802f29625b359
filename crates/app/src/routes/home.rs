use dioxus::prelude::*;
use shared_types::decode_claims;

use crate::auth::{use_auth, use_is_admin};
use crate::routes::Route;

/// Where a freshly pasted token should land.
fn landing_route(token: &str) -> Route {
    match decode_claims(token) {
        Ok(claims) if claims.is_admin() => Route::AdminDashboard {},
        _ => Route::Dashboard {},
    }
}

/// Public landing page.
///
/// Sign-in happens elsewhere; the resulting token is pasted here and kept
/// in the token store.
#[component]
pub fn Home() -> Element {
    let mut auth = use_auth();
    let is_admin = use_is_admin();
    let mut draft = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let token = draft.read().trim().to_string();
        if token.is_empty() {
            return;
        }
        auth.set_token(&token);
        draft.set(String::new());
        navigator().push(landing_route(&token));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            h1 { class: "home-title", "Downloads Dashboard" }
            p { class: "home-lead",
                "Track download activity and the people behind it."
            }

            if auth.is_authenticated() {
                div { class: "home-links",
                    Link { to: Route::Dashboard {}, class: "home-link", "Open dashboard" }
                    if is_admin {
                        Link { to: Route::AdminDashboard {}, class: "home-link", "Open admin dashboard" }
                    }
                }
            } else {
                form { class: "home-token-form", onsubmit: handle_submit,
                    label { r#for: "token", "Access token" }
                    textarea {
                        id: "token",
                        class: "home-token-input",
                        placeholder: "Paste the token issued at sign-in",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button { class: "home-token-submit", r#type: "submit", "Continue" }
                }
            }
        }
    }
}
