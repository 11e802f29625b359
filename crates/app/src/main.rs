use dioxus::prelude::*;

mod auth;
mod components;
mod routes;
mod storage;

use auth::{use_token_persistence, AuthState};
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    // `launch` installs the tracing subscriber (browser console on web).
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);

    let config = api_client::config::config();
    use_token_persistence(&config.auth.token_key);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::SharedStyles {}
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
