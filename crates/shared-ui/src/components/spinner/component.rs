use dioxus::prelude::*;

pub const SPINNER_STYLE: Asset = asset!("./style.css");

/// Centered spinner with a caption.
#[component]
pub fn LoadingSpinner(message: String) -> Element {
    rsx! {
        div { class: "spinner-screen", role: "status",
            div { class: "spinner-ring" }
            p { class: "spinner-caption", "{message}" }
        }
    }
}
