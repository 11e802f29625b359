use dioxus::prelude::*;

pub const EMPTY_STATE_STYLE: Asset = asset!("./style.css");

#[component]
pub fn EmptyState(title: String, #[props(default)] hint: Option<String>) -> Element {
    rsx! {
        div { class: "empty-state",
            p { "{title}" }
            if let Some(hint) = hint {
                p { class: "empty-state-hint", "{hint}" }
            }
        }
    }
}
