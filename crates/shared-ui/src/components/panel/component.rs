use dioxus::prelude::*;

pub const PANEL_STYLE: Asset = asset!("./style.css");

/// White card with an optional titled header.
#[component]
pub fn Panel(
    #[props(default)] title: Option<String>,
    #[props(default)] subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        section { class: "panel",
            if let Some(title) = title {
                header { class: "panel-header",
                    h2 { class: "panel-title", "{title}" }
                    if let Some(subtitle) = subtitle {
                        p { class: "panel-subtitle", "{subtitle}" }
                    }
                }
            }
            div { class: "panel-body", {children} }
        }
    }
}
