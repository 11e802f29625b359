use dioxus::prelude::*;

pub const STAT_CARD_STYLE: Asset = asset!("./style.css");

/// Accent colour of the icon tile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatAccent {
    #[default]
    Blue,
    Green,
    Purple,
}

impl StatAccent {
    fn class(&self) -> &'static str {
        match self {
            StatAccent::Blue => "accent-blue",
            StatAccent::Green => "accent-green",
            StatAccent::Purple => "accent-purple",
        }
    }
}

/// A single counter with a label and an icon tile.
#[component]
pub fn StatCard(
    title: String,
    value: i64,
    #[props(default)] accent: StatAccent,
    #[props(default)] icon: Element,
) -> Element {
    rsx! {
        div { class: "stat-card",
            div { class: "stat-icon {accent.class()}", {icon} }
            div { class: "stat-text",
                h3 { class: "stat-title", "{title}" }
                p { class: "stat-value", "{value}" }
            }
        }
    }
}
