use dioxus::prelude::*;

pub const BADGE_STYLE: Asset = asset!("./style.css");

/// Colour scheme for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Success,
    Danger,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Success => "success",
            BadgeVariant::Danger => "danger",
        }
    }
}

/// Rounded pill label, e.g. the `ADMIN` marker in the admin header.
#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        span { class: "badge", "data-style": variant.class(),
            span { class: "badge-label", {children} }
        }
    }
}
