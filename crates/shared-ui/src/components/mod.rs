// Plain markup components
pub mod badge;
pub mod empty_state;
pub mod panel;
pub mod spinner;
pub mod stat_card;

// Primitive wrappers
pub mod avatar;
pub mod toast;

pub use avatar::*;
pub use badge::*;
pub use empty_state::*;
pub use panel::*;
pub use spinner::*;
pub use stat_card::*;
pub use toast::*;

use dioxus::prelude::*;

/// Stylesheets for every shared component. Render once near the root.
#[component]
pub fn SharedStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: AVATAR_STYLE }
        document::Link { rel: "stylesheet", href: BADGE_STYLE }
        document::Link { rel: "stylesheet", href: EMPTY_STATE_STYLE }
        document::Link { rel: "stylesheet", href: PANEL_STYLE }
        document::Link { rel: "stylesheet", href: SPINNER_STYLE }
        document::Link { rel: "stylesheet", href: STAT_CARD_STYLE }
        document::Link { rel: "stylesheet", href: TOAST_STYLE }
    }
}
