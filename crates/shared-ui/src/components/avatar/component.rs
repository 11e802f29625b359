use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

pub const AVATAR_STYLE: Asset = asset!("./style.css");

/// Avatar sizes used across the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    #[default]
    Small,
    Large,
}

impl AvatarSize {
    fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "avatar-sm",
            AvatarSize::Large => "avatar-lg",
        }
    }
}

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dash-avatar", None, false));

    rsx! {
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarImage(mut props: prim::AvatarImageProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dash-avatar-image", None, false));

    rsx! {
        prim::AvatarImage { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dash-avatar-fallback", None, false));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Avatar showing an optional picture, falling back to `initials`.
#[component]
pub fn UserAvatar(
    initials: String,
    #[props(default)] image_url: Option<String>,
    #[props(default)] size: AvatarSize,
    #[props(default)] tone: Option<String>,
) -> Element {
    let fallback_class = match tone.as_deref() {
        Some(tone) => format!("avatar-tone-{tone}"),
        None => String::new(),
    };

    rsx! {
        div { class: "avatar-frame {size.class()}",
            Avatar {
                if let Some(src) = image_url {
                    AvatarImage { src: src, alt: "{initials}" }
                }
                AvatarFallback { class: "{fallback_class}", "{initials}" }
            }
        }
    }
}
