use dioxus::prelude::*;
use shared_types::UserSummary;
use shared_ui::{AvatarSize, EmptyState, UserAvatar};

/// Avatar tones cycled through by row position.
const AVATAR_TONES: [&str; 4] = ["blue", "green", "purple", "amber"];

fn tone_for(index: usize) -> String {
    AVATAR_TONES[index % AVATAR_TONES.len()].to_string()
}

/// Rows of user records, or an empty state when there are none.
#[component]
pub fn UserList(users: Vec<UserSummary>) -> Element {
    if users.is_empty() {
        return rsx! {
            EmptyState {
                title: "No users found.",
                hint: "User data will appear here when available.",
            }
        };
    }

    rsx! {
        ul { class: "user-list",
            for (index, user) in users.iter().enumerate() {
                UserRow { key: "{user.id}", user: user.clone(), tone: tone_for(index) }
            }
        }
    }
}

#[component]
fn UserRow(user: UserSummary, tone: String) -> Element {
    let downloads = user.download_count();
    let joined = user.joined_on();

    rsx! {
        li { class: "user-row",
            UserAvatar { initials: user.initial(), size: AvatarSize::Small, tone }
            div { class: "user-row-identity",
                p { class: "user-row-name", "{user.username}" }
                p { class: "user-row-email", "{user.email}" }
            }
            div { class: "user-row-meta",
                p { class: "user-row-downloads", "{downloads} downloads" }
                if !joined.is_empty() {
                    p { class: "user-row-joined", "Joined {joined}" }
                }
            }
        }
    }
}
