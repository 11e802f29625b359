//! Token persistence in the browser's `localStorage`.
//!
//! Scripts are built as plain strings so they can be checked without a
//! webview; keys and values are embedded as JSON string literals.

use dioxus::prelude::*;

/// What to do with the persisted copy after the in-memory token changes.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageAction<'a> {
    Store(&'a str),
    Remove,
}

/// An empty token clears storage, anything else overwrites it.
pub fn storage_action(token: &str) -> StorageAction<'_> {
    if token.is_empty() {
        StorageAction::Remove
    } else {
        StorageAction::Store(token)
    }
}

fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

pub fn load_script(key: &str) -> String {
    format!("return localStorage.getItem({});", js_string(key))
}

pub fn store_script(key: &str, token: &str) -> String {
    format!(
        "localStorage.setItem({}, {});",
        js_string(key),
        js_string(token)
    )
}

pub fn remove_script(key: &str) -> String {
    format!("localStorage.removeItem({});", js_string(key))
}

/// What the mirror should write after a token change. Nothing is written
/// until the persisted token has been read back, so startup cannot wipe it.
pub fn mirror_action(restored: bool, token: &str) -> Option<StorageAction<'_>> {
    restored.then(|| storage_action(token))
}

/// Script that performs `action` on `key`.
pub fn action_script(key: &str, action: &StorageAction<'_>) -> String {
    match action {
        StorageAction::Store(token) => store_script(key, token),
        StorageAction::Remove => remove_script(key),
    }
}

/// Read the persisted token. Missing, empty or unreadable values yield `None`.
pub async fn load_token(key: &str) -> Option<String> {
    match document::eval(&load_script(key)).join::<Option<String>>().await {
        Ok(token) => token.filter(|t| !t.trim().is_empty()),
        Err(e) => {
            tracing::warn!(error = ?e, "could not read persisted token");
            None
        }
    }
}

/// Apply `action` to the persisted copy.
pub fn persist(key: &str, action: &StorageAction<'_>) {
    tracing::debug!(remove = matches!(action, StorageAction::Remove), "syncing persisted token");
    document::eval(&action_script(key, action));
}
