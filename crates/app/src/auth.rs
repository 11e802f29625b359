use dioxus::prelude::*;
use shared_types::{decode_claims, AdminProfile, Claims};

use crate::storage;

/// Global authentication state.
///
/// `restored` stays false until the persisted token has been read back, so
/// guards do not redirect a signed-in user during startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub token: Signal<String>,
    pub restored: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            token: Signal::new(String::new()),
            restored: Signal::new(false),
        }
    }

    pub fn token(&self) -> String {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.read().is_empty()
    }

    pub fn is_restored(&self) -> bool {
        *self.restored.read()
    }

    pub fn set_token(&mut self, token: &str) {
        self.token.set(token.trim().to_string());
    }

    pub fn clear(&mut self) {
        self.token.set(String::new());
    }

    /// Claims of the current token, if it decodes.
    pub fn claims(&self) -> Option<Claims> {
        decode_claims(&self.token.read()).ok()
    }

    pub fn admin_profile(&self) -> Option<AdminProfile> {
        self.claims().and_then(|c| c.admin_profile())
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to check if the current token carries the admin role.
pub fn use_is_admin() -> bool {
    let auth = use_auth();
    auth.claims().map(|c| c.is_admin()).unwrap_or(false)
}

/// Restore the token from storage once, then mirror every change back.
///
/// Call once from the root component after the `AuthState` context exists.
pub fn use_token_persistence(storage_key: &'static str) {
    let mut auth = use_auth();

    use_future(move || async move {
        if let Some(token) = storage::load_token(storage_key).await {
            tracing::info!("restored persisted token");
            auth.set_token(&token);
        }
        auth.restored.set(true);
    });

    use_effect(move || {
        let token = auth.token.read().clone();
        let restored = *auth.restored.read();
        if let Some(action) = storage::mirror_action(restored, &token) {
            storage::persist(storage_key, &action);
        }
    });
}
