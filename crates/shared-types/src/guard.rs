//! Route guard decisions.
//!
//! These only decide what the UI shows. They read an unverified token, so
//! every protected endpoint must still enforce access on the API side.

use serde::{Deserialize, Serialize};

use crate::claims::{decode_claims, Claims};

/// Outcome of running a guard against the current token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GuardDecision {
    /// Render the protected view.
    Admit,
    /// Replace the current location with the public landing page (`/`).
    RedirectToLanding,
    /// Replace the current location with the regular dashboard (`/dashboard`).
    RedirectToDashboard,
}

impl GuardDecision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, GuardDecision::Admit)
    }

    /// Path the guard sends the user to, if it redirects.
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            GuardDecision::Admit => None,
            GuardDecision::RedirectToLanding => Some("/"),
            GuardDecision::RedirectToDashboard => Some("/dashboard"),
        }
    }
}

/// Admit any non-empty token.
pub fn require_auth(token: &str) -> GuardDecision {
    if token.is_empty() {
        tracing::debug!("no token present, redirecting to landing");
        GuardDecision::RedirectToLanding
    } else {
        GuardDecision::Admit
    }
}

/// Admit a non-empty token whose claims name an administrator.
///
/// Undecodable tokens are treated as non-admin.
pub fn require_admin(token: &str) -> GuardDecision {
    if !require_auth(token).is_admitted() {
        return GuardDecision::RedirectToLanding;
    }

    match decode_claims(token) {
        Ok(claims) => admin_decision(&claims),
        Err(err) => {
            tracing::warn!(error = %err, "could not decode token claims, treating as non-admin");
            GuardDecision::RedirectToDashboard
        }
    }
}

fn admin_decision(claims: &Claims) -> GuardDecision {
    if claims.is_admin() {
        GuardDecision::Admit
    } else {
        tracing::debug!(sub = ?claims.sub(), role = ?claims.role(), "not an admin, redirecting to dashboard");
        GuardDecision::RedirectToDashboard
    }
}
