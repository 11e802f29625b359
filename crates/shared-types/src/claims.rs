//! Client-side decoding of bearer token claims.
//!
//! Tokens are compact JWS strings (`header.payload.signature`). Only the
//! payload is read, and the signature is never checked: whatever is decoded
//! here is a hint for the UI and carries no trust. The API re-checks every
//! request on its own.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::AdminProfile;

/// Subject / role value that marks an administrator.
pub const ADMIN_CLAIM_VALUE: &str = "admin";

/// Number of dot-separated segments in a compact token.
const TOKEN_SEGMENTS: usize = 3;

/// Payload decoder. URL-safe characters are rewritten to the standard
/// alphabet before decoding, padding is optional and stray trailing bits are
/// tolerated, the same leniency browsers give `atob`.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Reasons a token payload could not be turned into claims.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClaimsError {
    #[error("token has {0} segments, expected 3")]
    SegmentCount(usize),
    #[error("token payload is not valid base64: {0}")]
    InvalidBase64(String),
    #[error("token payload is not valid UTF-8")]
    InvalidUtf8,
    #[error("token payload is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("token payload is JSON but not an object")]
    NotAnObject,
}

/// Decoded token payload.
///
/// Holds the exact JSON object from the token, unknown claims included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Look up a claim that is expected to be a string.
    /// Non-string values (numbers, objects) read as absent.
    pub fn str_claim(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn sub(&self) -> Option<&str> {
        self.str_claim("sub")
    }

    pub fn role(&self) -> Option<&str> {
        self.str_claim("role")
    }

    pub fn username(&self) -> Option<&str> {
        self.str_claim("username")
    }

    pub fn email(&self) -> Option<&str> {
        self.str_claim("email")
    }

    pub fn picture(&self) -> Option<&str> {
        self.str_claim("picture")
    }

    /// `sub == "admin"` or `role == "admin"`, compared exactly.
    pub fn is_admin(&self) -> bool {
        self.sub() == Some(ADMIN_CLAIM_VALUE) || self.role() == Some(ADMIN_CLAIM_VALUE)
    }

    /// Name to greet the user with: `username`, then `sub`.
    pub fn display_name(&self) -> Option<&str> {
        self.username().or_else(|| self.sub())
    }

    /// Header details for the admin view. Requires both `username` and `email`.
    pub fn admin_profile(&self) -> Option<AdminProfile> {
        let username = self.username()?;
        let email = self.email()?;
        Some(AdminProfile {
            username: username.to_string(),
            email: email.to_string(),
            avatar_url: self.picture().map(str::to_string),
        })
    }
}

/// Decode the claims of a compact token without verifying its signature.
pub fn decode_claims(token: &str) -> Result<Claims, ClaimsError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != TOKEN_SEGMENTS {
        return Err(ClaimsError::SegmentCount(segments.len()));
    }

    let normalized = segments[1].replace('-', "+").replace('_', "/");
    let bytes = PAYLOAD_ENGINE
        .decode(normalized.as_bytes())
        .map_err(|e| ClaimsError::InvalidBase64(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|_| ClaimsError::InvalidUtf8)?;

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Ok(Claims(map)),
        Ok(_) => Err(ClaimsError::NotAnObject),
        Err(e) => Err(ClaimsError::InvalidJson(e.to_string())),
    }
}
