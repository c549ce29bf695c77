//! Login data model: credentials, tokens, response body, outcome.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LoginError;

// =============================================================================
// CREDENTIALS
// =============================================================================

/// Email + password as typed into the login form.
///
/// Held only for the duration of one attempt; [`crate::LoginFlow::submit_login`]
/// takes it by value.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    /// Check the fields the form marks `required`.
    ///
    /// The email is trimmed; the password is taken verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::MissingField`] naming the first empty field.
    pub fn validate(self) -> Result<Self, LoginError> {
        let email = self.email.trim().to_owned();
        if email.is_empty() {
            return Err(LoginError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingField("password"));
        }
        Ok(Self { email, password: self.password })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// TOKENS
// =============================================================================

/// Anti-forgery token echoed back in `X-XSRF-TOKEN`.
///
/// Fetched right before each attempt and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Decode a raw, percent-encoded cookie value.
    ///
    /// Follows `decodeURIComponent`: `+` is left alone and a `%` that does not
    /// start a two-digit hex escape is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::InvalidCsrfToken`] on malformed escapes or when
    /// the decoded bytes are not UTF-8.
    pub fn decode(raw: &str) -> Result<Self, LoginError> {
        if !has_valid_escapes(raw) {
            return Err(LoginError::InvalidCsrfToken(raw.to_owned()));
        }
        let decoded = percent_decode_str(raw)
            .decode_utf8()
            .map_err(|_| LoginError::InvalidCsrfToken(raw.to_owned()))?;
        Ok(Self(decoded.into_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3);
            if !hex.is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit)) {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

/// Opaque session credential returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Lenient view over the `POST /api/admin/login` body.
///
/// Only `token` is read. Anything else the backend sends is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    token: Option<Value>,
}

impl LoginResponse {
    /// Parse a response body. A body that is not a JSON object yields an
    /// empty response rather than an error, so the caller reports a missing
    /// token instead of a parse failure.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Some(Value::String(token.into())) }
    }

    /// Extract the session token: a non-empty string, or a number rendered
    /// as text. `null`, `""`, booleans, arrays and objects count as absent.
    #[must_use]
    pub fn session_token(&self) -> Option<SessionToken> {
        match self.token.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(SessionToken::new(s.clone())),
            Value::Number(n) => Some(SessionToken::new(n.to_string())),
            _ => None,
        }
    }
}

// =============================================================================
// OUTCOME
// =============================================================================

/// Result of one login attempt as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success(SessionToken),
    Failure(String),
}

impl LoginOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
