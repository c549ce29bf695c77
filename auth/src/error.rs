//! Login error taxonomy.
//!
//! Every variant ends the attempt the same way: a destructive toast carrying
//! the `Display` text. Nothing is propagated past the flow.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors that abort a single login attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The backend could not be reached, or answered with a non-2xx status.
    #[error("{0}")]
    Network(String),

    /// No `XSRF-TOKEN` cookie was visible after the CSRF handshake.
    #[error("CSRF token tidak ditemukan")]
    MissingCsrfToken,

    /// The `XSRF-TOKEN` cookie held malformed percent-encoding.
    #[error("URI malformed: {0}")]
    InvalidCsrfToken(String),

    /// The login call succeeded at the transport level but carried no token.
    #[error("Login gagal: Token tidak diterima.")]
    MissingSessionToken,

    /// A required form field was left empty.
    #[error("{0} wajib diisi.")]
    MissingField(&'static str),

    /// The session token could not be written to persistent storage.
    #[error("storage write failed: {0}")]
    Storage(String),
}

impl LoginError {
    /// Build the error an HTTP collaborator reports for a non-2xx response.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self::Network(format!("Request failed with status code {status}"))
    }

    /// Stable machine-readable code, used in log fields.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "E_NETWORK",
            Self::MissingCsrfToken => "E_MISSING_CSRF_TOKEN",
            Self::InvalidCsrfToken(_) => "E_INVALID_CSRF_TOKEN",
            Self::MissingSessionToken => "E_MISSING_SESSION_TOKEN",
            Self::MissingField(_) => "E_MISSING_FIELD",
            Self::Storage(_) => "E_STORAGE",
        }
    }
}
