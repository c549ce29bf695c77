//! `document.cookie`-style string parsing.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use crate::config::CSRF_COOKIE_NAME;
use crate::error::LoginError;
use crate::model::CsrfToken;

/// Find the raw value of cookie `name` in a `k=v; k2=v2` string.
///
/// The value is the text between the first and second `=` of the matching
/// row. An empty value is treated as absent.
#[must_use]
pub fn find_cookie<'a>(cookie_string: &'a str, name: &str) -> Option<&'a str> {
    cookie_string
        .split("; ")
        .find(|row| row.strip_prefix(name).is_some_and(|rest| rest.starts_with('=')))
        .and_then(|row| row.split('=').nth(1))
        .filter(|value| !value.is_empty())
}

/// Pull the `XSRF-TOKEN` cookie out of a cookie string and decode it.
///
/// # Errors
///
/// [`LoginError::MissingCsrfToken`] when the cookie is absent or empty,
/// [`LoginError::InvalidCsrfToken`] when it cannot be percent-decoded.
pub fn csrf_token(cookie_string: Option<&str>) -> Result<CsrfToken, LoginError> {
    let raw = cookie_string
        .and_then(|cookies| find_cookie(cookies, CSRF_COOKIE_NAME))
        .ok_or(LoginError::MissingCsrfToken)?;
    CsrfToken::decode(raw)
}
