//! Backend location and the fixed names shared with it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_BASE_URL_ENV: &str = "NEXT_PUBLIC_API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

pub const CSRF_COOKIE_PATH: &str = "/sanctum/csrf-cookie";
pub const LOGIN_PATH: &str = "/api/admin/login";

pub const CSRF_COOKIE_NAME: &str = "XSRF-TOKEN";
pub const CSRF_HEADER_NAME: &str = "X-XSRF-TOKEN";

/// Key the session token is stored under in persistent storage.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Where a successful login navigates to.
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Normalize a raw base URL. Unset or blank falls back to
    /// [`DEFAULT_API_BASE_URL`]; trailing slashes are dropped.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    /// Read `NEXT_PUBLIC_API_BASE_URL` from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(API_BASE_URL_ENV).ok().as_deref())
    }

    /// Read `NEXT_PUBLIC_API_BASE_URL` as it was when the crate was built.
    ///
    /// WASM bundles have no process environment; the value is inlined.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("NEXT_PUBLIC_API_BASE_URL"))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn csrf_cookie_url(&self) -> String {
        format!("{}{CSRF_COOKIE_PATH}", self.base_url)
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}{LOGIN_PATH}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}
