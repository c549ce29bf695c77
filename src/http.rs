//! Backend client over `reqwest` with a shared cookie jar.
//!
//! The jar plays the part of the browser cookie store: the CSRF endpoint
//! sets `XSRF-TOKEN` into it, [`JarCookies`] reads it back, and every request
//! sends whatever it holds.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use async_trait::async_trait;
use auth::config::CSRF_HEADER_NAME;
use auth::{ApiConfig, AuthApi, CookieReader, Credentials, CsrfToken, LoginError, LoginResponse};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};

use crate::error::CliError;

pub struct HttpAuthApi {
    http: reqwest::Client,
    jar: Arc<Jar>,
    config: ApiConfig,
    login_url: Url,
}

impl HttpAuthApi {
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, CliError> {
        let login_url = Url::parse(&config.login_url())
            .map_err(|e| CliError::InvalidBaseUrl(format!("{}: {e}", config.base_url())))?;
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(|e| CliError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, jar, config, login_url })
    }

    /// A reader over this client's cookie jar, scoped to the login URL.
    #[must_use]
    pub fn cookies(&self) -> JarCookies {
        JarCookies { jar: Arc::clone(&self.jar), url: self.login_url.clone() }
    }
}

fn network(e: reqwest::Error) -> LoginError {
    LoginError::Network(e.to_string())
}

fn ensure_success(status: StatusCode) -> Result<(), LoginError> {
    if status.is_success() { Ok(()) } else { Err(LoginError::status(status.as_u16())) }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn fetch_csrf_cookie(&self) -> Result<(), LoginError> {
        let response = self
            .http
            .get(self.config.csrf_cookie_url())
            .send()
            .await
            .map_err(network)?;
        ensure_success(response.status())
    }

    async fn submit_credentials(
        &self,
        credentials: &Credentials,
        csrf: &CsrfToken,
    ) -> Result<LoginResponse, LoginError> {
        let response = self
            .http
            .post(self.login_url.clone())
            .header(CSRF_HEADER_NAME, csrf.as_str())
            .header(ACCEPT, "application/json")
            .json(credentials)
            .send()
            .await
            .map_err(network)?;
        ensure_success(response.status())?;

        let body = response.text().await.map_err(network)?;
        Ok(LoginResponse::from_body(&body))
    }
}

/// [`CookieReader`] over a `reqwest` jar.
pub struct JarCookies {
    jar: Arc<Jar>,
    url: Url,
}

impl CookieReader for JarCookies {
    fn cookie_string(&self) -> Option<String> {
        let header = self.jar.cookies(&self.url)?;
        header.to_str().ok().map(str::to_owned)
    }
}
