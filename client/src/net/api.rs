//! Backend calls for the login flow over browser `fetch`.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, always with
//! `credentials: "include"` so the Sanctum cookies travel cross-origin.
//! Elsewhere: stubs returning a network error, since these endpoints are
//! only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use auth::{ApiConfig, AuthApi, Credentials, CsrfToken, LoginError, LoginResponse};

#[cfg(any(test, not(feature = "csr")))]
fn unavailable() -> LoginError {
    LoginError::Network("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
fn network(e: gloo_net::Error) -> LoginError {
    LoginError::Network(e.to_string())
}

pub struct BrowserAuthApi {
    config: ApiConfig,
}

impl BrowserAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl AuthApi for BrowserAuthApi {
    async fn fetch_csrf_cookie(&self) -> Result<(), LoginError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.config.csrf_cookie_url())
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(LoginError::status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &self.config;
            Err(unavailable())
        }
    }

    async fn submit_credentials(
        &self,
        credentials: &Credentials,
        csrf: &CsrfToken,
    ) -> Result<LoginResponse, LoginError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.login_url())
                .credentials(web_sys::RequestCredentials::Include)
                .header(auth::config::CSRF_HEADER_NAME, csrf.as_str())
                .header("Accept", "application/json")
                .json(credentials)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(LoginError::status(resp.status()));
            }
            let body = resp.text().await.map_err(network)?;
            Ok(LoginResponse::from_body(&body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.config, credentials, csrf);
            Err(unavailable())
        }
    }
}
