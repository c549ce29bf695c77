//! `document.cookie` and `localStorage` adapters.
//!
//! Requires a browser environment; outside one, cookies read as absent and
//! storage writes fail with [`LoginError::Storage`].

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use auth::{CookieReader, LoginError, SessionToken, TokenStore};
#[cfg(feature = "csr")]
use auth::config::TOKEN_STORAGE_KEY;

/// Reads `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

impl CookieReader for DocumentCookies {
    fn cookie_string(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()?.document()?;
            let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
            html.cookie().ok().filter(|cookies| !cookies.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }
}

/// Persists the session token in `localStorage` under `token`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, LoginError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| LoginError::Storage("localStorage unavailable".to_owned()))
}

#[cfg(feature = "csr")]
fn js_error(e: wasm_bindgen::JsValue) -> LoginError {
    LoginError::Storage(format!("{e:?}"))
}

#[cfg(not(feature = "csr"))]
fn no_storage() -> LoginError {
    LoginError::Storage("localStorage not available outside the browser".to_owned())
}

impl TokenStore for LocalTokenStore {
    fn save(&self, token: &SessionToken) -> Result<(), LoginError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(TOKEN_STORAGE_KEY, token.as_str())
                .map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(no_storage())
        }
    }

    fn load(&self) -> Option<SessionToken> {
        #[cfg(feature = "csr")]
        {
            local_storage()
                .ok()?
                .get_item(TOKEN_STORAGE_KEY)
                .ok()
                .flatten()
                .map(SessionToken::new)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn clear(&self) -> Result<(), LoginError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(TOKEN_STORAGE_KEY).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(no_storage())
        }
    }
}
