//! Side-effect seams for [`crate::LoginFlow`].
//!
//! DESIGN
//! ======
//! Browser globals (`document.cookie`, `localStorage`), the HTTP client, toasts,
//! and the router are all injected so the flow runs unchanged in the browser,
//! in the CLI, and against the in-memory fakes in tests. The flow is
//! single-threaded, so async methods are `?Send`.

use async_trait::async_trait;

use crate::error::LoginError;
use crate::model::{Credentials, CsrfToken, LoginResponse, SessionToken};
use crate::notification::Notification;

/// HTTP collaborator for the two backend calls.
///
/// Implementations send cookies with both requests and map unreachable hosts
/// and non-2xx statuses to [`LoginError::Network`].
#[async_trait(?Send)]
pub trait AuthApi {
    /// `GET /sanctum/csrf-cookie`. Only the cookie side effect matters.
    async fn fetch_csrf_cookie(&self) -> Result<(), LoginError>;

    /// `POST /api/admin/login` with the decoded token in `X-XSRF-TOKEN`.
    async fn submit_credentials(
        &self,
        credentials: &Credentials,
        csrf: &CsrfToken,
    ) -> Result<LoginResponse, LoginError>;
}

/// Read access to the cookie store, as one `k=v; k2=v2` string.
pub trait CookieReader {
    fn cookie_string(&self) -> Option<String>;
}

/// Durable, origin-scoped storage for the session token.
pub trait TokenStore {
    /// # Errors
    ///
    /// Returns [`LoginError::Storage`] if the write fails.
    fn save(&self, token: &SessionToken) -> Result<(), LoginError>;

    fn load(&self) -> Option<SessionToken>;

    /// # Errors
    ///
    /// Returns [`LoginError::Storage`] if the removal fails.
    fn clear(&self) -> Result<(), LoginError>;
}

/// Toast-style user notification.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Client-side navigation.
pub trait Router {
    fn navigate(&self, path: &str);
}

/// The UI's "submitting" flag that disables the submit button.
pub trait SubmitFlag {
    fn set_submitting(&self, submitting: bool);
}
