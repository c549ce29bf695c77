//! One admin login attempt, end to end.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is caught here and turned into a destructive toast. Nothing
//! is retried, and nothing is persisted or navigated on failure.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::capability::{AuthApi, CookieReader, Notifier, Router, SubmitFlag, TokenStore};
use crate::config::HOME_PATH;
use crate::cookie;
use crate::error::LoginError;
use crate::model::{Credentials, LoginOutcome, SessionToken};
use crate::notification::{Notification, failure_message};

/// Orchestrates CSRF handshake, credential submission, token persistence,
/// and the toast/redirect side effects.
///
/// Holds no state between attempts; the CSRF token is re-read every time.
/// There is no re-entrancy guard: callers keep the submit control disabled
/// while the flag is set.
pub struct LoginFlow {
    api: Box<dyn AuthApi>,
    cookies: Box<dyn CookieReader>,
    store: Box<dyn TokenStore>,
    notifier: Box<dyn Notifier>,
    router: Box<dyn Router>,
    flag: Box<dyn SubmitFlag>,
}

impl LoginFlow {
    pub fn new(
        api: impl AuthApi + 'static,
        cookies: impl CookieReader + 'static,
        store: impl TokenStore + 'static,
        notifier: impl Notifier + 'static,
        router: impl Router + 'static,
        flag: impl SubmitFlag + 'static,
    ) -> Self {
        Self {
            api: Box::new(api),
            cookies: Box::new(cookies),
            store: Box::new(store),
            notifier: Box::new(notifier),
            router: Box::new(router),
            flag: Box::new(flag),
        }
    }

    /// Run one login attempt and report its outcome.
    ///
    /// The submitting flag is raised first and lowered last, after the toast
    /// and any navigation, on every path.
    pub async fn submit_login(&self, credentials: Credentials) -> LoginOutcome {
        self.flag.set_submitting(true);
        tracing::debug!(email = %credentials.email, "login attempt started");

        let outcome = match self.authenticate(&credentials).await {
            Ok(token) => {
                tracing::info!(email = %credentials.email, "login succeeded");
                self.notifier.notify(Notification::login_succeeded());
                self.router.navigate(HOME_PATH);
                LoginOutcome::Success(token)
            }
            Err(e) => {
                tracing::warn!(email = %credentials.email, code = e.code(), error = %e, "login failed");
                self.notifier.notify(Notification::login_failed(&e));
                LoginOutcome::Failure(failure_message(&e))
            }
        };

        self.flag.set_submitting(false);
        outcome
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, LoginError> {
        self.api.fetch_csrf_cookie().await?;
        tracing::debug!("csrf cookie requested");

        let csrf = cookie::csrf_token(self.cookies.cookie_string().as_deref())?;

        let response = self.api.submit_credentials(credentials, &csrf).await?;
        tracing::debug!(?response, "login response received");

        let token = response.session_token().ok_or(LoginError::MissingSessionToken)?;
        self.store.save(&token)?;
        Ok(token)
    }
}
