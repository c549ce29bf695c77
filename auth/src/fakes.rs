//! In-memory capability fakes for exercising [`crate::LoginFlow`] without a
//! browser or a backend.
//!
//! Every fake writes into a shared [`Journal`] so tests can assert both what
//! happened and in which order.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::capability::{AuthApi, CookieReader, Notifier, Router, SubmitFlag, TokenStore};
use crate::config::{CSRF_COOKIE_NAME, TOKEN_STORAGE_KEY};
use crate::error::LoginError;
use crate::model::{Credentials, CsrfToken, LoginResponse, SessionToken};
use crate::notification::Notification;

// =============================================================================
// JOURNAL
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Submitting(bool),
    CsrfRequested,
    CredentialsSubmitted { email: String, csrf: String },
    TokenSaved(String),
    Notified(Notification),
    Navigated(String),
}

#[derive(Clone, Debug, Default)]
pub struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    pub fn record(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.filter(|e| match e {
            Event::Notified(n) => Some(n.clone()),
            _ => None,
        })
    }

    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        self.filter(|e| match e {
            Event::Navigated(path) => Some(path.clone()),
            _ => None,
        })
    }

    #[must_use]
    pub fn submissions(&self) -> Vec<(String, String)> {
        self.filter(|e| match e {
            Event::CredentialsSubmitted { email, csrf } => Some((email.clone(), csrf.clone())),
            _ => None,
        })
    }

    #[must_use]
    pub fn flag_history(&self) -> Vec<bool> {
        self.filter(|e| match e {
            Event::Submitting(v) => Some(*v),
            _ => None,
        })
    }

    fn filter<T>(&self, f: impl Fn(&Event) -> Option<T>) -> Vec<T> {
        self.0.borrow().iter().filter_map(f).collect()
    }
}

// =============================================================================
// HTTP
// =============================================================================

/// Scripted backend. By default the CSRF call succeeds and sets
/// `XSRF-TOKEN` in the attached cookie jar, and login returns `{}`.
#[derive(Clone)]
pub struct FakeApi {
    journal: Journal,
    jar: Option<FakeCookies>,
    csrf_cookie: Option<String>,
    csrf_error: Option<LoginError>,
    login_result: Result<LoginResponse, LoginError>,
}

impl FakeApi {
    #[must_use]
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            jar: None,
            csrf_cookie: None,
            csrf_error: None,
            login_result: Ok(LoginResponse::default()),
        }
    }

    /// Set `XSRF-TOKEN=<raw>` in `jar` when the CSRF endpoint is hit.
    #[must_use]
    pub fn sets_csrf_cookie(mut self, jar: &FakeCookies, raw: &str) -> Self {
        self.jar = Some(jar.clone());
        self.csrf_cookie = Some(raw.to_owned());
        self
    }

    #[must_use]
    pub fn csrf_fails(mut self, error: LoginError) -> Self {
        self.csrf_error = Some(error);
        self
    }

    #[must_use]
    pub fn login_returns(mut self, body: &str) -> Self {
        self.login_result = Ok(LoginResponse::from_body(body));
        self
    }

    #[must_use]
    pub fn login_fails(mut self, error: LoginError) -> Self {
        self.login_result = Err(error);
        self
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn fetch_csrf_cookie(&self) -> Result<(), LoginError> {
        self.journal.record(Event::CsrfRequested);
        if let Some(e) = &self.csrf_error {
            return Err(e.clone());
        }
        if let (Some(jar), Some(raw)) = (&self.jar, &self.csrf_cookie) {
            jar.insert(CSRF_COOKIE_NAME, raw);
        }
        Ok(())
    }

    async fn submit_credentials(
        &self,
        credentials: &Credentials,
        csrf: &CsrfToken,
    ) -> Result<LoginResponse, LoginError> {
        self.journal.record(Event::CredentialsSubmitted {
            email: credentials.email.clone(),
            csrf: csrf.as_str().to_owned(),
        });
        self.login_result.clone()
    }
}

// =============================================================================
// COOKIES
// =============================================================================

/// Ordered in-memory cookie jar rendered as `k=v; k2=v2`.
#[derive(Clone, Debug, Default)]
pub struct FakeCookies(Rc<RefCell<Vec<(String, String)>>>);

impl FakeCookies {
    pub fn insert(&self, name: &str, value: &str) {
        let mut cookies = self.0.borrow_mut();
        match cookies.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_owned(),
            None => cookies.push((name.to_owned(), value.to_owned())),
        }
    }

    pub fn remove(&self, name: &str) {
        self.0.borrow_mut().retain(|(n, _)| n != name);
    }
}

impl CookieReader for FakeCookies {
    fn cookie_string(&self) -> Option<String> {
        let cookies = self.0.borrow();
        if cookies.is_empty() {
            return None;
        }
        let rows: Vec<String> = cookies.iter().map(|(n, v)| format!("{n}={v}")).collect();
        Some(rows.join("; "))
    }
}

/// A cookie store that drops everything, as when the backend's cookie is
/// rejected by the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyCookies;

impl CookieReader for EmptyCookies {
    fn cookie_string(&self) -> Option<String> {
        None
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// `localStorage` stand-in.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    journal: Journal,
    items: Rc<RefCell<BTreeMap<String, String>>>,
    fail_writes: bool,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new(journal: &Journal) -> Self {
        Self { journal: journal.clone(), ..Self::default() }
    }

    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    #[must_use]
    pub fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &SessionToken) -> Result<(), LoginError> {
        if self.fail_writes {
            return Err(LoginError::Storage("quota exceeded".to_owned()));
        }
        self.items
            .borrow_mut()
            .insert(TOKEN_STORAGE_KEY.to_owned(), token.as_str().to_owned());
        self.journal.record(Event::TokenSaved(token.as_str().to_owned()));
        Ok(())
    }

    fn load(&self) -> Option<SessionToken> {
        self.get_item(TOKEN_STORAGE_KEY).map(SessionToken::new)
    }

    fn clear(&self) -> Result<(), LoginError> {
        if self.fail_writes {
            return Err(LoginError::Storage("quota exceeded".to_owned()));
        }
        self.items.borrow_mut().remove(TOKEN_STORAGE_KEY);
        Ok(())
    }
}

// =============================================================================
// UI
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier(Journal);

impl RecordingNotifier {
    #[must_use]
    pub fn new(journal: &Journal) -> Self {
        Self(journal.clone())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.0.record(Event::Notified(notification));
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordingRouter(Journal);

impl RecordingRouter {
    #[must_use]
    pub fn new(journal: &Journal) -> Self {
        Self(journal.clone())
    }
}

impl Router for RecordingRouter {
    fn navigate(&self, path: &str) {
        self.0.record(Event::Navigated(path.to_owned()));
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordingFlag(Journal);

impl RecordingFlag {
    #[must_use]
    pub fn new(journal: &Journal) -> Self {
        Self(journal.clone())
    }
}

impl SubmitFlag for RecordingFlag {
    fn set_submitting(&self, submitting: bool) {
        self.0.record(Event::Submitting(submitting));
    }
}
