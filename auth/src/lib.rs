//! Admin login core for the UMKM admin dashboard.
//!
//! This crate is UI-framework agnostic so both the Leptos `client` and the
//! native command-line front end can drive the same login flow. Everything
//! that touches the outside world (HTTP, cookies, storage, toasts, routing)
//! comes in through the traits in [`capability`].
//!
//! FLOW
//! ====
//! 1. `GET /sanctum/csrf-cookie` so the backend sets `XSRF-TOKEN`.
//! 2. Read and percent-decode the cookie.
//! 3. `POST /api/admin/login` echoing the token in `X-XSRF-TOKEN`.
//! 4. Persist the returned session token under the `token` key.
//! 5. Toast + redirect to `/`, or a destructive toast on any failure.

pub mod capability;
pub mod config;
pub mod cookie;
pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod fakes;
pub mod flow;
pub mod model;
pub mod notification;

pub use capability::{AuthApi, CookieReader, Notifier, Router, SubmitFlag, TokenStore};
pub use config::ApiConfig;
pub use error::LoginError;
pub use flow::LoginFlow;
pub use model::{Credentials, CsrfToken, LoginOutcome, LoginResponse, SessionToken};
pub use notification::{Notification, NotificationVariant};
