//! Toast payloads for login outcomes.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use crate::error::LoginError;

pub const SUCCESS_TITLE: &str = "Login Berhasil";
pub const SUCCESS_DESCRIPTION: &str = "Selamat datang di UMKM Admin Dashboard!";
pub const FAILURE_TITLE: &str = "Login Gagal";
pub const FAILURE_FALLBACK: &str = "Terjadi kesalahan saat login.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    #[must_use]
    pub fn login_succeeded() -> Self {
        Self {
            title: SUCCESS_TITLE.to_owned(),
            description: SUCCESS_DESCRIPTION.to_owned(),
            variant: NotificationVariant::Default,
        }
    }

    /// Destructive toast carrying the error text, or the generic fallback
    /// when the error renders empty.
    #[must_use]
    pub fn login_failed(error: &LoginError) -> Self {
        Self {
            title: FAILURE_TITLE.to_owned(),
            description: failure_message(error),
            variant: NotificationVariant::Destructive,
        }
    }

    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// User-facing text for a failed attempt.
#[must_use]
pub fn failure_message(error: &LoginError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() { FAILURE_FALLBACK.to_owned() } else { message }
}
