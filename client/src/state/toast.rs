//! Toast queue shown in the corner of every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<ToastState>` context by `App`. The login flow writes
//! into it through [`ToastNotifier`]; `Toaster` renders it.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use auth::{Notification, NotificationVariant, Notifier};
use leptos::prelude::*;

/// How long a toast stays up before dismissing itself.
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a notification and return its id. Ids are never reused.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: notification.title,
            description: notification.description,
            variant: notification.variant,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// [`Notifier`] that pushes into the toast context.
#[derive(Clone, Copy)]
pub struct ToastNotifier(RwSignal<ToastState>);

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self(toasts)
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let id = self.0.try_update(|state| state.push(notification));

        #[cfg(feature = "csr")]
        {
            if let Some(id) = id {
                let toasts = self.0;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                    toasts.update(|state| state.dismiss(id));
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}
