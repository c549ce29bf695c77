//! Terminal stand-ins for the toast, router, and submit-button capabilities.

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

use auth::{Notification, Notifier, Router, SubmitFlag};

/// Prints toasts: success to stdout, destructive to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let line = render(&notification);
        if notification.is_destructive() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

fn render(notification: &Notification) -> String {
    format!("[{}] {}", notification.title, notification.description)
}

/// Reports the post-login redirect; there is no page to navigate in a terminal.
pub struct ConsoleRouter;

impl Router for ConsoleRouter {
    fn navigate(&self, path: &str) {
        tracing::info!(%path, "redirect");
    }
}

/// Logs the submitting state the web client shows on its submit button.
pub struct ConsoleFlag;

impl SubmitFlag for ConsoleFlag {
    fn set_submitting(&self, submitting: bool) {
        tracing::debug!(submitting, "submit state changed");
    }
}
