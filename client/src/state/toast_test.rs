use super::*;
use auth::LoginError;

// =============================================================
// ToastState
// =============================================================

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().toasts.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(Notification::login_succeeded());
    let b = state.push(Notification::login_failed(&LoginError::MissingCsrfToken));
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].variant, NotificationVariant::Destructive);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.push(Notification::login_succeeded());
    let b = state.push(Notification::login_succeeded());
    state.dismiss(a);
    assert_eq!(state.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(Notification::login_succeeded());
    state.dismiss(a);
    let b = state.push(Notification::login_succeeded());
    assert_ne!(a, b);
}

// =============================================================
// ToastNotifier
// =============================================================

#[test]
fn notifier_pushes_into_signal() {
    let toasts = RwSignal::new(ToastState::default());
    ToastNotifier::new(toasts).notify(Notification::login_succeeded());

    let state = toasts.get_untracked();
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].title, "Login Berhasil");
}
