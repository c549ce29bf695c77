//! Admin login page: email + password form driving `auth::LoginFlow`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use auth::{Credentials, LoginError, Notification, Notifier};
use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::state::toast::{ToastNotifier, ToastState};

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Loading..." } else { "Login" }
}

/// Apply the form's `required` rules before any request goes out.
fn validate_login_input(email: String, password: String) -> Result<Credentials, LoginError> {
    Credentials::new(email, password).validate()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(email.get_untracked(), password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(e) => {
                ToastNotifier::new(toasts).notify(Notification::login_failed(&e));
                return;
            }
        };
        submitting.set(true);

        #[cfg(feature = "csr")]
        {
            use auth::{ApiConfig, LoginFlow};

            use crate::net::api::BrowserAuthApi;
            use crate::util::browser::{DocumentCookies, LocalTokenStore};
            use crate::util::reactive::{NavigateRouter, SignalFlag};

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let flow = LoginFlow::new(
                    BrowserAuthApi::new(ApiConfig::from_build_env()),
                    DocumentCookies,
                    LocalTokenStore,
                    ToastNotifier::new(toasts),
                    NavigateRouter::new(navigate),
                    SignalFlag::new(submitting),
                );
                flow.submit_login(credentials).await;
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            submitting.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__header">
                    <h1 class="login-card__title">"Login"</h1>
                    <p class="login-card__subtitle">
                        "Masukkan kredensial untuk mengakses Admin Dashboard"
                    </p>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-field">
                        "Email"
                        <input
                            id="email"
                            class="login-input"
                            type="email"
                            placeholder="Masukkan email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-field">
                        "Password"
                        <input
                            id="password"
                            class="login-input"
                            type="password"
                            placeholder="Masukkan password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="login-card__footer">
                        <button class="btn btn--outline" type="button">
                            "Lupa Password?"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || submit_label(submitting.get())}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
