//! Toast stack rendered from the `ToastState` context.

use auth::NotificationVariant;
use leptos::prelude::*;

use crate::state::toast::ToastState;

fn toast_class(variant: NotificationVariant) -> &'static str {
    match variant {
        NotificationVariant::Default => "toast",
        NotificationVariant::Destructive => "toast toast--destructive",
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <li class=toast_class(toast.variant) role="status">
                                <div class="toast__title">{toast.title}</div>
                                <div class="toast__description">{toast.description}</div>
                                <button
                                    class="toast__close"
                                    title="Close"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ol>
    }
}
