//! Leptos-side adapters: router navigation and the submitting signal.

#[cfg(test)]
#[path = "reactive_test.rs"]
mod reactive_test;

use auth::{Router, SubmitFlag};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Wraps the closure returned by `use_navigate`.
#[derive(Clone)]
pub struct NavigateRouter<F> {
    navigate: F,
}

impl<F> NavigateRouter<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Router for NavigateRouter<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Drives the submit button's disabled state.
#[derive(Clone, Copy)]
pub struct SignalFlag(RwSignal<bool>);

impl SignalFlag {
    pub fn new(submitting: RwSignal<bool>) -> Self {
        Self(submitting)
    }
}

impl SubmitFlag for SignalFlag {
    fn set_submitting(&self, submitting: bool) {
        self.0.set(submitting);
    }
}
