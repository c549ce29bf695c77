//! Reusable UI components.

pub mod toaster;
