//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the browser `fetch` implementation of the backend calls the login
//! flow makes.

pub mod api;
