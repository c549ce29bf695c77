//! Browser and reactive adapters for the `auth` capability traits.

pub mod browser;
pub mod reactive;
