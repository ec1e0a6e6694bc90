//! Shared helpers for the secnum CLI.

pub mod logging;
pub mod settings;
