//! Reactive state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` wraps the session store in a signal so every view sees the same
//! session; `loadable` is the per-page fetch state for lists and details.

pub mod auth;
pub mod loadable;
