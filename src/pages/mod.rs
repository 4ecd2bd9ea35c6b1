//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form submission,
//! navigation) and delegates rendering details to `components`.

pub mod admin;
pub mod blog;
pub mod blog_post;
pub mod contact;
pub mod home;
pub(crate) mod loaders;
pub mod login;
pub mod not_found;
pub mod projects;
pub mod register;
