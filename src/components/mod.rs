//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, cards and editor forms. They read the
//! session from context but leave network calls to the pages that own them.

pub mod footer;
pub mod header;
pub mod post_card;
pub mod post_form;
pub mod project_card;
pub mod project_form;
pub mod protected_route;
