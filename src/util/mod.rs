//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the views stay declarative and the pure parts stay testable.

pub mod browser;
pub mod format;
pub mod storage;
