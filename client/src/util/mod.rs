//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod clipboard;
pub mod debounce;
pub mod format;
pub mod latest;
pub mod markdown;
pub mod nostr;
pub mod pagination;
pub mod theme;
pub mod ui_persistence;
