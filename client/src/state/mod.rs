//! Client-side state shared through Leptos context.
//!
//! Each module is a plain struct or enum with its transitions as methods, so
//! the logic is testable without a reactive runtime. `app` wraps them in
//! `RwSignal`s and provides them to the component tree.

pub mod chat;
pub mod fetch;
pub mod session;
pub mod theme;
