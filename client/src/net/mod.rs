//! Networking modules for the portfolio REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `abort` carries their cancellation.
//! `types` and `envelope` define the wire schema, `chat` interprets free-form
//! assistant replies, and `error` classifies failures so callers can tell
//! cancellation apart from real errors.

pub mod abort;
pub mod api;
pub mod chat;
pub mod envelope;
pub mod error;
pub mod types;
