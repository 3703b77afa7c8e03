//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components fetch their own data through `util::latest` or read shared
//! theme, session and chat state from Leptos context providers.

pub mod bitcoin_tip;
pub mod certification_list;
pub mod chat_assistant;
pub mod contact_form;
pub mod github_contributions;
pub mod github_stats;
pub mod latest_note;
pub mod mempool_stats;
pub mod modal;
pub mod nav;
pub mod nostr_login;
pub mod nostr_profile;
pub mod pagination;
pub mod project_list;
pub mod search_input;
pub mod search_results;
pub mod skeleton;
pub mod tag_cloud;
pub mod theme_toggle;
