//! Nostr login session.
//!
//! Login is a NIP-07 browser extension handshake that yields a hex public
//! key. The key is persisted so a reload keeps the visitor signed in.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::format::truncate_pubkey;

/// `localStorage` key for the persisted session.
pub const SESSION_STORAGE_KEY: &str = "folio_nostr_session";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NostrSession {
    pub pubkey: Option<String>,
    /// Set while waiting on the extension.
    #[serde(skip)]
    pub pending: bool,
    /// Last login failure, shown next to the button.
    #[serde(skip)]
    pub error: Option<String>,
}

impl NostrSession {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.pubkey.as_deref().is_some_and(|pk| !pk.is_empty())
    }

    /// Badge label, e.g. `3bf0c6...459d`.
    #[must_use]
    pub fn short_pubkey(&self) -> Option<String> {
        self.pubkey
            .as_deref()
            .filter(|pk| !pk.is_empty())
            .map(|pk| truncate_pubkey(pk, 6, 4))
    }

    pub fn begin_login(&mut self) {
        self.pending = true;
        self.error = None;
    }

    pub fn logged_in(&mut self, pubkey: String) {
        self.pubkey = Some(pubkey);
        self.pending = false;
        self.error = None;
    }

    pub fn login_failed(&mut self, message: String) {
        self.pending = false;
        self.error = Some(message);
    }

    pub fn logout(&mut self) {
        *self = Self::default();
    }
}
