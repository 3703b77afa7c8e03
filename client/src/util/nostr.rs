//! NIP-07 browser extension login.
//!
//! Extensions such as Alby inject `window.nostr`; `getPublicKey()` returns a
//! promise of the visitor's hex public key after they approve the request.

#[cfg(test)]
#[path = "nostr_test.rs"]
mod nostr_test;

use crate::state::session::{NostrSession, SESSION_STORAGE_KEY};
use crate::util::ui_persistence::{load_json, remove, save_json};

/// Why a login attempt did not produce a key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NostrLoginError {
    #[error("Nostr extension (like Alby) not found. Please install one to log in.")]
    ExtensionMissing,

    #[error("Nostr login failed: {0}")]
    Rejected(String),

    #[error("Nostr login is only available in the browser")]
    Unavailable,
}

/// Ask the extension for the visitor's public key.
///
/// # Errors
///
/// Returns `ExtensionMissing` when no NIP-07 provider is installed and
/// `Rejected` when the provider refuses or returns something unexpected.
pub async fn request_public_key() -> Result<String, NostrLoginError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(NostrLoginError::Unavailable)?;
        let provider = js_sys::Reflect::get(&window, &"nostr".into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .ok_or(NostrLoginError::ExtensionMissing)?;
        let get_public_key: js_sys::Function = js_sys::Reflect::get(&provider, &"getPublicKey".into())
            .ok()
            .and_then(|f| f.dyn_into().ok())
            .ok_or(NostrLoginError::ExtensionMissing)?;
        let promise: js_sys::Promise = get_public_key
            .call0(&provider)
            .and_then(|p| p.dyn_into::<js_sys::Promise>())
            .map_err(|e| NostrLoginError::Rejected(format!("{e:?}")))?;
        let value = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| NostrLoginError::Rejected(format!("{e:?}")))?;
        value
            .as_string()
            .filter(|pk| !pk.is_empty())
            .ok_or_else(|| NostrLoginError::Rejected("extension returned no public key".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NostrLoginError::Unavailable)
    }
}

/// Session restored from a previous visit.
pub fn load_session() -> NostrSession {
    load_json(SESSION_STORAGE_KEY).unwrap_or_default()
}

/// Persist a logged-in session, or forget it on logout.
pub fn save_session(session: &NostrSession) {
    if session.is_logged_in() {
        save_json(SESSION_STORAGE_KEY, session);
    } else {
        remove(SESSION_STORAGE_KEY);
    }
}
