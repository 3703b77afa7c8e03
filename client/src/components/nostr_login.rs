//! Nostr extension login button and signed-in badge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login asks the NIP-07 browser extension for a public key. The resulting
//! `NostrSession` lives in context and is persisted by the app shell.

use leptos::prelude::*;

use crate::state::session::NostrSession;
use crate::util::nostr::request_public_key;

#[component]
pub fn NostrLogin() -> impl IntoView {
    let session = expect_context::<RwSignal<NostrSession>>();

    let on_login = move |_| {
        if session.get_untracked().pending {
            return;
        }
        session.update(NostrSession::begin_login);
        leptos::task::spawn_local(async move {
            match request_public_key().await {
                Ok(pubkey) => {
                    leptos::logging::log!("nostr login: {pubkey}");
                    session.update(|s| s.logged_in(pubkey));
                }
                Err(err) => {
                    leptos::logging::warn!("nostr login failed: {err}");
                    session.update(|s| s.login_failed(err.to_string()));
                }
            }
        });
    };

    let on_logout = move |_| session.update(NostrSession::logout);

    view! {
        <div class="nostr-login">
            <Show
                when=move || session.get().is_logged_in()
                fallback=move || {
                    view! {
                        <button
                            class="btn nostr-login__button"
                            disabled=move || session.get().pending
                            on:click=on_login
                        >
                            {move || if session.get().pending { "Connecting..." } else { "Login with Nostr" }}
                        </button>
                    }
                }
            >
                <span class="nostr-login__badge" title=move || session.get().pubkey.unwrap_or_default()>
                    {move || session.get().short_pubkey().unwrap_or_default()}
                </span>
                <button class="btn nostr-login__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
            {move || {
                session
                    .get()
                    .error
                    .map(|message| view! { <p class="nostr-login__error">{message}</p> })
            }}
        </div>
    }
}
