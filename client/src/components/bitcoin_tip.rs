//! Tip jar: shows the on-chain address in a modal with wallet and copy actions.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::net::api;
use crate::util::clipboard::copy_text;
use crate::util::latest::use_latest_fetch;

const COPIED_RESET_MS: u32 = 2000;

#[component]
pub fn BitcoinTip() -> impl IntoView {
    let address = use_latest_fetch(|| (), |(), signal| async move { api::fetch_bitcoin_address(&signal).await });
    let open = RwSignal::new(false);
    let copied = RwSignal::new(false);

    let current = move || address.with(|s| s.ready().map(|a| a.address.clone())).filter(|a| !a.is_empty());

    let on_copy = move |_| {
        let Some(addr) = current() else {
            return;
        };
        if !copy_text(&addr) {
            return;
        }
        copied.set(true);
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::callback::Timeout::new(COPIED_RESET_MS, move || copied.set(false)).forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = COPIED_RESET_MS;
        }
    };

    view! {
        <Show when=move || current().is_some()>
            <button class="btn tip__open" on:click=move |_| open.set(true)>
                "Zap sats ⚡"
            </button>
        </Show>
        <Modal open=open on_close=Callback::new(move |()| open.set(false)) title="Send a tip">
            <div class="tip">
                <code class="tip__address">{move || current().unwrap_or_default()}</code>
                <div class="tip__actions">
                    <a class="btn tip__wallet" href=move || format!("bitcoin:{}", current().unwrap_or_default())>
                        "Open in wallet"
                    </a>
                    <button class="btn tip__copy" on:click=on_copy>
                        {move || if copied.get() { "Copied!" } else { "Copy address" }}
                    </button>
                </div>
            </div>
        </Modal>
    }
}
