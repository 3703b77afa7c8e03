//! Live Bitcoin network figures.
//!
//! SYSTEM CONTEXT
//! ==============
//! Polls `mempool-stats/` on a fixed interval while mounted. A failed poll
//! keeps the last good snapshot on screen; the loop stops on unmount.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::skeleton::ListSkeleton;
use crate::net::types::NetworkStats;
use crate::state::fetch::FetchState;
use crate::util::format::{format_hashrate, format_usd, group_thousands};

pub const NETWORK_POLL_INTERVAL: Duration = Duration::from_secs(30);

#[component]
pub fn MempoolStats() -> impl IntoView {
    let stats = RwSignal::new(FetchState::<NetworkStats>::Loading);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::net::abort::RequestSignal;
        use crate::net::api;

        let poll_alive = Arc::new(AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                let outcome = api::fetch_network_stats(&RequestSignal::none()).await;
                if !poll_alive_task.load(Ordering::Relaxed) {
                    break;
                }
                if let Err(err) = &outcome {
                    leptos::logging::warn!("network stats poll failed: {err}");
                }
                stats.update(|s| {
                    s.refresh(outcome);
                });
                gloo_timers::future::sleep(NETWORK_POLL_INTERVAL).await;
                if !poll_alive_task.load(Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, Ordering::Relaxed));
    }

    view! {
        <section class="mempool">
            <h2 class="mempool__title">"Bitcoin network"</h2>
            {move || match stats.get() {
                FetchState::Loading => view! { <ListSkeleton rows=3/> }.into_any(),
                FetchState::Failed(_) => {
                    view! { <p class="mempool__error">"Network stats unavailable."</p> }.into_any()
                }
                FetchState::Ready(s) => view! { <NetworkStatsGrid stats=s/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn NetworkStatsGrid(stats: NetworkStats) -> impl IntoView {
    let fees = stats.recommended_fees;
    view! {
        <dl class="mempool__grid">
            <dt>"Block height"</dt>
            <dd>{group_thousands(stats.block_height)}</dd>
            <dt>"Price"</dt>
            <dd>{format_usd(stats.price)}</dd>
            <dt>"Hashrate"</dt>
            <dd>{format_hashrate(stats.hashrate)}</dd>
            <dt>"Fees (sat/vB)"</dt>
            <dd class="mempool__fees">
                <span title="Next block">{format!("High {}", fees.fastest_fee)}</span>
                <span title="Within 30 minutes">{format!("Medium {}", fees.half_hour_fee)}</span>
                <span title="Economy">{format!("Low {}", fees.economy_fee)}</span>
            </dd>
        </dl>
    }
}
