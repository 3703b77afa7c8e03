//! Most recent Nostr note.

use leptos::prelude::*;

use crate::components::skeleton::ListSkeleton;
use crate::net::api;
use crate::state::fetch::FetchState;
use crate::util::format::{now_unix_secs, time_ago};
use crate::util::latest::use_latest_fetch;

/// Hidden entirely when the note cannot be loaded.
#[component]
pub fn LatestNote() -> impl IntoView {
    let note = use_latest_fetch(|| (), |(), signal| async move { api::fetch_latest_note(&signal).await });

    view! {
        {move || match note.get() {
            FetchState::Loading => view! { <ListSkeleton rows=2/> }.into_any(),
            FetchState::Failed(_) => ().into_any(),
            FetchState::Ready(n) => {
                let posted = time_ago(n.created_at, now_unix_secs());
                view! {
                    <section class="note">
                        <h2 class="note__title">"Latest note"</h2>
                        <blockquote class="note__content">{n.content}</blockquote>
                        <p class="note__posted">"Posted " {posted}</p>
                    </section>
                }
                    .into_any()
            }
        }}
    }
}
