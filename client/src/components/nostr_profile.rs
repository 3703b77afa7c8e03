//! Site owner's Nostr profile header.

use leptos::prelude::*;

use crate::components::skeleton::ListSkeleton;
use crate::net::api;
use crate::net::types::NostrProfile;
use crate::state::fetch::FetchState;
use crate::util::latest::use_latest_fetch;

#[component]
pub fn NostrProfileCard() -> impl IntoView {
    let profile = use_latest_fetch(|| (), |(), signal| async move { api::fetch_nostr_profile(None, &signal).await });

    view! {
        <section class="profile">
            {move || match profile.get() {
                FetchState::Loading => view! { <ListSkeleton rows=2/> }.into_any(),
                FetchState::Failed(_) => {
                    view! { <p class="profile__error">"Could not load profile."</p> }.into_any()
                }
                FetchState::Ready(p) => view! { <ProfileSummary profile=p/> }.into_any(),
            }}
        </section>
    }
}

/// Avatar, name and bio for any Nostr profile.
#[component]
pub fn ProfileSummary(profile: NostrProfile) -> impl IntoView {
    let label = profile.label().unwrap_or("Anonymous").to_owned();
    let link = profile.nip05_handle().map(|handle| format!("https://primal.net/{handle}"));
    let alt = label.clone();

    view! {
        <div class="profile__summary">
            {profile
                .picture
                .clone()
                .map(|src| view! { <img class="profile__avatar" src=src alt=alt/> })}
            <div class="profile__text">
                <h1 class="profile__name">{label}</h1>
                {profile.about.clone().map(|about| view! { <p class="profile__about">{about}</p> })}
                {link
                    .map(|href| {
                        view! {
                            <a class="profile__link" href=href target="_blank" rel="noopener noreferrer">
                                "View on Nostr"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
