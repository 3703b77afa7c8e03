//! GitHub repository, follower and star counts.

use leptos::prelude::*;

use crate::components::skeleton::ListSkeleton;
use crate::net::api;
use crate::state::fetch::FetchState;
use crate::util::format::group_thousands;
use crate::util::latest::use_latest_fetch;

/// Profile link target, set at build time.
pub const GITHUB_PROFILE_URL: &str = match option_env!("FOLIO_GITHUB_URL") {
    Some(url) => url,
    None => "https://github.com",
};

#[component]
pub fn GithubStatsCard() -> impl IntoView {
    let stats = use_latest_fetch(|| (), |(), signal| async move { api::fetch_github_stats(&signal).await });

    view! {
        <section class="stats-card">
            <h2 class="stats-card__title">
                <a href=GITHUB_PROFILE_URL target="_blank" rel="noopener noreferrer">
                    "GitHub"
                </a>
            </h2>
            {move || match stats.get() {
                FetchState::Loading => view! { <ListSkeleton rows=1/> }.into_any(),
                FetchState::Failed(_) => {
                    view! { <p class="stats-card__error">"GitHub stats unavailable."</p> }.into_any()
                }
                FetchState::Ready(s) => {
                    view! {
                        <dl class="stats-card__grid">
                            <dt>"Repositories"</dt>
                            <dd>{group_thousands(s.public_repos)}</dd>
                            <dt>"Followers"</dt>
                            <dd>{group_thousands(s.followers)}</dd>
                            <dt>"Stars"</dt>
                            <dd>{group_thousands(s.total_stars)}</dd>
                        </dl>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
