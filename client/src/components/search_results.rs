//! Site-wide search box and result list.
//!
//! The query is debounced before it reaches the network, and a blank query
//! hides the results without issuing a request.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::search_input::SearchInput;
use crate::components::skeleton::ListSkeleton;
use crate::net::api;
use crate::net::types::SearchResults;
use crate::state::fetch::FetchState;
use crate::util::debounce::{SEARCH_DEBOUNCE, use_debounce};
use crate::util::latest::use_latest_fetch;

#[component]
pub fn PortfolioSearch() -> impl IntoView {
    let raw = RwSignal::new(String::new());
    let query = use_debounce::<String>(raw.into(), SEARCH_DEBOUNCE);

    let results = use_latest_fetch(
        move || query.get().trim().to_owned(),
        |q, signal| async move {
            if q.is_empty() {
                return Ok(SearchResults::default());
            }
            api::search_portfolio(&q, &signal).await
        },
    );

    view! {
        <section class="site-search">
            <SearchInput value=raw placeholder="Search projects and posts..."/>
            <Show when=move || !query.get().trim().is_empty()>
                {move || match results.get() {
                    FetchState::Loading => view! { <ListSkeleton rows=3/> }.into_any(),
                    FetchState::Failed(_) => {
                        view! { <p class="site-search__error">"Search failed."</p> }.into_any()
                    }
                    FetchState::Ready(hits) if hits.is_empty() => {
                        view! { <p class="site-search__empty">"No results found."</p> }.into_any()
                    }
                    FetchState::Ready(hits) => view! { <SearchHits hits=hits/> }.into_any(),
                }}
            </Show>
        </section>
    }
}

#[component]
fn SearchHits(hits: SearchResults) -> impl IntoView {
    let has_projects = !hits.projects.is_empty();
    let has_posts = !hits.posts.is_empty();

    view! {
        <div class="site-search__results">
            <Show when=move || has_projects>
                <h3>"Projects"</h3>
            </Show>
            <ul class="site-search__list">
                {hits
                    .projects
                    .into_iter()
                    .map(|p| {
                        let href = p.live_url.or(p.repository_url);
                        view! {
                            <li class="site-search__item">
                                {match href {
                                    Some(href) => {
                                        view! {
                                            <a href=href target="_blank" rel="noopener noreferrer">
                                                {p.title}
                                            </a>
                                        }
                                            .into_any()
                                    }
                                    None => view! { <span>{p.title}</span> }.into_any(),
                                }}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <Show when=move || has_posts>
                <h3>"Posts"</h3>
            </Show>
            <ul class="site-search__list">
                {hits
                    .posts
                    .into_iter()
                    .map(|post| {
                        view! {
                            <li class="site-search__item">
                                <A href=format!("/blog/{}", post.slug)>{post.title}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
