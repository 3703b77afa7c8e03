//! Tag filter buttons for the project list.

use leptos::prelude::*;

use crate::components::skeleton::ListSkeleton;
use crate::net::api;
use crate::net::types::Tag;
use crate::state::fetch::FetchState;
use crate::util::latest::use_latest_fetch;

/// Clicking a tag selects it; clicking the selected tag clears the filter.
#[component]
pub fn TagCloud(selected: RwSignal<Option<Tag>>) -> impl IntoView {
    let tags = use_latest_fetch(|| (), |(), signal| async move { api::fetch_tags(&signal).await });

    let toggle = move |tag: Tag| {
        selected.update(|current| {
            *current = if current.as_ref().is_some_and(|c| c.slug == tag.slug) { None } else { Some(tag) };
        });
    };

    view! {
        {move || match tags.get() {
            FetchState::Loading => view! { <ListSkeleton rows=1/> }.into_any(),
            FetchState::Failed(_) => ().into_any(),
            FetchState::Ready(list) if list.is_empty() => ().into_any(),
            FetchState::Ready(list) => {
                view! {
                    <div class="tag-cloud">
                        {list
                            .into_iter()
                            .map(|tag| {
                                let slug = tag.slug.clone();
                                let name = tag.name.clone();
                                let is_active = move || selected.with(|s| s.as_ref().is_some_and(|t| t.slug == slug));
                                view! {
                                    <button
                                        class="tag-cloud__tag"
                                        class:tag-cloud__tag--active=is_active
                                        on:click=move |_| toggle(tag.clone())
                                    >
                                        {name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
