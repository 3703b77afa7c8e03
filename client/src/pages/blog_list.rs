//! Blog index.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::skeleton::ListSkeleton;
use crate::net::api;
use crate::state::fetch::FetchState;
use crate::util::format::format_date;
use crate::util::latest::use_latest_fetch;
use crate::util::markdown::excerpt;

const EXCERPT_CHARS: usize = 160;

#[component]
pub fn BlogListPage() -> impl IntoView {
    let posts = use_latest_fetch(|| (), |(), signal| async move { api::fetch_posts(&signal).await });

    view! {
        <Title text="Blog"/>
        <div class="blog-page">
            <h1>"Blog"</h1>
            {move || match posts.get() {
                FetchState::Loading => view! { <ListSkeleton rows=4/> }.into_any(),
                FetchState::Failed(_) => view! { <p class="blog-page__error">"Could not load posts."</p> }.into_any(),
                FetchState::Ready(list) if list.is_empty() => {
                    view! { <p class="blog-page__empty">"No posts yet."</p> }.into_any()
                }
                FetchState::Ready(list) => {
                    view! {
                        <ul class="blog-page__list">
                            {list
                                .into_iter()
                                .map(|post| {
                                    let summary = excerpt(&post.content, EXCERPT_CHARS);
                                    view! {
                                        <li class="blog-page__item">
                                            <A href=format!("/blog/{}", post.slug)>
                                                <h2>{post.title}</h2>
                                            </A>
                                            <time class="blog-page__date">{format_date(&post.published_date)}</time>
                                            <p class="blog-page__excerpt">{summary}</p>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
