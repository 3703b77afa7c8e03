//! Single blog post rendered from markdown.

#[cfg(test)]
#[path = "blog_post_test.rs"]
mod blog_post_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::skeleton::ListSkeleton;
use crate::net::api;
use crate::net::error::ApiError;
use crate::state::fetch::FetchState;
use crate::util::format::format_date;
use crate::util::latest::use_latest_fetch;
use crate::util::markdown::render_markdown_html;

fn failure_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Status { status: 404, .. } => "Post not found.",
        _ => "Could not load this post.",
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").unwrap_or_default());

    let post = use_latest_fetch(slug, |slug, signal| async move { api::fetch_post(&slug, &signal).await });

    view! {
        <div class="post-page">
            <A href="/blog" attr:class="post-page__back">
                "← All posts"
            </A>
            {move || match post.get() {
                FetchState::Loading => view! { <ListSkeleton rows=6/> }.into_any(),
                FetchState::Failed(err) => {
                    view! { <p class="post-page__error">{failure_message(&err)}</p> }.into_any()
                }
                FetchState::Ready(p) => {
                    let html = render_markdown_html(&p.content);
                    view! {
                        <Title text=p.title.clone()/>
                        <article class="post-page__article">
                            <h1>{p.title}</h1>
                            <time class="post-page__date">{format_date(&p.published_date)}</time>
                            {p.image.map(|src| view! { <img class="post-page__image" src=src alt=""/> })}
                            <div class="post-page__body" inner_html=html></div>
                        </article>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
