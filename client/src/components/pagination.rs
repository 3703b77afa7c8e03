//! Previous/next pager shared by paginated lists.

use leptos::prelude::*;

use crate::util::pagination::Pager;

/// Renders nothing when there is a single page.
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    let pager = move || Pager::new(current.get(), total.get());

    view! {
        <Show when=move || pager().is_visible()>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="btn pagination__prev"
                    disabled=move || !pager().has_previous()
                    on:click=move |_| {
                        if let Some(page) = pager().previous() {
                            on_change.run(page);
                        }
                    }
                >
                    "Previous"
                </button>
                <span class="pagination__label">{move || pager().label()}</span>
                <button
                    class="btn pagination__next"
                    disabled=move || !pager().has_next()
                    on:click=move |_| {
                        if let Some(page) = pager().next() {
                            on_change.run(page);
                        }
                    }
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
