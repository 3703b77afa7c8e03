//! Loading placeholders.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="spinner" role="status">
            <span class="spinner__dot" aria-hidden="true"></span>
            <span class="spinner__label">{label.unwrap_or("Loading...")}</span>
        </div>
    }
}

/// Grey placeholder rows shown while a list loads.
#[component]
pub fn ListSkeleton(#[prop(default = 3)] rows: usize) -> impl IntoView {
    view! {
        <div class="skeleton" aria-busy="true">
            {(0..rows).map(|_| view! { <div class="skeleton__row"></div> }).collect_view()}
        </div>
    }
}
