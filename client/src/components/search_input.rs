//! Controlled text input used by the skill matcher and site search.

use leptos::prelude::*;

#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(into)] placeholder: String,
    #[prop(into, optional)] label: Option<String>,
) -> impl IntoView {
    let aria = label.clone().unwrap_or_else(|| placeholder.clone());
    view! {
        <label class="search-input">
            {label.map(|text| view! { <span class="search-input__label">{text}</span> })}
            <input
                class="search-input__field"
                type="search"
                placeholder=placeholder
                aria-label=aria
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
