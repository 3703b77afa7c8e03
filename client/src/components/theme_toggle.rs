//! Light/dark/system theme switch.

use leptos::prelude::*;

use crate::state::theme::Theme;

/// Cycles the shared `Theme` preference. Applying and persisting the choice
/// happens in the app-level effect that owns the signal.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <button
            class="btn site-nav__theme"
            on:click=move |_| theme.update(|t| *t = t.next())
            title=move || format!("Theme: {}", theme.get().as_str())
        >
            {move || theme.get().icon()}
        </button>
    }
}
