//! Generic dialog wrapper shared by the tip jar and seller profile views.

use leptos::prelude::*;

/// Backdrop plus centered dialog. Clicking the backdrop, the close button, or
/// pressing Escape runs `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into, optional)] title: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });
    let title = StoredValue::new(title);

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <div class="dialog__header">
                        {move || title.get_value().map(|t| view! { <h2 class="dialog__title">{t}</h2> })}
                        <button class="btn dialog__close" on:click=move |_| on_close.run(()) aria-label="Close">
                            "×"
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
