//! Site header with route links and account controls.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::nostr_login::NostrLogin;
use crate::components::theme_toggle::ThemeToggle;

const LINKS: [(&str, &str); 4] = [("/", "Home"), ("/blog", "Blog"), ("/dashboard", "Dashboard"), ("/market", "Market")];

#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <header class="site-nav">
            <A href="/" attr:class="site-nav__brand">
                "Folio"
            </A>
            <nav class="site-nav__links">
                {LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <A href=href attr:class="site-nav__link">
                                {label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <span class="site-nav__spacer"></span>
            <ThemeToggle/>
            <NostrLogin/>
        </header>
    }
}
