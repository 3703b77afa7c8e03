//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::chat_assistant::ChatAssistant;
use crate::components::nav::SiteNav;
use crate::pages::{
    blog_list::BlogListPage, blog_post::BlogPostPage, dashboard::DashboardPage, home::HomePage,
    marketplace::MarketplacePage,
};
use crate::state::{chat::ChatState, session::NostrSession, theme::Theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides theme, Nostr session and chat state to every route. Stored
/// preferences are restored once mounted in the browser and written back on
/// every change.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    let session = RwSignal::new(NostrSession::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(theme);
    provide_context(session);
    provide_context(chat);

    // Effects only run in the browser, after hydration.
    let restored = RwSignal::new(false);
    Effect::new(move || {
        if restored.get_untracked() {
            return;
        }
        theme.set(crate::util::theme::read_preference());
        session.set(crate::util::nostr::load_session());
        restored.set(true);
    });

    Effect::new(move || {
        let current = theme.get();
        if restored.get() {
            crate::util::theme::store(current);
        }
    });

    Effect::new(move || {
        let current = session.get();
        if restored.get() {
            crate::util::nostr::save_session(&current);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Folio"/>

        <Router>
            <SiteNav/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("blog") view=BlogListPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("market") view=MarketplacePage/>
                </Routes>
            </main>
            <footer class="site-footer">
                <span>"Built with Rust, Leptos and Nostr."</span>
            </footer>
            <ChatAssistant/>
        </Router>
    }
}
