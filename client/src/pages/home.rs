//! Landing page: profile, projects, search, certifications and contact.
//!
//! SYSTEM CONTEXT
//! ==============
//! The skill query and selected tag are owned here and shared by the tag
//! cloud and project grid. The query is debounced before the grid sees it.

use leptos::prelude::*;

use crate::components::bitcoin_tip::BitcoinTip;
use crate::components::certification_list::CertificationList;
use crate::components::contact_form::ContactForm;
use crate::components::github_contributions::GithubContributions;
use crate::components::github_stats::GithubStatsCard;
use crate::components::latest_note::LatestNote;
use crate::components::nostr_profile::NostrProfileCard;
use crate::components::project_list::ProjectList;
use crate::components::search_input::SearchInput;
use crate::components::search_results::PortfolioSearch;
use crate::components::tag_cloud::TagCloud;
use crate::net::types::Tag;
use crate::util::debounce::{SEARCH_DEBOUNCE, use_debounce};

#[component]
pub fn HomePage() -> impl IntoView {
    let skill_query = RwSignal::new(String::new());
    let selected_tag = RwSignal::new(None::<Tag>);
    let debounced_query = use_debounce::<String>(skill_query.into(), SEARCH_DEBOUNCE);

    view! {
        <div class="home-page">
            <header class="home-page__hero">
                <NostrProfileCard/>
                <BitcoinTip/>
            </header>
            <div class="home-page__widgets">
                <GithubStatsCard/>
                <LatestNote/>
            </div>
            <GithubContributions/>
            <PortfolioSearch/>
            <section class="home-page__projects">
                <h2>"Projects"</h2>
                <SearchInput
                    value=skill_query
                    placeholder="e.g. Rust, distributed systems, React"
                    label="Match my skills"
                />
                <TagCloud selected=selected_tag/>
                <ProjectList search=debounced_query selected_tag=selected_tag/>
            </section>
            <CertificationList/>
            <ContactForm/>
        </div>
    }
}
