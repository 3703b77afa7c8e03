//! Dashboard page with live network numbers and activity widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is read-only. The mempool widget polls on its own
//! interval; the rest load once per visit.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::github_contributions::GithubContributions;
use crate::components::github_stats::GithubStatsCard;
use crate::components::latest_note::LatestNote;
use crate::components::mempool_stats::MempoolStats;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Title text="Dashboard"/>
        <div class="dashboard-page">
            <h1 class="dashboard-page__title">"Dashboard"</h1>
            <div class="dashboard-page__grid">
                <MempoolStats/>
                <GithubStatsCard/>
                <LatestNote/>
            </div>
            <GithubContributions/>
        </div>
    }
}
