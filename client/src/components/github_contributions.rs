//! Contribution heat-map for the past year.

use leptos::prelude::*;

use crate::components::skeleton::ListSkeleton;
use crate::net::api;
use crate::net::types::ContributionCalendar;
use crate::state::fetch::FetchState;
use crate::util::format::{contribution_level, group_thousands};
use crate::util::latest::use_latest_fetch;

#[component]
pub fn GithubContributions() -> impl IntoView {
    let calendar = use_latest_fetch(|| (), |(), signal| async move { api::fetch_github_contributions(&signal).await });

    view! {
        <section class="contrib">
            {move || match calendar.get() {
                FetchState::Loading => view! { <ListSkeleton rows=4/> }.into_any(),
                FetchState::Failed(_) => {
                    view! { <p class="contrib__error">"Contribution history unavailable."</p> }.into_any()
                }
                FetchState::Ready(c) => view! { <ContributionGrid calendar=c/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ContributionGrid(calendar: ContributionCalendar) -> impl IntoView {
    let heading = format!("{} contributions in the last year", group_thousands(calendar.total_contributions));

    view! {
        <h2 class="contrib__title">{heading}</h2>
        <div class="contrib__grid">
            {calendar
                .weeks
                .into_iter()
                .map(|week| {
                    view! {
                        <div class="contrib__week">
                            {week
                                .contribution_days
                                .into_iter()
                                .map(|day| {
                                    let class = format!(
                                        "contrib__cell contrib__cell--level-{}",
                                        contribution_level(day.contribution_count),
                                    );
                                    let title = format!("{} contributions on {}", day.contribution_count, day.date);
                                    view! { <span class=class title=title></span> }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
