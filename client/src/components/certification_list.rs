//! Paginated certification list.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::skeleton::ListSkeleton;
use crate::net::api;
use crate::state::fetch::FetchState;
use crate::util::format::format_date;
use crate::util::latest::use_latest_fetch;
use crate::util::pagination::{PAGE_SIZE, total_pages};

#[component]
pub fn CertificationList() -> impl IntoView {
    let page = RwSignal::new(1_u32);
    let certs = use_latest_fetch(move || page.get(), |p, signal| async move { api::fetch_certifications(p, &signal).await });

    let total = Signal::derive(move || certs.with(|s| s.ready().map_or(0, |p| total_pages(p.count, PAGE_SIZE))));

    view! {
        <section class="certs">
            <h2 class="certs__title">"Certifications"</h2>
            {move || match certs.get() {
                FetchState::Loading => view! { <ListSkeleton rows=3/> }.into_any(),
                FetchState::Failed(_) => {
                    view! { <p class="certs__error">"Could not load certifications."</p> }.into_any()
                }
                FetchState::Ready(p) if p.items.is_empty() => {
                    view! { <p class="certs__empty">"No certifications yet."</p> }.into_any()
                }
                FetchState::Ready(p) => {
                    view! {
                        <ul class="certs__list">
                            {p
                                .items
                                .into_iter()
                                .map(|cert| {
                                    view! {
                                        <li class="certs__item">
                                            <strong>{cert.name}</strong>
                                            <span class="certs__issuer">{cert.issuing_organization}</span>
                                            <span class="certs__date">{format_date(&cert.date_issued)}</span>
                                            {cert
                                                .credential_url
                                                .map(|href| {
                                                    view! {
                                                        <a href=href target="_blank" rel="noopener noreferrer">
                                                            "View"
                                                        </a>
                                                    }
                                                })}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
            <Pagination current=page total=total on_change=Callback::new(move |p| page.set(p))/>
        </section>
    }
}
