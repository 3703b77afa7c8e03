//! Project grid driven by the skill search and tag filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs are the debounced search text and the selected tag. Each change
//! refetches through `use_latest_fetch`, so an older response can never
//! overwrite a newer one. The current page belongs to one search/tag pair and
//! falls back to page 1 when either changes.

#[cfg(test)]
#[path = "project_list_test.rs"]
mod project_list_test;

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::skeleton::ListSkeleton;
use crate::net::api::{self, ProjectQuery};
use crate::net::types::{Project, Tag};
use crate::state::fetch::FetchState;
use crate::util::latest::use_latest_fetch;
use crate::util::pagination::{PAGE_SIZE, total_pages};

/// Page choice remembered together with the filters it was made under.
#[derive(Clone, Debug, Default, PartialEq)]
struct PageChoice {
    search: String,
    tag: Option<String>,
    page: u32,
}

fn current_query(search: String, tag: Option<String>, choice: &PageChoice) -> ProjectQuery {
    let page = if choice.search == search && choice.tag == tag { choice.page.max(1) } else { 1 };
    ProjectQuery { search, tag, page: Some(page) }
}

#[component]
pub fn ProjectList(#[prop(into)] search: Signal<String>, selected_tag: RwSignal<Option<Tag>>) -> impl IntoView {
    let choice = RwSignal::new(PageChoice::default());

    let query = Memo::new(move |_| {
        let tag = selected_tag.with(|t| t.as_ref().map(|t| t.slug.clone()));
        choice.with(|c| current_query(search.get(), tag, c))
    });

    let projects = use_latest_fetch(move || query.get(), |q, signal| async move { api::fetch_projects(&q, &signal).await });

    let current_page = Signal::derive(move || query.with(|q| q.page.unwrap_or(1)));
    let total = Signal::derive(move || {
        projects.with(|s| s.ready().map_or(0, |page| total_pages(page.count, PAGE_SIZE)))
    });
    let on_page = Callback::new(move |page: u32| {
        let q = query.get_untracked();
        choice.set(PageChoice { search: q.search, tag: q.tag, page });
    });
    let on_tag = Callback::new(move |tag: Tag| selected_tag.set(Some(tag)));

    view! {
        <section class="projects">
            {move || {
                selected_tag
                    .get()
                    .map(|tag| {
                        view! {
                            <div class="projects__filter">
                                <span>"Showing projects tagged with: " <strong>{tag.name}</strong></span>
                                <button class="btn projects__clear" on:click=move |_| selected_tag.set(None)>
                                    "Clear filter"
                                </button>
                            </div>
                        }
                    })
            }}
            {move || match projects.get() {
                FetchState::Loading => view! { <ListSkeleton rows=4/> }.into_any(),
                FetchState::Failed(_) => {
                    view! { <p class="projects__error">"Could not load projects."</p> }.into_any()
                }
                FetchState::Ready(page) if page.items.is_empty() => {
                    view! { <p class="projects__empty">"No projects found."</p> }.into_any()
                }
                FetchState::Ready(page) => {
                    view! {
                        <div class="projects__grid">
                            {page
                                .items
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project on_tag=on_tag/> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
            <Pagination current=current_page total=total on_change=on_page/>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, on_tag: Callback<Tag>) -> impl IntoView {
    let technologies: Vec<String> = project.technology_list().into_iter().map(str::to_owned).collect();
    let alt = project.title.clone();

    view! {
        <article class="project-card">
            {project.image.clone().map(|src| view! { <img class="project-card__image" src=src alt=alt/> })}
            <h3 class="project-card__title">{project.title.clone()}</h3>
            <p class="project-card__description">{project.description.clone()}</p>
            <ul class="project-card__tech">
                {technologies.into_iter().map(|t| view! { <li>{t}</li> }).collect_view()}
            </ul>
            <div class="project-card__tags">
                {project
                    .tags
                    .iter()
                    .cloned()
                    .map(|tag| {
                        let name = tag.name.clone();
                        view! {
                            <button class="tag-cloud__tag" on:click=move |_| on_tag.run(tag.clone())>
                                {name}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="project-card__links">
                {project
                    .repository_url
                    .clone()
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer">
                                "Code"
                            </a>
                        }
                    })}
                {project
                    .live_url
                    .clone()
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer">
                                "Live"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
