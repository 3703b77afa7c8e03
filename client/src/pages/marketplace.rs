//! Marketplace of products listed over Nostr.
//!
//! SYSTEM CONTEXT
//! ==============
//! Products come from `products/`, one page at a time. Opening a
//! product loads its merchant's Nostr profile; switching products aborts the
//! previous profile request.

#[cfg(test)]
#[path = "marketplace_test.rs"]
mod marketplace_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::modal::Modal;
use crate::components::nostr_profile::ProfileSummary;
use crate::components::pagination::Pagination;
use crate::components::skeleton::{ListSkeleton, LoadingSpinner};
use crate::net::api;
use crate::net::types::{NostrProfile, Product};
use crate::state::fetch::FetchState;
use crate::util::format::{format_price, truncate_pubkey};
use crate::util::latest::use_latest_fetch;
use crate::util::pagination::{PAGE_SIZE, total_pages};

/// Seller name for a product card: the profile label when known, otherwise
/// a shortened public key.
fn seller_label(profile: Option<&NostrProfile>, pubkey: &str) -> String {
    profile
        .and_then(NostrProfile::label)
        .map_or_else(|| truncate_pubkey(pubkey, 10, 4), str::to_owned)
}

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let page = RwSignal::new(1_u32);
    let products = use_latest_fetch(move || page.get(), |p, signal| async move { api::fetch_products(p, &signal).await });
    let total = Signal::derive(move || products.with(|s| s.ready().map_or(0, |p| total_pages(p.count, PAGE_SIZE))));

    let selected = RwSignal::new(None::<Product>);
    let seller = use_latest_fetch(
        move || selected.with(|p| p.as_ref().map(|p| p.merchant_pubkey.clone())),
        |pubkey, signal| async move {
            match pubkey.filter(|pk| !pk.is_empty()) {
                Some(pk) => api::fetch_nostr_profile(Some(&pk), &signal).await.map(Some),
                None => Ok(None),
            }
        },
    );
    let on_select = Callback::new(move |product: Product| selected.set(Some(product)));

    view! {
        <Title text="Marketplace"/>
        <div class="market-page">
            <h1>"Marketplace"</h1>
            {move || match products.get() {
                FetchState::Loading => view! { <ListSkeleton rows=4/> }.into_any(),
                FetchState::Failed(_) => {
                    view! { <p class="market-page__error">"Could not load products."</p> }.into_any()
                }
                FetchState::Ready(p) if p.items.is_empty() => {
                    view! { <p class="market-page__empty">"No products listed yet."</p> }.into_any()
                }
                FetchState::Ready(p) => {
                    view! {
                        <div class="market-page__grid">
                            {p
                                .items
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product on_select=on_select/> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
            <Pagination current=page total=total on_change=Callback::new(move |p| page.set(p))/>
            <Modal
                open=Signal::derive(move || selected.with(Option::is_some))
                on_close=Callback::new(move |()| selected.set(None))
                title="Seller"
            >
                {move || {
                    let pubkey = selected.with(|p| p.as_ref().map(|p| p.merchant_pubkey.clone())).unwrap_or_default();
                    match seller.get() {
                        FetchState::Loading => view! { <LoadingSpinner/> }.into_any(),
                        FetchState::Ready(Some(profile)) => view! { <ProfileSummary profile=profile/> }.into_any(),
                        FetchState::Ready(None) | FetchState::Failed(_) => {
                            view! { <p class="market-page__seller">{seller_label(None, &pubkey)}</p> }.into_any()
                        }
                    }
                }}
            </Modal>
        </div>
    }
}

#[component]
fn ProductCard(product: Product, on_select: Callback<Product>) -> impl IntoView {
    let price = format_price(product.price, product.currency.as_deref());
    let seller = seller_label(None, &product.merchant_pubkey);
    let cover = product.cover_image().map(str::to_owned);
    let alt = product.name.clone();
    let name = product.name.clone();
    let description = product.description.clone();

    view! {
        <article class="product-card">
            {cover.map(|src| view! { <img class="product-card__image" src=src alt=alt/> })}
            <h3 class="product-card__name">{name}</h3>
            <p class="product-card__description">{description}</p>
            <p class="product-card__price">{price}</p>
            <button class="btn product-card__seller" on:click=move |_| on_select.run(product.clone())>
                {seller}
            </button>
        </article>
    }
}
