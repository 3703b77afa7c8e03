//! REST API calls against the portfolio backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each optionally tied
//! to a `RequestSignal` so superseded requests can be aborted.
//! Server-side (SSR): stubs returning `ApiError::Unavailable`, since the data
//! is only fetched once the page is live in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers distinguish
//! `ApiError::Aborted` (ignore) from everything else (empty or error state).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::abort::RequestSignal;
use super::chat::{ChatReply, ChatTurn};
#[cfg(any(test, feature = "hydrate"))]
use super::chat::{ChatContent, interpret};
use super::envelope::Page;
#[cfg(feature = "hydrate")]
use super::envelope::ListEnvelope;
use super::error::ApiError;
use crate::util::pagination::PAGE_SIZE;
use super::types::{
    BitcoinAddress, Certification, ContactSubmission, ContributionCalendar, GithubStats, NetworkStats, NostrNote,
    NostrProfile, Post, Product, Project, SearchResults, Tag,
};
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

/// Backend origin, fixed at build time from `FOLIO_API_BASE_URL`.
pub const API_BASE_URL: &str = match option_env!("FOLIO_API_BASE_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

/// Number of turns of prior conversation sent with each chat question.
pub const CHAT_HISTORY_LIMIT: usize = 10;

/// Filters for the project list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    /// Free-text skill query. Non-empty queries go through skill matching.
    pub search: String,
    /// Selected tag slug.
    pub tag: Option<String>,
    /// 1-based page. Server-side for the listing, client-side for matches.
    pub page: Option<u32>,
}

impl ProjectQuery {
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn list_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(tag) = self.tag.as_deref().filter(|t| !t.is_empty()) {
            params.push(("tag", tag.to_owned()));
        }
        if let Some(page) = self.page.filter(|p| *p > 1) {
            params.push(("page", page.to_string()));
        }
        params
    }

    /// Narrow skill-match results to the selected tag, then cut out the
    /// requested page. Matching returns every hit at once.
    #[must_use]
    pub fn page_of_matches(&self, matched: Page<Project>) -> Page<Project> {
        let narrowed = match self.tag.as_deref().filter(|t| !t.is_empty()) {
            Some(tag) => matched.filtered(|p| p.has_tag(tag)),
            None => matched,
        };
        narrowed.window(self.page.unwrap_or(1), PAGE_SIZE)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}/api/{}", API_BASE_URL.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn post_endpoint(slug: &str) -> String {
    endpoint(&format!("posts/{slug}/"))
}

#[cfg(any(test, feature = "hydrate"))]
fn contact_endpoint(via_nostr: bool) -> String {
    endpoint(if via_nostr { "nostr-contact/" } else { "contact/" })
}

#[cfg(any(test, feature = "hydrate"))]
fn page_params(page: u32) -> Vec<(&'static str, String)> {
    if page > 1 { vec![("page", page.to_string())] } else { Vec::new() }
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_request_body(question: &str, history: &[ChatTurn]) -> serde_json::Value {
    let history = super::chat::history_window(history, CHAT_HISTORY_LIMIT);
    if history.is_empty() {
        serde_json::json!({ "question": question })
    } else {
        serde_json::json!({ "question": question, "history": history })
    }
}

/// Contact endpoints may answer success with an empty or non-JSON body, so
/// only the status decides the outcome.
#[cfg(any(test, feature = "hydrate"))]
fn contact_outcome(ok: bool, status: u16, body: String) -> Result<(), ApiError> {
    if ok {
        return Ok(());
    }
    Err(ApiError::Status { status, body })
}

/// Turn a chat HTTP response into a reply. Error statuses whose body is a
/// structured `{"error": ...}` still render as an assistant message.
#[cfg(any(test, feature = "hydrate"))]
fn chat_reply_from_response(ok: bool, status: u16, body: String) -> Result<ChatReply, ApiError> {
    if ok {
        return Ok(ChatReply::from_body(&body));
    }
    match interpret(&body) {
        content @ ChatContent::Error(_) => Ok(ChatReply { content, sources: Vec::new() }),
        _ => Err(ApiError::Status { status, body }),
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response, signal: &RequestSignal) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::from_transport(e, signal.is_aborted()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(
    path: &str,
    params: &[(&'static str, String)],
    signal: &RequestSignal,
) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(&endpoint(path))
        .query(params.iter().map(|(k, v)| (*k, v.as_str())))
        .abort_signal(signal.as_web())
        .send()
        .await
        .map_err(|e| ApiError::from_transport(e, signal.is_aborted()))?;
    read_json(resp, signal).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T: DeserializeOwned>(
    url: &str,
    payload: &serde_json::Value,
    signal: &RequestSignal,
) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .abort_signal(signal.as_web())
        .json(payload)
        .map_err(|e| ApiError::from_transport(e, false))?
        .send()
        .await
        .map_err(|e| ApiError::from_transport(e, signal.is_aborted()))?;
    read_json(resp, signal).await
}

#[cfg(feature = "hydrate")]
async fn get_page<T: DeserializeOwned>(
    path: &str,
    params: &[(&'static str, String)],
    signal: &RequestSignal,
) -> Result<Page<T>, ApiError> {
    get_json::<ListEnvelope<T>>(path, params, signal)
        .await
        .map(ListEnvelope::into_page)
}

// =============================================================================
// RESOURCES
// =============================================================================

/// Load projects for `query`. A search term goes through `skill-match/`
/// (with the tag and page applied client-side); otherwise `projects/` is
/// listed.
///
/// # Errors
///
/// Returns an `ApiError` on transport, status or decode failure, or
/// `ApiError::Aborted` when `signal` fires first.
pub async fn fetch_projects(query: &ProjectQuery, signal: &RequestSignal) -> Result<Page<Project>, ApiError> {
    if let Some(term) = query.search_term() {
        let matched = match_skills(term, signal).await?;
        return Ok(query.page_of_matches(matched));
    }
    #[cfg(feature = "hydrate")]
    {
        get_page("projects/", &query.list_params(), signal).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = signal;
        Err(ApiError::Unavailable)
    }
}

/// Rank projects against a free-text skill query via `POST skill-match/`.
///
/// # Errors
///
/// See [`fetch_projects`].
pub async fn match_skills(query: &str, signal: &RequestSignal) -> Result<Page<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "query": query });
        post_json::<ListEnvelope<Project>>(&endpoint("skill-match/"), &payload, signal)
            .await
            .map(ListEnvelope::into_page)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (query, signal);
        Err(ApiError::Unavailable)
    }
}

/// # Errors
///
/// See [`fetch_projects`].
pub async fn fetch_tags(signal: &RequestSignal) -> Result<Vec<Tag>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_page::<Tag>("tags/", &[], signal).await.map(|page| page.items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = signal;
        Err(ApiError::Unavailable)
    }
}

/// # Errors
///
/// See [`fetch_projects`].
pub async fn fetch_certifications(page: u32, signal: &RequestSignal) -> Result<Page<Certification>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_page("certifications/", &page_params(page), signal).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, signal);
        Err(ApiError::Unavailable)
    }
}

/// # Errors
///
/// See [`fetch_projects`].
pub async fn fetch_products(page: u32, signal: &RequestSignal) -> Result<Page<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_page("products/", &page_params(page), signal).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, signal);
        Err(ApiError::Unavailable)
    }
}

/// # Errors
///
/// See [`fetch_projects`].
pub async fn fetch_posts(signal: &RequestSignal) -> Result<Vec<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_page::<Post>("posts/", &[], signal).await.map(|page| page.items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = signal;
        Err(ApiError::Unavailable)
    }
}

/// # Errors
///
/// See [`fetch_projects`]. An unknown slug surfaces as a 404 `ApiError::Status`.
pub async fn fetch_post(slug: &str, signal: &RequestSignal) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&post_endpoint(slug))
            .abort_signal(signal.as_web())
            .send()
            .await
            .map_err(|e| ApiError::from_transport(e, signal.is_aborted()))?;
        read_json(resp, signal).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (slug, signal);
        Err(ApiError::Unavailable)
    }
}

/// Full-text search across projects and posts via `search/?q=`.
///
/// # Errors
///
/// See [`fetch_projects`].
pub async fn search_portfolio(query: &str, signal: &RequestSignal) -> Result<SearchResults, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("search/", &[("q", query.trim().to_owned())], signal).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (query, signal);
        Err(ApiError::Unavailable)
    }
}

/// # Errors
///
/// See [`fetch_projects`].
pub async fn fetch_github_stats(signal: &RequestSignal) -> Result<GithubStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("github-stats/", &[], signal).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = signal;
        Err(ApiError::Unavailable)
    }
}

/// # Errors
///
/// See [`fetch_projects`].
pub async fn fetch_github_contributions(signal: &RequestSignal) -> Result<ContributionCalendar, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("github-contributions/", &[], signal).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = signal;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a Nostr profile. `None` loads the site owner's profile.
///
/// # Errors
///
/// See [`fetch_projects`].
pub async fn fetch_nostr_profile(pubkey: Option<&str>, signal: &RequestSignal) -> Result<NostrProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params: Vec<(&'static str, String)> = pubkey.map(|pk| ("pubkey", pk.to_owned())).into_iter().collect();
        get_json("nostr-profile/", &params, signal).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (pubkey, signal);
        Err(ApiError::Unavailable)
    }
}

/// # Errors
///
/// See [`fetch_projects`].
pub async fn fetch_latest_note(signal: &RequestSignal) -> Result<NostrNote, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("latest-note/", &[], signal).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = signal;
        Err(ApiError::Unavailable)
    }
}

/// # Errors
///
/// See [`fetch_projects`].
pub async fn fetch_bitcoin_address(signal: &RequestSignal) -> Result<BitcoinAddress, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("bitcoin-address/", &[], signal).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = signal;
        Err(ApiError::Unavailable)
    }
}

/// # Errors
///
/// See [`fetch_projects`].
pub async fn fetch_network_stats(signal: &RequestSignal) -> Result<NetworkStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("mempool-stats/", &[], signal).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = signal;
        Err(ApiError::Unavailable)
    }
}

/// Submit the contact form, either by email relay or as an encrypted Nostr DM.
///
/// # Errors
///
/// Validation failures come back as a 400 `ApiError::Status`; use
/// [`ApiError::field_errors`] to map them onto the form.
pub async fn submit_contact(form: &ContactSubmission, via_nostr: bool) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&contact_endpoint(via_nostr))
            .json(form)
            .map_err(|e| ApiError::from_transport(e, false))?
            .send()
            .await
            .map_err(|e| ApiError::from_transport(e, false))?;
        let ok = resp.ok();
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        contact_outcome(ok, status, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, via_nostr);
        Err(ApiError::Unavailable)
    }
}

/// Ask the assistant a question, sending the most recent turns as context.
///
/// # Errors
///
/// Returns an `ApiError` when the request fails outright. Structured
/// `{"error": ...}` replies are returned as `Ok` with `ChatContent::Error`.
pub async fn send_chat(question: &str, history: &[ChatTurn]) -> Result<ChatReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("chat/"))
            .json(&chat_request_body(question, history))
            .map_err(|e| ApiError::from_transport(e, false))?
            .send()
            .await
            .map_err(|e| ApiError::from_transport(e, false))?;
        let ok = resp.ok();
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::from_transport(e, false))?;
        chat_reply_from_response(ok, status, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (question, history);
        Err(ApiError::Unavailable)
    }
}
