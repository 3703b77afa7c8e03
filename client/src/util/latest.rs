//! Latest-request-wins fetching for views whose inputs change over time.
//!
//! SYSTEM CONTEXT
//! ==============
//! Search boxes, tag filters and pagers all refetch when their input changes.
//! Responses can arrive out of order, so each request gets a `RequestTicket`
//! and only the newest ticket may write to view state. The previous request is
//! also aborted outright so the browser stops downloading it.

#[cfg(test)]
#[path = "latest_test.rs"]
mod latest_test;

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use leptos::prelude::*;

use crate::net::abort::{AbortGuard, RequestSignal};
use crate::net::error::ApiError;
use crate::state::fetch::FetchState;

/// Identifies one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Issues tickets and answers whether a ticket is still the current one.
#[derive(Debug, Default)]
pub struct RequestGate {
    issued: u64,
    closed: bool,
}

impl RequestGate {
    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        !self.closed && ticket.0 == self.issued
    }

    /// Owner is gone; no outstanding ticket may apply.
    pub fn invalidate(&mut self) {
        self.closed = true;
    }
}

fn lock(gate: &Mutex<RequestGate>) -> MutexGuard<'_, RequestGate> {
    gate.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Re-run `fetcher` whenever `dependency` changes and expose the outcome of
/// the newest run.
///
/// Each run aborts the previous one. Aborted and superseded outcomes are
/// dropped, so the returned state only ever reflects the current dependency.
pub fn use_latest_fetch<D, T, F, Fut>(
    dependency: impl Fn() -> D + 'static,
    fetcher: F,
) -> RwSignal<FetchState<T>>
where
    D: 'static,
    T: Send + Sync + 'static,
    F: Fn(D, RequestSignal) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = RwSignal::new(FetchState::Loading);
    let gate = Arc::new(Mutex::new(RequestGate::default()));

    let effect_gate = gate.clone();
    Effect::new(move |previous: Option<AbortGuard>| {
        drop(previous);

        let input = dependency();
        let ticket = lock(&effect_gate).begin();
        let guard = AbortGuard::new();
        let request = fetcher(input, guard.signal());

        if !state.with_untracked(FetchState::is_loading) {
            state.set(FetchState::Loading);
        }

        let task_gate = effect_gate.clone();
        leptos::task::spawn_local(async move {
            let outcome = request.await;
            let current = lock(&task_gate).is_current(ticket);
            if let Err(err) = &outcome {
                if current && !err.is_aborted() {
                    leptos::logging::warn!("request failed: {err}");
                }
            }
            state.update(|s| {
                s.resolve(current, outcome);
            });
        });

        guard
    });

    on_cleanup(move || lock(&gate).invalidate());

    state
}
