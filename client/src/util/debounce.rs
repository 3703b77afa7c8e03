//! Debounced signals for search-as-you-type inputs.
//!
//! DESIGN
//! ======
//! `Debouncer` is the timer-free core: each `push` supersedes the previous
//! pending value, and only the ticket of the newest push can settle it.
//! `use_debounce` drives that core with browser timeouts, so a settled value
//! appears once the input has been quiet for the full delay and intermediate
//! keystrokes are never emitted.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use leptos::prelude::*;

/// Quiet period used by the search inputs.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Identifies one scheduled settle. Stale tickets settle nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Latest-value-wins debounce state.
#[derive(Debug)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self { generation: 0, pending: None }
    }
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new input, replacing any pending one.
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket(self.generation)
    }

    /// Release the pending value if `ticket` belongs to the newest push.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.0 == self.generation { self.pending.take() } else { None }
    }

    /// Drop the pending value; every outstanding ticket becomes stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

fn lock<T>(debouncer: &Mutex<Debouncer<T>>) -> MutexGuard<'_, Debouncer<T>> {
    debouncer.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Follow `source`, updating the returned signal only after `source` has
/// stopped changing for `delay`.
pub fn use_debounce<T>(source: Signal<T>, delay: Duration) -> ReadSignal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let settled = RwSignal::new(source.get_untracked());
    let debouncer = Arc::new(Mutex::new(Debouncer::<T>::new()));

    let effect_debouncer = debouncer.clone();
    Effect::new(move || {
        let value = source.get();
        #[cfg(feature = "hydrate")]
        {
            let ticket = lock(&effect_debouncer).push(value);
            let timer_debouncer = effect_debouncer.clone();
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, move || {
                let Some(value) = lock(&timer_debouncer).settle(ticket) else {
                    return;
                };
                if settled.get_untracked() != value {
                    settled.set(value);
                }
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&effect_debouncer, delay);
            settled.set(value);
        }
    });

    on_cleanup(move || lock(&debouncer).cancel());

    settled.read_only()
}
