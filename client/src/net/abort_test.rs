#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn detached_signal_is_never_aborted() {
    assert!(!RequestSignal::none().is_aborted());
}

#[test]
fn guard_signal_is_inert_outside_browser() {
    let guard = AbortGuard::new();
    let signal = guard.signal();
    guard.abort();
    assert!(!signal.is_aborted());
    drop(guard);
    assert!(!signal.is_aborted());
}
