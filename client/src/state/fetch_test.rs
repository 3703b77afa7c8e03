use super::*;

#[test]
fn default_is_loading() {
    let state = FetchState::<u8>::default();
    assert!(state.is_loading());
    assert_eq!(state.ready(), None);
    assert_eq!(state.failed(), None);
}

#[test]
fn current_success_becomes_ready() {
    let mut state = FetchState::Loading;
    assert!(state.resolve(true, Ok("tags")));
    assert_eq!(state.ready(), Some(&"tags"));
}

#[test]
fn current_failure_becomes_failed() {
    let mut state = FetchState::<()>::Loading;
    let err = ApiError::Status { status: 502, body: String::new() };
    assert!(state.resolve(true, Err(err.clone())));
    assert_eq!(state.failed(), Some(&err));
}

#[test]
fn abort_leaves_state_untouched() {
    let mut state = FetchState::Ready(3);
    assert!(!state.resolve(true, Err(ApiError::Aborted)));
    assert_eq!(state, FetchState::Ready(3));
}

#[test]
fn stale_outcome_is_ignored() {
    let mut state = FetchState::Ready(1);
    assert!(!state.resolve(false, Ok(2)));
    assert!(!state.resolve(false, Err(ApiError::Network("offline".to_owned()))));
    assert_eq!(state, FetchState::Ready(1));
}

#[test]
fn failure_can_recover_on_next_success() {
    let mut state = FetchState::Failed(ApiError::Decode("eof".to_owned()));
    assert!(state.resolve(true, Ok(5)));
    assert_eq!(state.ready(), Some(&5));
}

// =============================================================
// Background refresh
// =============================================================

#[test]
fn refresh_failure_keeps_loaded_data() {
    let mut state = FetchState::Ready(10);
    assert!(!state.refresh(Err(ApiError::Network("offline".to_owned()))));
    assert_eq!(state, FetchState::Ready(10));
}

#[test]
fn refresh_failure_before_first_load_is_failed() {
    let mut state = FetchState::<u32>::Loading;
    assert!(state.refresh(Err(ApiError::Status { status: 500, body: String::new() })));
    assert!(state.failed().is_some());
}

#[test]
fn refresh_success_replaces_data() {
    let mut state = FetchState::Ready(10);
    assert!(state.refresh(Ok(11)));
    assert_eq!(state.ready(), Some(&11));
}
