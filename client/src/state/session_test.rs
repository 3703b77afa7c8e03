use super::*;

const PUBKEY: &str = "3bf0c63fcb93463407af97a5e5ee64fa883d107ef9e558472c4eb9aaaefa459d";

#[test]
fn default_session_is_logged_out() {
    let session = NostrSession::default();
    assert!(!session.is_logged_in());
    assert_eq!(session.short_pubkey(), None);
}

#[test]
fn empty_pubkey_is_not_logged_in() {
    let session = NostrSession { pubkey: Some(String::new()), ..NostrSession::default() };
    assert!(!session.is_logged_in());
    assert_eq!(session.short_pubkey(), None);
}

#[test]
fn login_flow_sets_pubkey() {
    let mut session = NostrSession::default();
    session.begin_login();
    assert!(session.pending);
    session.logged_in(PUBKEY.to_owned());
    assert!(!session.pending);
    assert!(session.is_logged_in());
    assert_eq!(session.short_pubkey().as_deref(), Some("3bf0c6...459d"));
}

#[test]
fn failed_login_records_error() {
    let mut session = NostrSession::default();
    session.begin_login();
    session.login_failed("extension missing".to_owned());
    assert!(!session.pending);
    assert_eq!(session.error.as_deref(), Some("extension missing"));
    assert!(!session.is_logged_in());
}

#[test]
fn logout_clears_everything() {
    let mut session = NostrSession::default();
    session.logged_in(PUBKEY.to_owned());
    session.logout();
    assert_eq!(session, NostrSession::default());
}

#[test]
fn persisted_form_only_keeps_pubkey() {
    let session = NostrSession { pubkey: Some("ab".to_owned()), pending: true, error: Some("x".to_owned()) };
    let json = serde_json::to_string(&session).unwrap();
    assert_eq!(json, r#"{"pubkey":"ab"}"#);
    let restored: NostrSession = serde_json::from_str(&json).unwrap();
    assert!(!restored.pending);
    assert_eq!(restored.error, None);
}
