use super::*;

// =============================================================
// ApiError
// =============================================================

#[test]
fn only_aborted_is_aborted() {
    assert!(ApiError::Aborted.is_aborted());
    assert!(!ApiError::Network("offline".to_owned()).is_aborted());
    assert!(!ApiError::Status { status: 500, body: String::new() }.is_aborted());
    assert!(!ApiError::Decode("eof".to_owned()).is_aborted());
    assert!(!ApiError::Unavailable.is_aborted());
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Status { status: 404, body: "missing".to_owned() };
    assert_eq!(err.to_string(), "unexpected status 404");
}

#[test]
fn field_errors_only_for_bad_request() {
    let body = r#"{"email":["Enter a valid email address."]}"#.to_owned();
    let bad = ApiError::Status { status: 400, body: body.clone() };
    let server = ApiError::Status { status: 500, body };
    assert_eq!(bad.field_errors().get("email").as_deref(), Some("Enter a valid email address."));
    assert!(server.field_errors().is_empty());
}

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn field_errors_join_multiple_messages() {
    let errors = FieldErrors::from_body(r#"{"message":["Too short.","Required."]}"#);
    assert_eq!(errors.get("message").as_deref(), Some("Too short. Required."));
    assert_eq!(errors.get("email"), None);
}

#[test]
fn field_errors_accept_plain_string_values() {
    let errors = FieldErrors::from_body(r#"{"error":"Nostr relay unavailable"}"#);
    assert_eq!(errors.get("error").as_deref(), Some("Nostr relay unavailable"));
}

#[test]
fn field_errors_ignore_non_object_bodies() {
    assert!(FieldErrors::from_body("Internal Server Error").is_empty());
    assert!(FieldErrors::from_body(r#"["a","b"]"#).is_empty());
    assert!(FieldErrors::from_body(r#"{"count": 3}"#).is_empty());
}
