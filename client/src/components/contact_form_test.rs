use super::*;

#[test]
fn success_clears_field_errors() {
    let (status, fields) = SendStatus::from_outcome(&Ok(()));
    assert_eq!(status, SendStatus::Sent);
    assert!(fields.is_empty());
}

#[test]
fn validation_failure_maps_fields() {
    let err = ApiError::Status { status: 400, body: r#"{"email":["Enter a valid email address."]}"#.to_owned() };
    let (status, fields) = SendStatus::from_outcome(&Err(err));
    assert_eq!(status, SendStatus::Failed(INVALID_MESSAGE.to_owned()));
    assert_eq!(fields.get("email").as_deref(), Some("Enter a valid email address."));
}

#[test]
fn server_failure_is_generic() {
    let err = ApiError::Status { status: 500, body: "boom".to_owned() };
    let (status, fields) = SendStatus::from_outcome(&Err(err));
    assert_eq!(status, SendStatus::Failed(FAILED_MESSAGE.to_owned()));
    assert!(fields.is_empty());
}

#[test]
fn network_failure_is_generic() {
    let (status, _) = SendStatus::from_outcome(&Err(ApiError::Network("offline".to_owned())));
    assert_eq!(status, SendStatus::Failed(FAILED_MESSAGE.to_owned()));
}

#[test]
fn only_sending_blocks_resubmit() {
    assert!(SendStatus::Sending.is_sending());
    assert!(!SendStatus::Idle.is_sending());
    assert!(!SendStatus::Failed(String::new()).is_sending());
}
