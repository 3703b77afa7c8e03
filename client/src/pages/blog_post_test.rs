use super::*;

#[test]
fn missing_post_reports_not_found() {
    let err = ApiError::Status { status: 404, body: r#"{"detail":"Not found."}"#.to_owned() };
    assert_eq!(failure_message(&err), "Post not found.");
}

#[test]
fn other_failures_are_generic() {
    assert_eq!(failure_message(&ApiError::Network("offline".to_owned())), "Could not load this post.");
    assert_eq!(
        failure_message(&ApiError::Status { status: 500, body: String::new() }),
        "Could not load this post."
    );
}
