use super::*;

fn turn(role: &str, content: &str) -> ChatTurn {
    ChatTurn { role: role.to_owned(), content: content.to_owned() }
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoint_joins_base_and_api_prefix() {
    let url = endpoint("projects/");
    assert!(url.ends_with("/api/projects/"));
    assert!(url.starts_with(API_BASE_URL.trim_end_matches('/')));
    assert!(!url.contains("//api"));
}

#[test]
fn endpoint_strips_leading_slash_from_path() {
    assert_eq!(endpoint("/tags/"), endpoint("tags/"));
}

#[test]
fn post_endpoint_includes_slug() {
    assert!(post_endpoint("hello-nostr").ends_with("/api/posts/hello-nostr/"));
}

#[test]
fn contact_endpoint_switches_on_nostr() {
    assert!(contact_endpoint(false).ends_with("/api/contact/"));
    assert!(contact_endpoint(true).ends_with("/api/nostr-contact/"));
}

#[test]
fn page_params_omit_first_page() {
    assert!(page_params(0).is_empty());
    assert!(page_params(1).is_empty());
    assert_eq!(page_params(3), vec![("page", "3".to_owned())]);
}

// =============================================================
// ProjectQuery
// =============================================================

#[test]
fn empty_query_lists_everything() {
    let query = ProjectQuery::default();
    assert_eq!(query.search_term(), None);
    assert!(query.list_params().is_empty());
}

#[test]
fn whitespace_search_counts_as_cleared() {
    let query = ProjectQuery { search: "   ".to_owned(), ..ProjectQuery::default() };
    assert_eq!(query.search_term(), None);
}

#[test]
fn search_term_is_trimmed() {
    let query = ProjectQuery { search: "  rust ".to_owned(), ..ProjectQuery::default() };
    assert_eq!(query.search_term(), Some("rust"));
}

#[test]
fn list_params_carry_tag_and_page() {
    let query = ProjectQuery { search: String::new(), tag: Some("nostr".to_owned()), page: Some(2) };
    assert_eq!(query.list_params(), vec![("tag", "nostr".to_owned()), ("page", "2".to_owned())]);
}

#[test]
fn list_params_skip_blank_tag() {
    let query = ProjectQuery { tag: Some(String::new()), page: Some(1), ..ProjectQuery::default() };
    assert!(query.list_params().is_empty());
}

fn matches(count: u64, tagged_every: u64) -> Page<Project> {
    let items: Vec<Project> = (1..=count)
        .map(|id| Project {
            id,
            tags: if id % tagged_every == 0 {
                vec![Tag { name: "Rust".to_owned(), slug: "rust".to_owned() }]
            } else {
                Vec::new()
            },
            ..Project::default()
        })
        .collect();
    Page { count, items, has_next: false, has_previous: false }
}

#[test]
fn skill_matches_are_paged_client_side() {
    let query = ProjectQuery { search: "rust".to_owned(), tag: None, page: Some(2) };
    let page = query.page_of_matches(matches(20, 1));
    assert_eq!(page.items.len(), 8);
    assert_eq!(page.items.first().map(|p| p.id), Some(13));
    assert_eq!(page.count, 20);
    assert!(page.has_previous);
    assert!(!page.has_next);
}

#[test]
fn skill_matches_default_to_first_page() {
    let query = ProjectQuery { search: "rust".to_owned(), ..ProjectQuery::default() };
    let page = query.page_of_matches(matches(20, 1));
    assert_eq!(page.items.len(), 12);
    assert!(page.has_next);
    assert!(!page.has_previous);
}

#[test]
fn skill_matches_are_tagged_before_paging() {
    let query = ProjectQuery { search: "rust".to_owned(), tag: Some("rust".to_owned()), page: Some(2) };
    let page = query.page_of_matches(matches(60, 2));
    assert_eq!(page.count, 30);
    assert_eq!(page.items.len(), 12);
    assert!(page.items.iter().all(|p| p.has_tag("rust")));
}

// =============================================================
// Contact
// =============================================================

#[test]
fn contact_success_ignores_empty_body() {
    assert_eq!(contact_outcome(true, 201, String::new()), Ok(()));
}

#[test]
fn contact_success_ignores_non_json_body() {
    assert_eq!(contact_outcome(true, 200, "Message sent.".to_owned()), Ok(()));
}

#[test]
fn contact_validation_failure_keeps_field_errors() {
    let err = contact_outcome(false, 400, r#"{"email":["Enter a valid email address."]}"#.to_owned()).unwrap_err();
    assert_eq!(err.field_errors().get("email").as_deref(), Some("Enter a valid email address."));
}

#[test]
fn contact_server_error_is_status() {
    let err = contact_outcome(false, 502, String::new()).unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 502, .. }));
}

// =============================================================
// Chat
// =============================================================

#[test]
fn chat_body_without_history_sends_question_only() {
    let body = chat_request_body("What do you build?", &[]);
    assert_eq!(body, serde_json::json!({ "question": "What do you build?" }));
}

#[test]
fn chat_body_caps_history() {
    let history: Vec<ChatTurn> = (0..14).map(|i| turn("user", &format!("q{i}"))).collect();
    let body = chat_request_body("next", &history);
    let sent = body["history"].as_array().unwrap();
    assert_eq!(sent.len(), CHAT_HISTORY_LIMIT);
    assert_eq!(sent[0]["content"], "q4");
    assert_eq!(sent[9]["role"], "user");
}

#[test]
fn chat_reply_from_ok_response_is_interpreted() {
    let reply = chat_reply_from_response(true, 200, r#"{"answer":"Hi!","sources":[]}"#.to_owned()).unwrap();
    assert_eq!(reply.content, ChatContent::Text("Hi!".to_owned()));
}

#[test]
fn chat_structured_error_status_becomes_error_reply() {
    let reply = chat_reply_from_response(false, 503, r#"{"error":"AI service offline"}"#.to_owned()).unwrap();
    assert_eq!(reply.content, ChatContent::Error("AI service offline".to_owned()));
}

#[test]
fn chat_unstructured_error_status_is_err() {
    let err = chat_reply_from_response(false, 502, "Bad Gateway".to_owned()).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 502, body: "Bad Gateway".to_owned() });
}
