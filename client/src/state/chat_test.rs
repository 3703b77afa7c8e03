use super::*;
use crate::net::chat::{ContentCard, TopicCard};

fn text_reply(text: &str) -> ChatReply {
    ChatReply { content: ChatContent::Text(text.to_owned()), sources: Vec::new() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_has_greeting_only() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, ChatRole::Assistant);
    assert_eq!(state.messages[0].content, ChatContent::Text(GREETING.to_owned()));
    assert!(!state.loading);
    assert!(!state.open);
}

#[test]
fn greeting_is_not_history() {
    assert!(ChatState::default().history().is_empty());
}

// =============================================================
// Asking
// =============================================================

#[test]
fn ask_trims_and_marks_loading() {
    let mut state = ChatState::default();
    let (question, history) = state.ask("  What is your stack?  ").unwrap();
    assert_eq!(question, "What is your stack?");
    assert!(history.is_empty());
    assert!(state.loading);
    assert_eq!(state.messages.last().unwrap().role, ChatRole::User);
}

#[test]
fn ask_rejects_blank_input() {
    let mut state = ChatState::default();
    assert_eq!(state.ask("   "), None);
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn ask_rejects_while_waiting() {
    let mut state = ChatState::default();
    state.ask("first").unwrap();
    assert_eq!(state.ask("second"), None);
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn history_excludes_the_new_question() {
    let mut state = ChatState::default();
    state.ask("one").unwrap();
    state.receive(text_reply("uno"));
    let (_, history) = state.ask("two").unwrap();
    assert_eq!(
        history,
        vec![
            ChatTurn { role: "user".to_owned(), content: "one".to_owned() },
            ChatTurn { role: "assistant".to_owned(), content: "uno".to_owned() },
        ]
    );
}

// =============================================================
// Replies
// =============================================================

#[test]
fn receive_clears_loading_and_keeps_sources() {
    let mut state = ChatState::default();
    state.ask("q").unwrap();
    state.receive(ChatReply {
        content: ChatContent::Text("a".to_owned()),
        sources: vec![SourceLink { title: "Post".to_owned(), url: "/blog/post".to_owned(), kind: "blog".to_owned() }],
    });
    assert!(!state.loading);
    assert_eq!(state.messages.last().unwrap().sources.len(), 1);
}

#[test]
fn fail_appends_apology() {
    let mut state = ChatState::default();
    state.ask("q").unwrap();
    state.fail();
    assert!(!state.loading);
    assert_eq!(
        state.messages.last().unwrap().content,
        ChatContent::Error(CONNECTION_FAILURE.to_owned())
    );
}

#[test]
fn apology_is_not_history() {
    let mut state = ChatState::default();
    state.ask("first").unwrap();
    state.fail();
    let (_, history) = state.ask("second").unwrap();
    assert!(history.iter().all(|turn| turn.content != CONNECTION_FAILURE));
    assert_eq!(
        history.iter().map(|turn| turn.content.as_str()).collect::<Vec<_>>(),
        vec!["first"]
    );
}

#[test]
fn history_serializes_cards_and_skips_errors() {
    let mut state = ChatState::default();
    state.ask("topics?").unwrap();
    state.receive(ChatReply {
        content: ChatContent::Cards(vec![ContentCard::Topic(TopicCard {
            name: "Rust".to_owned(),
            content: "Learning".to_owned(),
        })]),
        sources: Vec::new(),
    });
    state.ask("again").unwrap();
    state.receive(ChatReply { content: ChatContent::Error("quota".to_owned()), sources: Vec::new() });

    let history = state.history();
    assert_eq!(history.len(), 3);
    assert!(history[1].content.contains(r#""type":"topic""#));
    assert_eq!(history[2].content, "again");
}

#[test]
fn message_ids_are_unique() {
    let mut state = ChatState::default();
    state.ask("a").unwrap();
    state.receive(text_reply("b"));
    assert_ne!(state.messages[1].id, state.messages[2].id);
}
