//! Chat assistant reply interpretation.
//!
//! The chat endpoint answers with free-form model output. Most replies are
//! markdown prose, but some questions ("what's your tech stack?") make the
//! model emit JSON cards, occasionally wrapped in prose or a code fence.
//!
//! DESIGN
//! ======
//! Interpretation never fails. The whole body is tried as strict JSON first.
//! If that does not parse, every `[` or `{` in the text is tried in order as
//! the start of a single JSON value, so markdown links before or after the
//! payload do not swallow it. The first value holding known content wins;
//! anything else is shown as plain text.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

static JSON_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[{]").expect("json start pattern"));

// =============================================================================
// CARDS
// =============================================================================

/// Structured content the assistant can return, keyed by `type`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentCard {
    Experience(ExperienceCard),
    Project(ProjectCard),
    Certification(CertificationCard),
    Blog(BlogCard),
    TechStack(TechStackCard),
    Topic(TopicCard),
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExperienceCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProjectCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CertificationCard {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct BlogCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TechStackCard {
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TopicCard {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

/// A citation attached to an answer.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceLink {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl SourceLink {
    /// Site-relative links are routed in-app; everything else opens externally.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.url.starts_with('/')
    }

    #[must_use]
    pub fn label(&self) -> String {
        if self.kind.is_empty() { self.title.clone() } else { format!("{} ({})", self.title, self.kind) }
    }
}

// =============================================================================
// INTERPRETATION
// =============================================================================

/// What a reply should render as.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatContent {
    /// Markdown prose.
    Text(String),
    /// A structured `{"error": ...}` reply.
    Error(String),
    Cards(Vec<ContentCard>),
}

/// A fully interpreted chat reply.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatReply {
    pub content: ChatContent,
    pub sources: Vec<SourceLink>,
}

#[derive(Deserialize)]
struct AnswerEnvelope {
    answer: String,
    #[serde(default)]
    sources: Option<Vec<SourceLink>>,
}

impl ChatReply {
    /// Interpret a raw response body. `{answer, sources}` envelopes are
    /// unwrapped; any other body is interpreted directly.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<AnswerEnvelope>(body.trim()) {
            Ok(envelope) => Self {
                content: interpret(&envelope.answer),
                sources: envelope
                    .sources
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|source| !source.url.is_empty())
                    .collect(),
            },
            Err(_) => Self { content: interpret(body), sources: Vec::new() },
        }
    }
}

/// Interpret raw assistant text. Never fails; unknown shapes become text.
#[must_use]
pub fn interpret(raw: &str) -> ChatContent {
    let trimmed = raw.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return structured(value).unwrap_or_else(|| ChatContent::Text(trimmed.to_owned()));
    }

    embedded_content(trimmed).unwrap_or_else(|| ChatContent::Text(trimmed.to_owned()))
}

/// Scan each candidate opening bracket and parse one JSON value from there,
/// ignoring whatever trails it. The first value with known content wins.
fn embedded_content(text: &str) -> Option<ChatContent> {
    JSON_START_RE.find_iter(text).find_map(|start| {
        serde_json::Deserializer::from_str(&text[start.start()..])
            .into_iter::<Value>()
            .next()?
            .ok()
            .and_then(structured)
    })
}

fn structured(value: Value) -> Option<ChatContent> {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(message)) = map.get("error") {
                return Some(ChatContent::Error(message.clone()));
            }
            let card = serde_json::from_value::<ContentCard>(Value::Object(map)).ok()?;
            Some(ChatContent::Cards(vec![card]))
        }
        Value::Array(items) => {
            let cards: Vec<ContentCard> = items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect();
            (!cards.is_empty()).then_some(ChatContent::Cards(cards))
        }
        _ => None,
    }
}

/// One prior exchange entry sent back to the assistant as context.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ChatTurn {
    /// `"user"` or `"assistant"`.
    pub role: String,
    pub content: String,
}

/// Keep the last `limit` turns for the request's `history` field.
#[must_use]
pub fn history_window<T: Clone>(turns: &[T], limit: usize) -> Vec<T> {
    turns[turns.len().saturating_sub(limit)..].to_vec()
}
