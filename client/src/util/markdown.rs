//! Markdown to HTML for blog posts and assistant replies.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Render markdown to HTML for `inner_html`.
///
/// Raw inline and block HTML is dropped so neither post bodies nor model
/// output can inject markup.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// First `max_chars` characters of the plain text, cut on a word boundary.
#[must_use]
pub fn excerpt(markdown: &str, max_chars: usize) -> String {
    let text: String = Parser::new(markdown)
        .filter_map(|event| match event {
            Event::Text(t) | Event::Code(t) => Some(t.into_string()),
            Event::SoftBreak | Event::HardBreak | Event::End(_) => Some(" ".to_owned()),
            _ => None,
        })
        .collect();
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut out = String::new();
    for word in words {
        let extra = if out.is_empty() { word.chars().count() } else { word.chars().count() + 1 };
        if out.chars().count() + extra > max_chars {
            out.push_str("...");
            return out;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
