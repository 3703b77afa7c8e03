use super::*;

#[test]
fn renders_basic_markdown() {
    let html = render_markdown_html("# Title\n\nSome **bold** text.");
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<strong>bold</strong>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("Hi <script>alert(1)</script> there\n\n<div onclick=\"x\">block</div>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("onclick"));
    assert!(html.contains("Hi"));
}

#[test]
fn renders_lists_and_tables() {
    let html = render_markdown_html("- a\n- b\n\n| x | y |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<li>a</li>"));
    assert!(html.contains("<table>"));
}

#[test]
fn excerpt_returns_short_text_whole() {
    assert_eq!(excerpt("Hello *world*", 50), "Hello world");
}

#[test]
fn excerpt_cuts_on_word_boundary() {
    assert_eq!(excerpt("## Intro\n\nBitcoin is sound money for everyone", 20), "Intro Bitcoin is...");
}
