use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
struct Item {
    id: u32,
}

fn parse(raw: &str) -> ListEnvelope<Item> {
    serde_json::from_str(raw).unwrap()
}

// =============================================================
// Shape normalization
// =============================================================

#[test]
fn bare_array_and_envelope_normalize_to_same_items() {
    let bare = parse(r#"[{"id":1},{"id":2}]"#).into_items();
    let wrapped = parse(r#"{"count":2,"next":null,"previous":null,"results":[{"id":1},{"id":2}]}"#).into_items();
    assert_eq!(bare, wrapped);
    assert_eq!(bare, vec![Item { id: 1 }, Item { id: 2 }]);
}

#[test]
fn envelope_keeps_server_total_and_links() {
    let page = parse(r#"{"count":30,"next":"http://api/products/?page=3","previous":"http://api/products/?page=1","results":[{"id":13}]}"#)
        .into_page();
    assert_eq!(page.count, 30);
    assert!(page.has_next);
    assert!(page.has_previous);
    assert_eq!(page.items.len(), 1);
}

#[test]
fn envelope_without_count_falls_back_to_length() {
    let page = parse(r#"{"results":[{"id":1},{"id":2},{"id":3}]}"#).into_page();
    assert_eq!(page.count, 3);
    assert!(!page.has_next);
}

#[test]
fn bare_array_count_is_length() {
    let page = parse("[]").into_page();
    assert_eq!(page, Page::default());
}

#[test]
fn non_list_body_is_rejected() {
    assert!(serde_json::from_str::<ListEnvelope<Item>>(r#"{"detail":"Not found."}"#).is_err());
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filtered_recounts_items() {
    let page = parse(r#"{"count":40,"next":"x","results":[{"id":1},{"id":2},{"id":3}]}"#).into_page();
    let odd = page.filtered(|item| item.id % 2 == 1);
    assert_eq!(odd.items, vec![Item { id: 1 }, Item { id: 3 }]);
    assert_eq!(odd.count, 2);
    assert!(!odd.has_next);
}

// =============================================================
// Windowing
// =============================================================

fn numbered(count: u32) -> Page<Item> {
    ListEnvelope::Bare((1..=count).map(|id| Item { id }).collect()).into_page()
}

#[test]
fn window_keeps_full_total() {
    let page = numbered(20).window(2, 12);
    assert_eq!(page.items.first(), Some(&Item { id: 13 }));
    assert_eq!(page.items.len(), 8);
    assert_eq!(page.count, 20);
    assert!(page.has_previous);
    assert!(!page.has_next);
}

#[test]
fn window_past_the_end_is_empty() {
    let page = numbered(5).window(3, 12);
    assert!(page.items.is_empty());
    assert_eq!(page.count, 5);
}

#[test]
fn window_treats_page_zero_as_first() {
    let page = numbered(30).window(0, 12);
    assert_eq!(page.items.len(), 12);
    assert!(page.has_next);
    assert!(!page.has_previous);
}
