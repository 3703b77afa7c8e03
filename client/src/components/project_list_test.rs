use super::*;

fn choice(search: &str, tag: Option<&str>, page: u32) -> PageChoice {
    PageChoice { search: search.to_owned(), tag: tag.map(str::to_owned), page }
}

#[test]
fn page_is_kept_for_same_filters() {
    let q = current_query("rust".to_owned(), Some("web".to_owned()), &choice("rust", Some("web"), 3));
    assert_eq!(q.page, Some(3));
}

#[test]
fn page_resets_when_search_changes() {
    let q = current_query("go".to_owned(), None, &choice("rust", None, 3));
    assert_eq!(q.page, Some(1));
    assert_eq!(q.search, "go");
}

#[test]
fn page_resets_when_tag_changes() {
    let q = current_query(String::new(), Some("cli".to_owned()), &choice("", None, 2));
    assert_eq!(q.page, Some(1));
    assert_eq!(q.tag.as_deref(), Some("cli"));
}

#[test]
fn default_choice_starts_on_first_page() {
    let q = current_query(String::new(), None, &PageChoice::default());
    assert_eq!(q.page, Some(1));
}
