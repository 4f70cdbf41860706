use stories_core::{query_url, QueryState, DEFAULT_ENDPOINT};

#[test]
fn active_query_starts_from_persisted_term() {
    let query = QueryState::new(DEFAULT_ENDPOINT, "Redux");
    assert_eq!(query.editable_term(), "Redux");
    assert_eq!(
        query.active_query(),
        "https://hn.algolia.com/api/v1/search?query=Redux"
    );
}

#[test]
fn editing_leaves_active_query_alone() {
    let mut query = QueryState::new("http://api/?q=", "");
    query.on_term_change("Rea");
    query.on_term_change("React");
    assert_eq!(query.editable_term(), "React");
    assert_eq!(query.active_query(), "http://api/?q=");

    query.on_submit("http://api/?q=");
    assert_eq!(query.active_query(), "http://api/?q=React");
}

#[test]
fn submit_uses_term_at_call_time() {
    let mut query = QueryState::new("http://api/?q=", "React");
    query.on_submit("http://api/?q=");
    query.on_term_change("Redux");
    assert_eq!(query.active_query(), "http://api/?q=React");
}

#[test]
fn terms_are_appended_without_escaping() {
    assert_eq!(query_url("http://api/?q=", "a b&c"), "http://api/?q=a b&c");
}

#[test]
fn empty_term_cannot_be_submitted() {
    let mut query = QueryState::new("http://api/?q=", "");
    assert!(!query.can_submit());
    query.on_term_change("x");
    assert!(query.can_submit());
}
