/// Base URL of the Hacker News search API; the term is appended verbatim.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

/// Durable-store key holding the editable search term.
pub const SEARCH_KEY: &str = "search";

/// Builds the request URL for a term. The term is not escaped.
pub fn query_url(endpoint: &str, term: &str) -> String {
    format!("{endpoint}{term}")
}

/// The live search box text and the query that actually drives requests.
///
/// Typing only touches `editable_term`; `active_query` moves on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    editable_term: String,
    active_query: String,
}

impl QueryState {
    pub fn new(endpoint: &str, editable_term: impl Into<String>) -> Self {
        let editable_term = editable_term.into();
        let active_query = query_url(endpoint, &editable_term);
        Self {
            editable_term,
            active_query,
        }
    }

    pub fn editable_term(&self) -> &str {
        &self.editable_term
    }

    pub fn active_query(&self) -> &str {
        &self.active_query
    }

    pub fn on_term_change(&mut self, new_term: impl Into<String>) {
        self.editable_term = new_term.into();
    }

    /// Commits the current editable term. An empty term is not rejected here;
    /// the view is expected to consult [`QueryState::can_submit`] first.
    pub fn on_submit(&mut self, endpoint: &str) {
        self.active_query = query_url(endpoint, &self.editable_term);
    }

    pub fn can_submit(&self) -> bool {
        !self.editable_term.is_empty()
    }
}
