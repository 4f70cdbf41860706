use crate::orchestrator::Orchestrator;
use crate::view_model::{AppViewModel, ItemRowView};
use crate::{transition, Action, Effect, FetchState, ItemId, QueryState, RequestId};

/// Root-owned view state: the query pair, the fetch state and request bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    endpoint: String,
    query: QueryState,
    stories: FetchState,
    orchestrator: Orchestrator,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::DEFAULT_ENDPOINT, "")
    }
}

impl AppState {
    /// `initial_term` is usually the value restored from the durable store.
    pub fn new(endpoint: impl Into<String>, initial_term: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let query = QueryState::new(&endpoint, initial_term);
        Self {
            endpoint,
            query,
            stories: FetchState::new(),
            orchestrator: Orchestrator::default(),
            dirty: true,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            editable_term: self.query.editable_term().to_string(),
            can_submit: self.query.can_submit(),
            is_loading: self.stories.is_loading,
            is_error: self.stories.is_error,
            items: self
                .stories
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| ItemRowView {
                    row: index + 1,
                    id: item.id.clone(),
                    title: item.title.clone(),
                    url: item.url.clone(),
                    author: item.author.clone(),
                    comment_count: item.comment_count,
                    score: item.score,
                })
                .collect(),
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn stories(&self) -> &FetchState {
        &self.stories
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.orchestrator.in_flight()
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns `false` when the term is unchanged.
    pub(crate) fn set_editable_term(&mut self, term: String) -> bool {
        if self.query.editable_term() == term {
            return false;
        }
        self.query.on_term_change(term);
        self.mark_dirty();
        true
    }

    pub(crate) fn submit(&mut self) {
        self.query.on_submit(&self.endpoint);
    }

    pub(crate) fn apply(&mut self, action: Action) {
        let stories = std::mem::take(&mut self.stories);
        self.stories = transition(stories, action);
        self.mark_dirty();
    }

    pub(crate) fn remove_item(&mut self, id: ItemId) {
        if self.stories.items.iter().any(|item| item.id == id) {
            self.apply(Action::RemoveItem(id));
        }
    }

    pub(crate) fn accept_completion(&mut self, request_id: RequestId) -> bool {
        self.orchestrator.accept(request_id)
    }

    /// Fires the fetch subscription if the active query moved since the last request.
    pub(crate) fn sync_fetch(&mut self) -> Vec<Effect> {
        match self.orchestrator.sync(self.query.active_query()) {
            Some(effects) => {
                self.apply(Action::FetchInit);
                effects
            }
            None => Vec::new(),
        }
    }
}
