use crate::{Item, ItemId, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search box.
    TermChanged(String),
    /// User submitted the current search term.
    SearchSubmitted,
    /// User dismissed an item from the list.
    RemoveClicked(ItemId),
    /// Engine finished a request.
    FetchCompleted {
        request_id: RequestId,
        outcome: FetchOutcome,
    },
    /// Start-up or render tick.
    Tick,
}

/// What the core learns about a finished request. Failure details stay in the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success(Vec<Item>),
    Failure,
}
