use serde::{Deserialize, Serialize};
use serde_json::Value;
use stories_logging::stories_trace;

use crate::{Item, ItemId};

/// Items of the last successful fetch plus the lifecycle flags.
///
/// `is_loading` and `is_error` are never both set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchState {
    pub items: Vec<Item>,
    pub is_loading: bool,
    pub is_error: bool,
}

impl FetchState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Lifecycle and removal actions accepted by [`transition`].
///
/// The serialized form is tagged: `{"type": "FETCH_SUCCESS", "payload": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    FetchInit,
    FetchSuccess(Vec<Item>),
    FetchFailure,
    RemoveItem(ItemId),
}

#[derive(Debug, thiserror::Error)]
pub enum ActionDecodeError {
    #[error("unknown fetch action kind `{0}`")]
    UnknownKind(String),
    #[error("fetch action `{kind}` requires a payload")]
    MissingPayload { kind: String },
    #[error("invalid payload for fetch action `{kind}`: {source}")]
    InvalidPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Action {
    pub const FETCH_INIT: &'static str = "FETCH_INIT";
    pub const FETCH_SUCCESS: &'static str = "FETCH_SUCCESS";
    pub const FETCH_FAILURE: &'static str = "FETCH_FAILURE";
    pub const REMOVE_ITEM: &'static str = "REMOVE_ITEM";

    /// Wire tag of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::FetchInit => Self::FETCH_INIT,
            Action::FetchSuccess(_) => Self::FETCH_SUCCESS,
            Action::FetchFailure => Self::FETCH_FAILURE,
            Action::RemoveItem(_) => Self::REMOVE_ITEM,
        }
    }

    /// Builds an action from its tag and optional JSON payload.
    ///
    /// Payloads of kinds that take none are ignored.
    pub fn decode(kind: &str, payload: Option<Value>) -> Result<Self, ActionDecodeError> {
        match kind {
            Self::FETCH_INIT => Ok(Action::FetchInit),
            Self::FETCH_FAILURE => Ok(Action::FetchFailure),
            Self::FETCH_SUCCESS => decode_payload(kind, payload).map(Action::FetchSuccess),
            Self::REMOVE_ITEM => decode_payload(kind, payload).map(Action::RemoveItem),
            other => Err(ActionDecodeError::UnknownKind(other.to_string())),
        }
    }
}

fn decode_payload<T>(kind: &str, payload: Option<Value>) -> Result<T, ActionDecodeError>
where
    T: serde::de::DeserializeOwned,
{
    let payload = payload.ok_or_else(|| ActionDecodeError::MissingPayload {
        kind: kind.to_string(),
    })?;
    serde_json::from_value(payload).map_err(|source| ActionDecodeError::InvalidPayload {
        kind: kind.to_string(),
        source,
    })
}

/// Pure transition of the fetch state.
pub fn transition(mut state: FetchState, action: Action) -> FetchState {
    let kind = action.kind();
    match action {
        Action::FetchInit => {
            state.is_loading = true;
            state.is_error = false;
        }
        Action::FetchSuccess(items) => {
            state.items = items;
            state.is_loading = false;
            state.is_error = false;
        }
        Action::FetchFailure => {
            state.is_loading = false;
            state.is_error = true;
        }
        Action::RemoveItem(id) => {
            state.items.retain(|item| item.id != id);
        }
    }
    debug_assert!(!(state.is_loading && state.is_error));

    stories_trace!(
        "{} -> items={} loading={} error={}",
        kind,
        state.items.len(),
        state.is_loading,
        state.is_error
    );
    state
}

/// Applies an action given in tagged form.
///
/// # Panics
///
/// Panics if `kind` is not a known action or the payload does not fit it;
/// either one is a bug in the caller.
pub fn transition_tagged(state: FetchState, kind: &str, payload: Option<Value>) -> FetchState {
    match Action::decode(kind, payload) {
        Ok(action) => transition(state, action),
        Err(err) => panic!("fetch state contract violated: {err}"),
    }
}
