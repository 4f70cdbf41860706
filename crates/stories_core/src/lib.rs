//! Hacker stories core: pure query/fetch state machine and view-model helpers.
mod effect;
mod fetch_state;
mod item;
mod msg;
mod orchestrator;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use fetch_state::{transition, transition_tagged, Action, ActionDecodeError, FetchState};
pub use item::{Item, ItemId};
pub use msg::{FetchOutcome, Msg};
pub use orchestrator::RequestId;
pub use query::{query_url, QueryState, DEFAULT_ENDPOINT, SEARCH_KEY};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, ItemRowView};
