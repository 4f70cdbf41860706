use crate::{Action, AppState, Effect, FetchOutcome, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// After every message the fetch subscription is checked, so a request is
/// issued exactly once per distinct active query, including the initial one.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let mut effects = match msg {
        Msg::TermChanged(term) => {
            if state.set_editable_term(term) {
                vec![Effect::PersistTerm {
                    value: state.query().editable_term().to_string(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::SearchSubmitted => {
            state.submit();
            Vec::new()
        }
        Msg::RemoveClicked(id) => {
            state.remove_item(id);
            Vec::new()
        }
        Msg::FetchCompleted {
            request_id,
            outcome,
        } => {
            if state.accept_completion(request_id) {
                let action = match outcome {
                    FetchOutcome::Success(items) => Action::FetchSuccess(items),
                    FetchOutcome::Failure => Action::FetchFailure,
                };
                state.apply(action);
            }
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    effects.extend(state.sync_fetch());
    (state, effects)
}
