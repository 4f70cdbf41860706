use stories_core::{update, AppState, Msg};

#[test]
fn tick_is_noop_once_started() {
    let (mut state, _effects) = update(AppState::default(), Msg::Tick);
    state.consume_dirty();

    let (mut next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
