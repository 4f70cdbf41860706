use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;
use stories_core::{transition, transition_tagged, Action, ActionDecodeError, FetchState, Item, ItemId};

fn item(id: u64, title: &str) -> Item {
    Item {
        title: title.to_string(),
        url: format!("https://{}.example.com/", title.to_lowercase()),
        author: "someone".to_string(),
        comment_count: 3,
        score: 4,
        id: ItemId::from(id),
    }
}

#[test]
fn init_success_remove_scenario() {
    let state = FetchState::new();
    assert_eq!(
        state,
        FetchState {
            items: Vec::new(),
            is_loading: false,
            is_error: false,
        }
    );

    let state = transition(state, Action::FetchInit);
    assert!(state.is_loading);
    assert!(!state.is_error);
    assert!(state.items.is_empty());

    let state = transition(
        state,
        Action::FetchSuccess(vec![item(0, "React"), item(1, "Redux")]),
    );
    assert!(!state.is_loading);
    assert!(!state.is_error);
    let ids: Vec<_> = state.items.iter().map(|i| i.id.clone()).collect();
    assert_eq!(ids, vec![ItemId::from(0), ItemId::from(1)]);

    let state = transition(state, Action::RemoveItem(ItemId::from(0)));
    assert_eq!(state.items, vec![item(1, "Redux")]);
}

#[test]
fn success_replaces_items_instead_of_merging() {
    let state = FetchState {
        items: vec![item(0, "React"), item(1, "Redux")],
        ..FetchState::default()
    };

    let state = transition(state, Action::FetchSuccess(vec![item(7, "Rust")]));
    assert_eq!(state.items, vec![item(7, "Rust")]);

    let state = transition(state, Action::FetchSuccess(Vec::new()));
    assert!(state.items.is_empty());
}

#[test]
fn failure_keeps_items_and_clears_loading() {
    let state = FetchState {
        items: vec![item(0, "React")],
        ..FetchState::default()
    };
    let state = transition(state, Action::FetchInit);
    let state = transition(state, Action::FetchFailure);

    assert!(!state.is_loading);
    assert!(state.is_error);
    assert_eq!(state.items, vec![item(0, "React")]);

    // A new init clears the error flag again.
    let state = transition(state, Action::FetchInit);
    assert!(state.is_loading);
    assert!(!state.is_error);
}

#[test]
fn removing_unknown_id_is_a_no_op() {
    let state = FetchState {
        items: vec![item(0, "React")],
        is_loading: false,
        is_error: true,
    };
    let next = transition(state.clone(), Action::RemoveItem(ItemId::from("missing")));
    assert_eq!(next, state);
}

#[test]
fn actions_use_tagged_serialized_form() {
    let value = serde_json::to_value(Action::RemoveItem(ItemId::from(3))).unwrap();
    assert_eq!(value, json!({"type": "REMOVE_ITEM", "payload": "3"}));

    let value = serde_json::to_value(Action::FetchInit).unwrap();
    assert_eq!(value, json!({"type": "FETCH_INIT"}));
}

#[test]
fn tagged_transition_decodes_payloads() {
    let payload = json!([
        {"title": "React", "url": "https://reactjs.org/", "author": "Jordan Walke",
         "comment_count": 3, "score": 4, "id": 0},
        {"title": "Redux", "url": "https://redux.js.org/", "author": "Dan Abramov, Andrew Clark",
         "comment_count": 2, "score": 5, "id": 1},
    ]);
    let state = transition_tagged(FetchState::new(), Action::FETCH_INIT, None);
    let state = transition_tagged(state, Action::FETCH_SUCCESS, Some(payload));
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].author, "Dan Abramov, Andrew Clark");

    let state = transition_tagged(state, Action::REMOVE_ITEM, Some(json!(0)));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, ItemId::from("1"));
}

#[test]
fn decode_reports_unknown_kind_and_bad_payloads() {
    assert!(matches!(
        Action::decode("STORIES_FETCH_INTI", None),
        Err(ActionDecodeError::UnknownKind(kind)) if kind == "STORIES_FETCH_INTI"
    ));
    assert!(matches!(
        Action::decode(Action::REMOVE_ITEM, None),
        Err(ActionDecodeError::MissingPayload { .. })
    ));
    assert!(matches!(
        Action::decode(Action::FETCH_SUCCESS, Some(json!({"hits": []}))),
        Err(ActionDecodeError::InvalidPayload { .. })
    ));
}

#[test]
#[should_panic(expected = "unknown fetch action kind")]
fn unknown_action_kind_aborts() {
    let state = FetchState {
        items: vec![item(0, "React")],
        ..FetchState::default()
    };
    let _ = transition_tagged(state, "FETCH_SUCESS", None);
}

#[test]
#[should_panic(expected = "requires a payload")]
fn missing_payload_aborts() {
    let _ = transition_tagged(FetchState::new(), Action::FETCH_SUCCESS, None);
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::FetchInit),
        Just(Action::FetchFailure),
        proptest::collection::vec(0u64..8, 0..6).prop_map(|ids| {
            Action::FetchSuccess(ids.into_iter().map(|id| item(id, "Story")).collect())
        }),
        (0u64..8).prop_map(|id| Action::RemoveItem(ItemId::from(id))),
    ]
}

proptest! {
    #[test]
    fn removals_drop_the_id_and_keep_order(
        ids in proptest::collection::vec(0u64..16, 0..24),
        removals in proptest::collection::vec(0u64..16, 0..8),
    ) {
        let items: Vec<Item> = ids.iter().map(|&id| item(id, "Story")).collect();
        let mut state = transition(FetchState::new(), Action::FetchSuccess(items.clone()));

        for &removed in &removals {
            state = transition(state, Action::RemoveItem(ItemId::from(removed)));
            prop_assert!(state.items.iter().all(|i| i.id != ItemId::from(removed)));
        }

        let expected: Vec<Item> = items
            .into_iter()
            .filter(|i| !removals.iter().any(|&r| i.id == ItemId::from(r)))
            .collect();
        prop_assert_eq!(state.items, expected);
    }

    #[test]
    fn loading_and_error_are_never_both_set(actions in proptest::collection::vec(arb_action(), 0..32)) {
        let mut state = FetchState::new();
        for action in actions {
            state = transition(state, action);
            prop_assert!(!(state.is_loading && state.is_error));
        }
    }

    #[test]
    fn success_always_replaces(
        before in proptest::collection::vec(0u64..8, 0..6),
        after in proptest::collection::vec(8u64..16, 0..6),
    ) {
        let prior: Vec<Item> = before.into_iter().map(|id| item(id, "Old")).collect();
        let payload: Vec<Item> = after.into_iter().map(|id| item(id, "New")).collect();
        let state = FetchState { items: prior, ..FetchState::default() };

        let state = transition(state, Action::FetchSuccess(payload.clone()));
        prop_assert_eq!(state.items, payload);
    }
}
