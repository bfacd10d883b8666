use super::*;

fn controller_of(values: &[&str]) -> RootController {
    RootController::with_items(values.iter().map(|v| ListItem::new(*v)).collect())
}

fn values(controller: &RootController) -> Vec<&str> {
    controller
        .items()
        .iter()
        .map(|item| item.value.as_str())
        .collect()
}

fn enter() -> FinishEvent {
    FinishEvent::KeyUp(Key::Enter)
}

#[test]
fn add_to_empty_list_shows_count_one() {
    let mut controller = RootController::new();
    controller.add_item("buy milk");

    assert_eq!(values(&controller), vec!["buy milk"]);
    assert_eq!(controller.view().count, 1);
}

#[test]
fn empty_add_is_rejected() {
    let mut controller = controller_of(&["a"]);
    controller.add_item("");
    assert_eq!(values(&controller), vec!["a"]);
}

#[test]
fn delete_first_of_two() {
    let mut controller = controller_of(&["x", "y"]);
    controller.delete_item(0);
    assert_eq!(values(&controller), vec!["y"]);
}

#[test]
fn blur_after_change_reverts() {
    let mut controller = controller_of(&["a"]);
    controller.value_change(0, "ab");
    assert_eq!(values(&controller), vec!["ab"]);

    let outcome = controller.handle_finish(0, &FinishEvent::Blur);
    assert_eq!(outcome, FinishOutcome::Reverted);
    assert_eq!(values(&controller), vec!["a"]);
    assert!(!controller.edit_state().is_editing());
}

#[test]
fn commit_defers_focus_release_until_drained() {
    let mut controller = controller_of(&["a", "b"]);
    controller.value_change(1, "bee");
    let outcome = controller.handle_finish(1, &enter());

    assert_eq!(outcome, FinishOutcome::Committed);
    assert_eq!(values(&controller), vec!["a", "bee"]);
    assert!(controller.has_pending_effects());

    let effects = controller.drain_effects();
    assert_eq!(effects, vec![Effect::ReleaseFocus { index: 1 }]);
    assert!(!controller.has_pending_effects());

    // Releasing focus produces a blur; the commit has already landed.
    for effect in effects {
        let Effect::ReleaseFocus { index } = effect;
        controller.handle_finish(index, &FinishEvent::Blur);
    }
    assert_eq!(values(&controller), vec!["a", "bee"]);
}

#[test]
fn emptied_only_row_is_removed_on_enter() {
    let mut controller = controller_of(&["only"]);
    controller.value_change(0, "");
    let outcome = controller.handle_finish(0, &enter());

    assert_eq!(outcome, FinishOutcome::Deleted);
    assert!(controller.items().is_empty());
    assert_eq!(controller.view().count, 0);
    assert!(controller.drain_effects().is_empty());
}

#[test]
fn enter_without_change_leaves_list_unchanged() {
    let mut controller = controller_of(&["a", "b"]);
    controller.value_change(0, "a");
    controller.handle_finish(0, &enter());

    assert_eq!(values(&controller), vec!["a", "b"]);
    assert_eq!(controller.edit_state(), &EditState::Idle);
}

#[test]
fn non_enter_key_up_does_nothing() {
    let mut controller = controller_of(&["a"]);
    controller.value_change(0, "ax");
    let outcome = controller.handle_finish(0, &FinishEvent::KeyUp(Key::from_name("x")));

    assert_eq!(outcome, FinishOutcome::Ignored);
    assert_eq!(values(&controller), vec!["ax"]);
    assert!(controller.edit_state().is_editing());
    assert!(!controller.has_pending_effects());
}

#[test]
fn intents_route_to_mutations() {
    let mut controller = controller_of(&["a", "b", "c"]);

    controller.apply(ListIntent::Change {
        index: 2,
        value: "see".to_string(),
    });
    let outcome = controller.apply(ListIntent::Finish {
        index: 2,
        event: enter(),
    });
    assert_eq!(outcome, Some(FinishOutcome::Committed));

    controller.apply(ListIntent::Delete { index: 0 });
    assert_eq!(values(&controller), vec!["b", "see"]);
}

#[test]
fn header_submit_appends_item_and_clears_draft() {
    let mut controller = controller_of(&["a"]);

    assert!(!controller.apply_header(HeaderIntent::Change("new todo".to_string())));
    assert_eq!(controller.header().value(), "new todo");

    assert!(!controller.apply_header(HeaderIntent::KeyUp(Key::from_name("o"))));
    assert!(controller.apply_header(HeaderIntent::KeyUp(Key::Enter)));

    assert_eq!(values(&controller), vec!["a", "new todo"]);
    assert_eq!(controller.header().value(), "");
    assert!(!controller.apply_header(HeaderIntent::KeyUp(Key::Enter)));
}

#[test]
fn seed_replaces_items() {
    let mut controller = controller_of(&["stale"]);
    controller.seed(vec![ListItem::new("fresh")]);
    assert_eq!(values(&controller), vec!["fresh"]);
}

#[test]
#[should_panic(expected = "row 3: list has 1 items")]
fn value_change_out_of_range_panics() {
    let mut controller = controller_of(&["a"]);
    controller.value_change(3, "x");
}
