use super::*;

#[test]
fn same_stack_and_leaf_give_same_id() {
    let mut stack = IdStack::default();
    stack.push("window");
    let a = stack.id_for("ok");
    let b = stack.id_for("ok");
    assert_eq!(a, b);
    assert!(!a.is_empty());
}

#[test]
fn scope_changes_identity() {
    let mut stack = IdStack::default();
    let outer = stack.id_for("item");
    stack.push(3usize);
    let inner = stack.id_for("item");
    assert_ne!(outer, inner);
    stack.pop().unwrap();
    assert_eq!(stack.id_for("item"), outer);
}

#[test]
fn token_kinds_do_not_alias() {
    let text = WidgetId::global("7");
    let number = WidgetId::global(7u64);
    assert_ne!(text, number);
}

#[test]
fn location_tokens_distinguish_columns() {
    let a = WidgetId::global(location_key("lib.rs", 10, 5));
    let b = WidgetId::global(location_key("lib.rs", 10, 9));
    assert_ne!(a, b);
    assert_eq!(a, WidgetId::global(location_key("lib.rs", 10, 5)));
}

#[test]
fn caller_token_is_stable_in_a_loop() {
    let ids: Vec<WidgetId> = (0..3).map(|_| WidgetId::global(IdSource::caller())).collect();
    assert_eq!(ids[0], ids[1]);
    assert_eq!(ids[1], ids[2]);
}

#[test]
fn pop_on_empty_stack_is_an_error() {
    let mut stack = IdStack::default();
    assert!(matches!(
        stack.pop(),
        Err(UiError::EmptyStack {
            stack: StackKind::Id
        })
    ));
}

#[test]
fn nested_scopes_chain_from_the_parent() {
    let mut stack = IdStack::default();
    let first = stack.push("a");
    let second = stack.push("b");
    assert_eq!(second, first.child("b"));
    assert_eq!(stack.len(), 2);
}
