use super::*;

#[test]
fn plain_field_appends_typed_text_at_caret() {
    let mut field = PlainTextField::default();
    field.set_text_and_selection("ab", 2, 2);
    let handled = field
        .handle_input(&InputSnapshot::new().with_text("cd"), Point::ZERO)
        .unwrap();
    assert!(handled);
    assert_eq!(field.text(), "abcd");
    assert_eq!(field.selection(), (4, 4));
}

#[test]
fn plain_field_leaves_keys_to_the_widget() {
    let mut field = PlainTextField::default();
    field.set_text_and_selection("ab", 2, 2);
    let handled = field
        .handle_input(&InputSnapshot::new(), Point::ZERO)
        .unwrap();
    assert!(!handled);
    assert_eq!(field.text(), "ab");
}

#[test]
fn plain_input_keeps_one_field_per_widget() {
    let mut input = PlainTextInput::new();
    let a = WidgetId::global("a");
    let b = WidgetId::global("b");
    input.field(a).set_text_and_selection("first", 0, 0);
    input.field(b).set_text_and_selection("second", 0, 0);
    assert_eq!(input.field(a).text(), "first");
    assert_eq!(input.len(), 2);

    input.retain(&|id| id == a);
    assert_eq!(input.len(), 1);
    assert_eq!(input.field(a).text(), "first");
}
