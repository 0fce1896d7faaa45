use super::*;
use crate::test_support::MonoMetrics;
use immui_foundation::PointerButton;

fn run(ctx: &mut Context, input: InputSnapshot, f: impl FnOnce(&mut Context)) -> Result<bool, UiError> {
    let mut input = input;
    ctx.update(&mut input, |ctx| {
        f(ctx);
        Ok(())
    })
}

fn window_at(ctx: &mut Context, title: &str, rect: Rect) {
    ctx.window(title, rect, |_, _| {});
}

#[test]
fn client_error_is_returned() {
    let mut ctx = Context::new(MonoMetrics);
    let mut input = InputSnapshot::new();
    let result = ctx.update(&mut input, |_| Err(UiError::client("boom")));
    assert!(matches!(result, Err(UiError::Client(_))));
}

#[test]
fn error_does_not_outlive_its_frame() {
    let mut ctx = Context::new(MonoMetrics);
    let mut input = InputSnapshot::new();
    assert!(ctx.update(&mut input, |_| Err(UiError::client("boom"))).is_err());
    assert!(run(&mut ctx, InputSnapshot::new(), |_| {}).is_ok());
}

#[test]
fn unpopped_scope_is_reported_at_end() {
    let mut ctx = Context::new(MonoMetrics);
    let result = run(&mut ctx, InputSnapshot::new(), |ctx| {
        ctx.push_id_scope("left open");
    });
    assert!(matches!(
        result,
        Err(UiError::StackImbalance {
            stack: StackKind::Id,
            depth: 1
        })
    ));
    // Stacks are force-reset, so the next frame is clean.
    assert!(run(&mut ctx, InputSnapshot::new(), |_| {}).is_ok());
}

#[test]
fn first_error_wins() {
    let mut ctx = Context::new(MonoMetrics);
    let mut input = InputSnapshot::new();
    let result = ctx.update(&mut input, |ctx| {
        ctx.set_grid_layout(&[10], &[]);
        Err(UiError::client("later"))
    });
    assert!(matches!(
        result,
        Err(UiError::EmptyStack {
            stack: StackKind::Layout
        })
    ));
}

#[test]
fn latched_error_skips_later_work() {
    let mut ctx = Context::new(MonoMetrics);
    let mut ran = false;
    let _ = run(&mut ctx, InputSnapshot::new(), |ctx| {
        ctx.latch(UiError::client("first"));
        let value: i32 = ctx.wrap_error(|_| {
            ran = true;
            Ok(5)
        });
        assert_eq!(value, 0);
    });
    assert!(!ran);
}

#[test]
fn window_records_its_frame_first() {
    let mut ctx = Context::new(MonoMetrics);
    let bounds = Rect::new(10, 10, 110, 90);
    run(&mut ctx, InputSnapshot::new(), |ctx| window_at(ctx, "w", bounds)).unwrap();
    let first = ctx.commands().next().cloned();
    assert_eq!(
        first,
        Some(Command::Rect {
            rect: bounds,
            color: ctx.style().color(crate::style::ColorRole::WindowBg),
        })
    );
}

#[test]
fn commands_do_not_carry_over() {
    let mut ctx = Context::new(MonoMetrics);
    run(&mut ctx, InputSnapshot::new(), |ctx| {
        window_at(ctx, "w", Rect::new(0, 0, 100, 100))
    })
    .unwrap();
    assert!(ctx.commands().count() > 0);
    run(&mut ctx, InputSnapshot::new(), |_| {}).unwrap();
    assert_eq!(ctx.commands().count(), 0);
    assert!(ctx.containers().is_empty());
}

#[test]
fn capturing_input_over_a_window() {
    let mut ctx = Context::new(MonoMetrics);
    let over = InputSnapshot::new().with_pointer(Point::new(50, 50));
    let captured = run(&mut ctx, over, |ctx| window_at(ctx, "w", Rect::new(0, 0, 100, 100)));
    assert_eq!(captured.unwrap(), true);

    let away = InputSnapshot::new().with_pointer(Point::new(300, 300));
    let captured = run(&mut ctx, away, |ctx| window_at(ctx, "w", Rect::new(0, 0, 100, 100)));
    assert_eq!(captured.unwrap(), false);
}

#[test]
fn scopes_separate_repeated_call_sites() {
    let mut ctx = Context::new(MonoMetrics);
    let mut scoped = Vec::new();
    let mut plain = Vec::new();
    run(&mut ctx, InputSnapshot::new(), |ctx| {
        for i in 0..2usize {
            scoped.push(ctx.id_scope(i, |ctx| ctx.caller_id()));
            plain.push(ctx.caller_id());
        }
    })
    .unwrap();
    assert_ne!(scoped[0], scoped[1]);
    assert_eq!(plain[0], plain[1]);
}

#[test]
fn focus_is_dropped_when_not_reasserted() {
    let mut ctx = Context::new(MonoMetrics);
    let id = WidgetId::global("field");
    run(&mut ctx, InputSnapshot::new(), |ctx| ctx.set_focus(id)).unwrap();
    assert_eq!(ctx.focus(), id);
    run(&mut ctx, InputSnapshot::new(), |_| {}).unwrap();
    assert_eq!(ctx.focus(), WidgetId::EMPTY);
}

#[test]
fn frame_counter_advances_even_on_error() {
    let mut ctx = Context::new(MonoMetrics);
    let _ = run(&mut ctx, InputSnapshot::new(), |ctx| ctx.latch(UiError::client("x")));
    let _ = run(
        &mut ctx,
        InputSnapshot::new().with_button(PointerButton::Primary),
        |_| {},
    );
    assert_eq!(ctx.frame(), 2);
}
