use super::*;
use crate::test_support::MonoMetrics;
use immui_foundation::InputSnapshot;
use immui_graphics::Size;

fn in_window<R: Default>(f: impl FnOnce(&mut Context) -> R) -> (Context, R) {
    let mut ctx = Context::new(MonoMetrics);
    let mut input = InputSnapshot::new();
    let mut out = R::default();
    ctx.update(&mut input, |ctx| {
        ctx.window("w", Rect::new(0, 0, 200, 200), |ctx, _| out = f(ctx));
        Ok(())
    })
    .unwrap();
    (ctx, out)
}

#[test]
fn next_rect_without_a_container_fails() {
    let mut ctx = Context::new(MonoMetrics);
    let mut input = InputSnapshot::new();
    let result = ctx.update(&mut input, |ctx| ctx.next_rect().map(|_| ()));
    assert!(matches!(
        result,
        Err(UiError::EmptyStack {
            stack: StackKind::Layout
        })
    ));
}

#[test]
fn column_extent_is_folded_into_parent() {
    let (_, rects) = in_window(|ctx| {
        ctx.set_grid_layout(&[100, -1], &[]);
        let inner = ctx.layout_column(|ctx, cell| {
            let mut rects = vec![cell];
            for _ in 0..3 {
                rects.push(ctx.next_rect().unwrap());
            }
            rects
        });
        let beside = ctx.next_rect().unwrap();
        ctx.set_grid_layout(&[-1], &[]);
        let below = ctx.next_rect().unwrap();
        (inner, beside, below)
    });
    let (inner, beside, below) = rects;
    assert_eq!(inner[0], Rect::new(5, 29, 105, 49));
    assert_eq!(inner[3], Rect::new(5, 77, 65, 97));
    assert_eq!(beside, Rect::new(109, 29, 183, 49));
    assert_eq!(below, Rect::new(5, 101, 183, 121));
}

#[test]
fn content_size_is_recorded_on_the_container() {
    let (ctx, ()) = in_window(|ctx| {
        for _ in 0..3 {
            ctx.next_rect().unwrap();
        }
    });
    let layout = ctx.container(Context::window_id("w")).unwrap().layout();
    assert_eq!(layout.content_size, Size::new(60, 68));
}

#[test]
fn indent_shifts_following_rows() {
    let (_, rects) = in_window(|ctx| {
        let first = ctx.next_rect().unwrap();
        ctx.indent(24).unwrap();
        let indented = ctx.next_rect().unwrap();
        ctx.indent(-24).unwrap();
        let back = ctx.next_rect().unwrap();
        vec![first, indented, back]
    });
    assert_eq!(rects[0].min.x, 5);
    assert_eq!(rects[1].min.x, 29);
    assert_eq!(rects[2].min.x, 5);
}

#[test]
fn indent_is_ignored_after_an_error() {
    let mut ctx = Context::new(MonoMetrics);
    let mut input = InputSnapshot::new();
    let mut indent = None;
    let result = ctx.update(&mut input, |ctx| {
        ctx.window("w", Rect::new(0, 0, 200, 200), |ctx, _| {
            ctx.latch(UiError::client("stop"));
            ctx.indent(24).unwrap();
            indent = Some(ctx.layout().unwrap().indent());
        });
        Ok(())
    });
    assert!(matches!(result, Err(UiError::Client(_))));
    assert_eq!(indent, Some(0));
}

#[test]
fn unbalanced_child_layout_is_reported() {
    let mut ctx = Context::new(MonoMetrics);
    let mut input = InputSnapshot::new();
    let result = ctx.update(&mut input, |ctx| {
        ctx.window("w", Rect::new(0, 0, 200, 200), |ctx, _| {
            ctx.enter_child_layout().unwrap();
        });
        Ok(())
    });
    // The window pops the child in place of its own body layout, so the
    // frame ends with the body layout still pushed.
    assert!(matches!(
        result,
        Err(UiError::StackImbalance {
            stack: StackKind::Layout,
            depth: 1
        })
    ));
}
