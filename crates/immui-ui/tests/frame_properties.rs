use std::error::Error;

use immui_core::{Command, Key, PointerButton, StackKind, TextField, TextInput, TextInputError};
use immui_testing::{init_logging, FixedMetrics, ScriptedInput, TestHarness};
use immui_ui::prelude::*;

fn demo(ctx: &mut Context, f: impl FnOnce(&mut Context)) {
    ctx.window("Demo", Rect::new(0, 0, 200, 200), |ctx, _| f(ctx));
}

#[test]
fn call_site_ids_are_stable_across_frames() {
    let mut harness = TestHarness::new();
    let mut ids = Vec::new();
    for _ in 0..3 {
        harness
            .frame(|ctx| {
                demo(ctx, |ctx| {
                    button(ctx, "Same");
                    ids.push(ctx.last_id());
                })
            })
            .unwrap();
    }
    assert!(!ids[0].is_empty());
    assert!(ids.iter().all(|id| *id == ids[0]));
}

#[test]
fn scoped_loop_iterations_are_distinct() {
    let mut harness = TestHarness::new();
    let mut ids = Vec::new();
    let mut pressed = Vec::new();
    let mut rows = |ctx: &mut Context| {
        ids.clear();
        demo(ctx, |ctx| {
            for i in 0..10 {
                ctx.id_scope(i, |ctx| {
                    if button(ctx, "Row").submitted() {
                        pressed.push(i);
                    }
                    ids.push(ctx.last_id());
                });
            }
        })
    };
    // Third row: 29 + 2 * 24.
    harness.move_to(20, 80).frame(&mut rows).unwrap();
    harness.click(20, 80, &mut rows).unwrap();

    let mut unique = ids.clone();
    unique.sort_by_key(|id| id.raw());
    unique.dedup();
    assert_eq!(unique.len(), 10);
    assert_eq!(pressed, vec![2]);
}

#[test]
fn unbalanced_scopes_fail_the_frame() {
    let mut harness = TestHarness::new();
    let err = harness
        .frame(|ctx| {
            demo(ctx, |ctx| {
                ctx.push_id_scope("left open");
                button(ctx, "Inside");
            })
        })
        .unwrap_err();
    assert!(matches!(
        err,
        UiError::StackImbalance {
            stack: StackKind::Id,
            depth: 1
        }
    ));

    // The next balanced frame starts from clean stacks.
    harness.frame(|ctx| demo(ctx, |ctx| label(ctx, "ok"))).unwrap();
    assert!(harness.has_text("ok"));
}

#[test]
fn undeclared_windows_are_evicted() {
    let mut harness = TestHarness::new();
    harness
        .frame(|ctx| {
            demo(ctx, |_| {});
            ctx.window("Extra", Rect::new(210, 0, 300, 100), |ctx, _| {
                label(ctx, "extra")
            });
        })
        .unwrap();
    assert!(harness.window_bounds("Extra").is_some());

    harness.frame(|ctx| demo(ctx, |_| {})).unwrap();
    assert!(harness.window_bounds("Extra").is_none());
    assert!(!harness.has_text("extra"));
    assert_eq!(harness.context().containers().roots().count(), 1);
}

#[test]
fn container_count_tracks_declarations() {
    let mut harness = TestHarness::new();
    let a = |ctx: &mut Context| ctx.window("A", Rect::new(0, 0, 100, 100), |_, _| {});
    let b = |ctx: &mut Context, rect: Rect| ctx.window("B", rect, |_, _| {});
    let first = Rect::new(100, 0, 200, 100);
    let mut counts = Vec::new();

    harness.frame(a).unwrap();
    counts.push(harness.context().containers().len());
    harness
        .frame(|ctx| {
            a(ctx);
            b(ctx, first);
        })
        .unwrap();
    counts.push(harness.context().containers().len());
    harness.frame(a).unwrap();
    counts.push(harness.context().containers().len());
    harness.frame(|_| {}).unwrap();
    counts.push(harness.context().containers().len());

    // A fresh container takes the rect it is declared with.
    let second = Rect::new(0, 100, 100, 200);
    harness.frame(|ctx| b(ctx, second)).unwrap();
    counts.push(harness.context().containers().len());
    assert_eq!(counts, vec![1, 2, 1, 0, 1]);
    assert_eq!(harness.window_bounds("B"), Some(second));
}

#[test]
fn pressing_a_window_raises_it() {
    let mut harness = TestHarness::new();
    let two_windows = |ctx: &mut Context| {
        ctx.window("Back", Rect::new(0, 0, 100, 100), |ctx, _| label(ctx, "back"));
        ctx.window("Front", Rect::new(50, 50, 150, 150), |ctx, _| label(ctx, "front"));
    };
    harness.move_to(10, 60).frame(two_windows).unwrap();
    let order: Vec<WidgetId> = harness
        .context()
        .containers()
        .roots()
        .map(|c| c.id())
        .collect();
    assert_eq!(
        order,
        vec![Context::window_id("Back"), Context::window_id("Front")]
    );

    harness.press().frame(two_windows).unwrap();
    let order: Vec<WidgetId> = harness
        .context()
        .containers()
        .roots()
        .map(|c| c.id())
        .collect();
    assert_eq!(
        order,
        vec![Context::window_id("Front"), Context::window_id("Back")]
    );
    assert!(matches!(
        harness.commands().first(),
        Some(Command::Rect { rect, .. }) if *rect == Rect::new(50, 50, 150, 150)
    ));
    let texts: Vec<&str> = harness.render().texts().collect();
    let front = texts.iter().position(|t| *t == "front");
    let back = texts.iter().position(|t| *t == "back");
    assert!(front.is_some());
    assert!(front < back);
}

#[test]
fn remaining_width_goes_to_the_fill_column() {
    let mut harness = TestHarness::new();
    let mut cells = Vec::new();
    for _ in 0..2 {
        harness
            .frame(|ctx| {
                demo(ctx, |ctx| {
                    ctx.set_grid_layout(&[50, -1], &[]);
                    cells.clear();
                    cells.push(ctx.next_rect().unwrap());
                    cells.push(ctx.next_rect().unwrap());
                })
            })
            .unwrap();
    }
    assert_eq!(
        cells,
        vec![Rect::new(5, 29, 55, 49), Rect::new(59, 29, 195, 49)]
    );
}

#[test]
fn fill_columns_split_greedily() {
    let mut harness = TestHarness::new();
    let mut widths = Vec::new();
    for _ in 0..2 {
        harness
            .frame(|ctx| {
                ctx.window("Flex", Rect::new(0, 0, 210, 210), |ctx, _| {
                    widths.clear();
                    ctx.set_grid_layout(&[-1], &[]);
                    widths.push(ctx.next_rect().unwrap().width());
                    ctx.set_grid_layout(&[-1, -1], &[]);
                    widths.push(ctx.next_rect().unwrap().width());
                    widths.push(ctx.next_rect().unwrap().width());
                })
            })
            .unwrap();
    }
    assert_eq!(widths, vec![200, 200, 0]);
}

#[test]
fn pressing_elsewhere_blurs_a_text_field() {
    let mut harness = TestHarness::new();
    let mut buf = String::from("draft");
    let mut submits = 0;
    let mut form = |ctx: &mut Context| {
        demo(ctx, |ctx| {
            if text_field(ctx, &mut buf).submitted() {
                submits += 1;
            }
            button(ctx, "Other");
        })
    };
    harness.move_to(20, 35).frame(&mut form).unwrap();
    harness.click(20, 35, &mut form).unwrap();
    let field = harness.context().focus();
    assert!(!field.is_empty());

    harness.move_to(20, 60).frame(&mut form).unwrap();
    assert_eq!(harness.context().focus(), field);
    harness.press().frame(&mut form).unwrap();
    assert_ne!(harness.context().focus(), field);
    assert_eq!(submits, 1);
}

#[test]
fn first_error_latches_and_skips_the_rest() {
    init_logging();
    let mut harness = TestHarness::new();
    let mut later_ran = false;
    let err = harness
        .frame(|ctx| {
            button(ctx, "Loose");
            demo(ctx, |_| later_ran = true);
        })
        .unwrap_err();
    assert!(matches!(
        err,
        UiError::EmptyStack {
            stack: StackKind::Layout
        }
    ));
    assert!(!later_ran);
    assert!(harness.commands().is_empty());

    harness.frame(|ctx| demo(ctx, |_| later_ran = true)).unwrap();
    assert!(later_ran);
}

/// Text input whose platform side has gone away.
#[derive(Default)]
struct UnavailableInput {
    field: UnavailableField,
}

#[derive(Default)]
struct UnavailableField {
    text: String,
}

impl TextField for UnavailableField {
    fn focus(&mut self) {}

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text_and_selection(&mut self, text: &str, _start: usize, _end: usize) {
        self.text = text.to_owned();
    }

    fn handle_input(&mut self, _input: &InputSnapshot, _caret: Point) -> Result<bool, TextInputError> {
        Err(TextInputError::Unavailable("ime gone".into()))
    }
}

impl TextInput for UnavailableInput {
    fn field(&mut self, _id: WidgetId) -> &mut dyn TextField {
        &mut self.field
    }
}

#[test]
fn collaborator_error_turns_later_widgets_into_no_ops() {
    let ctx = Context::new(FixedMetrics::default()).with_text_input(UnavailableInput::default());
    let mut harness = TestHarness::with_context(ctx);
    let mut buf = String::from("name");
    let mut responses = Vec::new();
    let mut ids = Vec::new();
    let mut form = |ctx: &mut Context| {
        responses.clear();
        ids.clear();
        demo(ctx, |ctx| {
            label(ctx, "one");
            responses.push(button(ctx, "two"));
            ids.push(ctx.last_id());
            responses.push(text_field(ctx, &mut buf));
            ids.push(ctx.last_id());
            responses.push(button(ctx, "four"));
            responses.push(button(ctx, "five"));
            ids.push(ctx.last_id());
        })
    };
    // The field is the third row: 29 + 2 * 24.
    harness.move_to(20, 83).frame(&mut form).unwrap();
    harness.frame(&mut form).unwrap();
    assert!(harness.has_text("four"));

    let err = harness.press().frame(&mut form).unwrap_err();
    assert!(matches!(err, UiError::Collaborator(_)));
    assert_eq!(
        err.to_string(),
        "collaborator failed: text input unavailable: ime gone"
    );
    assert!(matches!(
        err.source().and_then(|source| source.downcast_ref::<TextInputError>()),
        Some(TextInputError::Unavailable(reason)) if reason == "ime gone"
    ));

    assert!(responses.iter().all(|res| res.is_empty()));
    assert!(ids.iter().all(|id| *id == ids[0]));
    assert_eq!(buf, "name");
    assert!(harness.has_text("two"));
    assert!(!harness.has_text("four"));
    assert!(!harness.has_text("five"));
}

#[test]
fn client_errors_surface_from_the_frame() {
    let mut harness = TestHarness::new();
    let err = harness
        .try_frame(|ctx| {
            demo(ctx, |ctx| label(ctx, "before"));
            Err(UiError::client("bad state"))
        })
        .unwrap_err();
    assert!(matches!(err, UiError::Client(_)));
    assert_eq!(err.to_string(), "client error: bad state");
}

#[test]
fn scripted_frames_drive_a_context() {
    let mut ctx = Context::new(FixedMetrics::default());
    let mut input = ScriptedInput::new();
    let over = Point::new(20, 35);
    input
        .push(InputSnapshot::new().with_pointer(over))
        .push(InputSnapshot::new().with_pointer(over))
        .push(
            InputSnapshot::new()
                .with_pointer(over)
                .with_button(PointerButton::Primary),
        )
        .push(
            InputSnapshot::new()
                .with_pointer(over)
                .with_key_pressed(Key::Enter),
        );
    let mut clicks = 0;
    while !input.is_exhausted() {
        ctx.update(&mut input, |ctx| {
            demo(ctx, |ctx| {
                if button(ctx, "Go").submitted() {
                    clicks += 1;
                }
            });
            Ok(())
        })
        .unwrap();
    }
    assert_eq!(clicks, 1);
}
