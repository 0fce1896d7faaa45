use super::*;

const METRICS: LayoutMetrics = LayoutMetrics {
    default_width: 70,
    default_height: 20,
    spacing: 4,
};

fn layout_200_wide() -> FlowLayout {
    FlowLayout::new(Rect::new(10, 10, 210, 310), Point::ZERO)
}

#[test]
fn single_flexible_column_fills_body() {
    let mut layout = layout_200_wide();
    layout.set_grid(&[-1], &[]);
    let rect = layout.next_rect(&METRICS);
    assert_eq!(rect.width(), 200);
    assert_eq!(rect.min, Point::new(10, 10));
}

#[test]
fn two_flexible_columns_share_the_row() {
    let mut layout = layout_200_wide();
    layout.set_grid(&[-1, -1], &[]);
    let first = layout.next_rect(&METRICS);
    let second = layout.next_rect(&METRICS);
    assert_eq!(first.width() + second.width(), 200);
    assert_eq!(first.min.y, second.min.y);
}

#[test]
fn flexible_column_takes_remaining_space_after_fixed_one() {
    let mut layout = layout_200_wide();
    layout.set_grid(&[50, -1], &[]);
    let fixed = layout.next_rect(&METRICS);
    let flexible = layout.next_rect(&METRICS);
    assert_eq!(fixed.width(), 50);
    assert_eq!(flexible.min.x, fixed.max.x + METRICS.spacing);
    assert_eq!(flexible.max.x, 210);
}

#[test]
fn zero_width_uses_default_control_size() {
    let mut layout = layout_200_wide();
    let rect = layout.next_rect(&METRICS);
    assert_eq!(rect.size(), Size::new(70, 20));
}

#[test]
fn grid_repeats_after_a_full_row() {
    let mut layout = layout_200_wide();
    layout.set_grid(&[30, 40], &[]);
    let rects: Vec<Rect> = (0..5).map(|_| layout.next_rect(&METRICS)).collect();
    assert_eq!(rects[2].min.x, rects[0].min.x);
    assert_eq!(rects[2].min.y, rects[0].max.y + METRICS.spacing);
    assert_eq!(rects[3].width(), 40);
    assert_eq!(rects[4].min.y, rects[2].max.y + METRICS.spacing);
}

#[test]
fn grid_cycles_through_row_heights() {
    let mut layout = layout_200_wide();
    layout.set_grid(&[-1], &[10, 30]);
    assert_eq!(layout.items_per_cycle(), 2);
    let heights: Vec<i32> = (0..4).map(|_| layout.next_rect(&METRICS).height()).collect();
    assert_eq!(heights, vec![10, 30, 10, 30]);
}

#[test]
fn indent_shifts_rows_and_shrinks_flexible_width() {
    let mut layout = layout_200_wide();
    layout.set_indent(24);
    layout.set_grid(&[-1], &[]);
    let rect = layout.next_rect(&METRICS);
    assert_eq!(rect.min.x, 34);
    assert_eq!(rect.max.x, 210);
}

#[test]
fn scroll_offset_moves_body_up() {
    let mut layout = FlowLayout::new(Rect::new(0, 0, 100, 100), Point::new(0, 30));
    let rect = layout.next_rect(&METRICS);
    assert_eq!(rect.min.y, -30);
}

#[test]
fn content_size_tracks_max_extent() {
    let mut layout = layout_200_wide();
    layout.set_grid(&[120], &[40]);
    layout.next_rect(&METRICS);
    layout.next_rect(&METRICS);
    assert_eq!(layout.content_size(), Size::new(120, 84));
}

#[test]
fn empty_layout_has_no_content() {
    let layout = layout_200_wide();
    assert_eq!(layout.content_size(), Size::ZERO);
}

#[test]
fn child_extent_propagates_to_parent() {
    let mut parent = layout_200_wide();
    parent.set_grid(&[100, -1], &[]);
    let cell = parent.next_rect(&METRICS);
    let mut child = FlowLayout::new(cell, Point::ZERO);
    child.set_grid(&[-1], &[]);
    for _ in 0..3 {
        child.next_rect(&METRICS);
    }
    parent.absorb_child(&child);

    // Three stacked rows push the parent's next row below them.
    assert_eq!(parent.next_row_y(), 3 * (20 + METRICS.spacing));
    let next = parent.next_rect(&METRICS);
    assert_eq!(next.min.x, 10 + 100 + METRICS.spacing);
    parent.set_grid(&[-1], &[]);
    let below = parent.next_rect(&METRICS);
    assert_eq!(below.min.y, 10 + 3 * (20 + METRICS.spacing));
}
