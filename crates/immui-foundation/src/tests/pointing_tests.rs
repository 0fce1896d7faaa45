use super::*;
use crate::input::{PointerButton, Touch};

fn at(x: i32, y: i32) -> InputSnapshot {
    InputSnapshot::new().with_pointer(Point::new(x, y))
}

#[test]
fn press_and_release_edges_last_one_frame() {
    let mut pointing = Pointing::new();
    pointing.update(&at(0, 0));
    assert!(!pointing.just_pressed());

    pointing.update(&at(0, 0).with_button(PointerButton::Primary));
    assert!(pointing.just_pressed());
    assert!(pointing.pressed());

    pointing.update(&at(0, 0).with_button(PointerButton::Primary));
    assert!(!pointing.just_pressed());
    assert!(pointing.pressed());

    pointing.update(&at(0, 0));
    assert!(pointing.just_released());
    assert!(!pointing.pressed());
}

#[test]
fn delta_is_movement_since_previous_frame() {
    let mut pointing = Pointing::new();
    pointing.update(&at(10, 10));
    pointing.update(&at(25, 4));
    assert_eq!(pointing.delta(), Point::new(15, -6));
    assert_eq!(pointing.position(), Point::new(25, 4));
}

#[test]
fn touch_start_reports_no_movement() {
    let mut pointing = Pointing::new();
    pointing.update(&at(0, 0));
    pointing.update(&at(0, 0).with_touch(Touch {
        id: 1,
        position: Point::new(300, 200),
    }));
    assert!(pointing.just_pressed());
    assert_eq!(pointing.delta(), Point::ZERO);
    assert_eq!(pointing.position(), Point::new(300, 200));
}
