use super::*;
use immui_graphics::Color;

fn id(name: &str) -> WidgetId {
    WidgetId::global(name)
}

#[test]
fn creation_assigns_increasing_z() {
    let mut registry = ContainerRegistry::new();
    registry.get_or_create(id("a"), true);
    registry.get_or_create(id("b"), true);
    assert!(registry.z_index(id("a")) < registry.z_index(id("b")));
    assert!(registry.get(id("a")).unwrap().is_open());
}

#[test]
fn creation_can_be_suppressed() {
    let mut registry = ContainerRegistry::new();
    assert!(registry.get_or_create(id("popup"), false).is_none());
    assert!(registry.is_empty());
}

#[test]
fn unused_containers_are_evicted() {
    let mut registry = ContainerRegistry::new();
    registry.get_or_create(id("a"), true);
    registry.get_or_create(id("b"), true);
    assert_eq!(registry.evict_unused(), 0);

    registry.get_or_create(id("a"), false);
    assert_eq!(registry.evict_unused(), 1);
    assert!(registry.contains(id("a")));
    assert!(!registry.contains(id("b")));
}

#[test]
fn roots_sort_by_z_and_skip_children() {
    let mut registry = ContainerRegistry::new();
    registry.get_or_create(id("a"), true);
    registry.get_or_create(id("b"), true);
    registry.get_or_create(id("panel"), true).unwrap().parent = Some(id("b"));
    registry.bring_to_front(id("a"));
    registry.sort_roots();
    let order: Vec<WidgetId> = registry.roots().map(Container::id).collect();
    assert_eq!(order, vec![id("b"), id("a")]);
    assert!(registry.is_topmost(id("a")));
    assert!(!registry.is_topmost(id("b")));
}

#[test]
fn commands_follow_root_order() {
    let mut registry = ContainerRegistry::new();
    let low = Command::Rect {
        rect: Rect::new(0, 0, 1, 1),
        color: Color::BLACK,
    };
    let high = Command::Rect {
        rect: Rect::new(0, 0, 2, 2),
        color: Color::WHITE,
    };
    registry.get_or_create(id("high"), true).unwrap().commands.push(high.clone());
    registry.get_or_create(id("low"), true).unwrap().commands.push(low.clone());
    registry.bring_to_front(id("high"));
    registry.sort_roots();
    let replayed: Vec<&Command> = registry.commands().collect();
    assert_eq!(replayed, vec![&low, &high]);
}

#[test]
fn toggle_set_flips_membership() {
    let mut registry = ContainerRegistry::new();
    let container = registry.get_or_create(id("a"), true).unwrap();
    container.toggle(id("node"));
    assert!(container.is_toggled(id("node")));
    container.toggle(id("node"));
    assert!(!container.is_toggled(id("node")));
}
