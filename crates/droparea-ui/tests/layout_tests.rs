//! Layout tests for drop zones (no renderer required).
//!
//! These tests verify that drop zones and their content are placed by the
//! Taffy layout engine, and that registered geometry follows the layout.

use droparea_core::geometry::Size;
use droparea_ui::dnd::{DEFAULT_DROP_ZONE_ID, DropTargetId, DropZoneContainer, DropZoneStyle};
use droparea_ui::style::Style;
use droparea_ui::widgets::{Container, Text};
use droparea_ui::{NodeId, UiCore};

/// Settings panel: fixed 800x600 column with 20px padding.
fn panel(ui: &mut UiCore) -> NodeId {
    let style = Style::new()
        .width(800.0)
        .height(600.0)
        .padding(20.0)
        .flex_direction(taffy::FlexDirection::Column);
    let tree = ui.tree_mut();
    let root = tree.add_widget(Box::new(Container::with_style(style)));
    tree.set_root(root);
    root
}

#[test]
fn test_layout_empty_zone_respects_min_height() {
    let mut ui = UiCore::new();
    let root = panel(&mut ui);

    let zone = ui
        .mount_drop_zone(DropZoneContainer::default(), Some(root))
        .unwrap();
    ui.compute_layout();

    let rect = ui.tree().absolute_layout(zone.node()).unwrap();
    assert_eq!(rect.x, 20.0);
    assert_eq!(rect.y, 20.0);
    assert_eq!(rect.width, 760.0);
    assert_eq!(rect.height, 200.0);
}

#[test]
fn test_layout_zone_as_root() {
    let mut ui = UiCore::new();

    let zone = ui
        .mount_drop_zone(DropZoneContainer::default(), None)
        .unwrap();
    ui.compute_layout();

    let rect = ui.tree().absolute_layout(zone.node()).unwrap();
    assert_eq!(rect.x, 0.0);
    assert_eq!(rect.y, 0.0);
    assert_eq!(rect.width, 800.0);
    assert!(rect.height >= 200.0);
}

#[test]
fn test_layout_content_inset_by_border_and_padding() {
    let mut ui = UiCore::new();
    let root = panel(&mut ui);

    let zone = ui
        .mount_drop_zone(
            DropZoneContainer::default()
                .child(Text::new("config.toml"))
                .child(Text::new("theme.json")),
            Some(root),
        )
        .unwrap();
    ui.compute_layout();

    let tree = ui.tree();
    let first = tree.absolute_layout(zone.content()[0]).unwrap();
    let second = tree.absolute_layout(zone.content()[1]).unwrap();

    // panel padding 20 + zone border 2 + zone padding 16
    assert_eq!(first.x, 38.0);
    assert_eq!(first.y, 38.0);
    assert_eq!(second.x, 38.0);
    assert!(second.y > first.y + first.height);
    assert!(first.height > 0.0);
}

#[test]
fn test_layout_tall_content_grows_zone() {
    let mut ui = UiCore::new();
    let root = panel(&mut ui);

    let content = Container::with_style(Style::new().height(300.0));
    let zone = ui
        .mount_drop_zone(DropZoneContainer::default().child(content), Some(root))
        .unwrap();
    ui.compute_layout();

    let rect = ui.tree().absolute_layout(zone.node()).unwrap();
    // 300 content + 2 * 16 padding + 2 * 2 border
    assert_eq!(rect.height, 336.0);
}

#[test]
fn test_layout_custom_min_height() {
    let mut ui = UiCore::new();
    let root = panel(&mut ui);

    let zone = ui
        .mount_drop_zone(
            DropZoneContainer::default().style(DropZoneStyle::default().min_height(120.0)),
            Some(root),
        )
        .unwrap();
    ui.compute_layout();

    assert_eq!(ui.tree().absolute_layout(zone.node()).unwrap().height, 120.0);
}

#[test]
fn test_layout_stacked_zones() {
    let mut ui = UiCore::new();
    let root = panel(&mut ui);

    let first = ui
        .mount_drop_zone(DropZoneContainer::default(), Some(root))
        .unwrap();
    let second = ui
        .mount_drop_zone(DropZoneContainer::default(), Some(root))
        .unwrap();
    ui.compute_layout();

    let a = ui.tree().absolute_layout(first.node()).unwrap();
    let b = ui.tree().absolute_layout(second.node()).unwrap();
    assert_eq!(a.y, 20.0);
    assert_eq!(b.y, 220.0);
}

#[test]
fn test_registered_geometry_matches_layout() {
    let mut ui = UiCore::new();
    let root = panel(&mut ui);

    let zone = ui
        .mount_drop_zone(
            DropZoneContainer::default().child(Text::new("drop here")),
            Some(root),
        )
        .unwrap();
    assert_eq!(ui.drag_drop().geometry(zone.handle()), None);

    ui.compute_layout();

    let geometry = ui.drag_drop().geometry(zone.handle()).unwrap();
    assert_eq!(Some(geometry), ui.tree().absolute_layout(zone.node()));
    assert!(geometry.height >= 200.0);
}

#[test]
fn test_geometry_for_shared_identifier() {
    let mut ui = UiCore::new();
    let root = panel(&mut ui);

    ui.mount_drop_zone(DropZoneContainer::default(), Some(root))
        .unwrap();
    ui.mount_drop_zone(DropZoneContainer::default(), Some(root))
        .unwrap();
    ui.compute_layout();

    let rects = ui
        .drag_drop()
        .geometry_for(&DropTargetId::new(DEFAULT_DROP_ZONE_ID));
    assert_eq!(rects.len(), 2);
    assert_ne!(rects[0], rects[1]);
}

#[test]
fn test_layout_viewport_change() {
    let mut ui = UiCore::new();

    let zone = ui
        .mount_drop_zone(DropZoneContainer::default(), None)
        .unwrap();
    ui.compute_layout();
    let before = ui.tree().absolute_layout(zone.node()).unwrap();
    assert_eq!(before.width, 800.0);

    ui.set_viewport_size(Size::new(400.0, 300.0));
    assert!(ui.tree().is_dirty());
    ui.compute_layout();

    let after = ui.tree().absolute_layout(zone.node()).unwrap();
    assert_eq!(after.width, 400.0);
    assert_eq!(ui.drag_drop().geometry(zone.handle()), Some(after));
}
