//! Draw list tests (no renderer required).
//!
//! These tests verify the commands a mounted drop zone produces, their
//! ordering, and incremental updates of the retained list.

use droparea_core::math::Vec2;
use droparea_ui::dnd::{DropZoneContainer, DropZoneStyle};
use droparea_ui::style::BorderStyle;
use droparea_ui::tree::NodeId;
use droparea_ui::widgets::Text;
use droparea_ui::{Color, DrawCommand, DrawList, QuadCommand, UiCore};

#[test]
fn test_empty_zone_draws_dashed_border() {
    let mut ui = UiCore::new();
    let zone = ui
        .mount_drop_zone(DropZoneContainer::default(), None)
        .unwrap();
    ui.compute_layout();

    let bounds = ui.tree().absolute_layout(zone.node()).unwrap();
    let draw_list = ui.build_draw_list();
    assert_eq!(draw_list.len(), 1);

    let border = draw_list.commands()[0].as_quad().unwrap();
    assert_eq!(border.node_id, zone.node());
    assert!(border.is_outline());
    assert_eq!(border.border_thickness, 2.0);
    assert_eq!(border.border_radius, 8.0);
    assert_eq!(border.border_style, BorderStyle::dashed());
    assert_eq!(border.position, bounds.position());
    assert_eq!(border.size, bounds.size());
    assert!(border.size.y >= 200.0);
}

#[test]
fn test_zone_background_drawn_under_border() {
    let mut ui = UiCore::new();
    let zone = ui
        .mount_drop_zone(
            DropZoneContainer::default()
                .style(DropZoneStyle::default().background_color(Color::from_hex(0xF9FAFB))),
            None,
        )
        .unwrap();
    ui.compute_layout();

    let commands: Vec<_> = ui
        .build_draw_list()
        .commands_for(zone.node())
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(commands.len(), 2);

    let background = commands[0].as_quad().unwrap();
    assert!(!background.is_outline());
    assert_eq!(background.color, Color::from_hex(0xF9FAFB));
    assert!(commands[1].as_quad().unwrap().is_outline());
}

#[test]
fn test_content_draws_above_zone() {
    let mut ui = UiCore::new();
    let zone = ui
        .mount_drop_zone(
            DropZoneContainer::default()
                .child(Text::new("alpha"))
                .child(Text::new("beta")),
            None,
        )
        .unwrap();
    ui.compute_layout();

    let draw_list = ui.build_draw_list();
    let commands = draw_list.commands();
    assert_eq!(commands.len(), 3);

    assert_eq!(commands[0].node_id(), zone.node());
    assert_eq!(commands[0].z_index(), 0);

    let texts: Vec<_> = commands.iter().filter_map(DrawCommand::as_text).collect();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].content, "alpha");
    assert_eq!(texts[1].content, "beta");
    assert!(texts.iter().all(|t| t.z_index == 1));
    assert_eq!(texts[0].node_id, zone.content()[0]);
}

#[test]
fn test_unmounted_zone_draws_nothing() {
    let mut ui = UiCore::new();
    let zone = ui
        .mount_drop_zone(DropZoneContainer::default().child(Text::new("x")), None)
        .unwrap();
    ui.compute_layout();
    assert!(!ui.build_draw_list().is_empty());

    ui.unmount_drop_zone(zone).unwrap();
    assert!(ui.build_draw_list().is_empty());
}

#[test]
fn test_draw_list_incremental_update() {
    let mut draw_list = DrawList::new();

    let node1 = NodeId(1);
    let node2 = NodeId(2);

    draw_list.update_node(
        node1,
        vec![DrawCommand::Quad(QuadCommand::filled(
            Vec2::ZERO,
            Vec2::new(100.0, 100.0),
            Color::RED,
            0,
        ))],
    );
    draw_list.update_node(
        node2,
        vec![DrawCommand::Quad(QuadCommand::filled(
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Color::BLUE,
            0,
        ))],
    );
    assert_eq!(draw_list.len(), 2);

    // Update only node1
    draw_list.update_node(
        node1,
        vec![DrawCommand::Quad(QuadCommand::filled(
            Vec2::new(50.0, 50.0),
            Vec2::new(150.0, 150.0),
            Color::BLACK,
            0,
        ))],
    );

    // Before compaction: node1's old command + node2 + node1's new command = 3
    assert_eq!(draw_list.len(), 3);

    // After compaction: only node1's new command + node2 = 2
    draw_list.sort_if_needed();
    assert_eq!(draw_list.len(), 2);
    assert_eq!(draw_list.node_count(), 2);
    assert_eq!(
        draw_list.commands_for(node1)[0].as_quad().map(|q| q.color),
        Some(Color::BLACK)
    );
    assert_eq!(draw_list.update_count(), 3);
}

#[test]
fn test_remove_node() {
    let mut draw_list = DrawList::new();
    let node = NodeId(7);

    draw_list.update_node(
        node,
        vec![DrawCommand::Quad(QuadCommand::bordered(
            Vec2::ZERO,
            Vec2::new(100.0, 200.0),
            Color::BLACK,
            2.0,
            8.0,
            0,
        ))],
    );
    draw_list.sort_if_needed();
    assert_eq!(draw_list.len(), 1);

    draw_list.remove_node(node);
    assert!(draw_list.needs_sort());
    draw_list.sort_if_needed();
    assert!(draw_list.is_empty());
    assert!(draw_list.commands_for(node).is_empty());
}
