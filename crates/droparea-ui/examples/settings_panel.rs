//! Settings panel with two file drop zones.
//!
//! Lays out the panel headlessly and logs the registered drop-target
//! geometry and the resulting draw commands. Run with
//! `RUST_LOG=debug` to see registry activity.

use droparea_core::config::{BenchmarkMode, Config};
use droparea_core::geometry::Size;
use droparea_core::logging;
use droparea_core::profiling::{init_profiling, new_frame};
use droparea_ui::dnd::{DropZoneContainer, DropZoneStyle};
use droparea_ui::style::Style;
use droparea_ui::widgets::{Container, Text};
use droparea_ui::{Color, DndResult, DrawCommand, UiCore};

fn main() -> DndResult<()> {
    let config = Config::new().benchmark(BenchmarkMode::On);
    logging::init_with(&config);
    init_profiling(config.benchmark);

    let mut ui = UiCore::with_viewport(Size::new(1024.0, 768.0));

    let panel = ui.tree_mut().add_widget(Box::new(Container::with_style(
        Style::new()
            .width_percent(1.0)
            .padding(24.0)
            .gap(16.0)
            .flex_direction(taffy::FlexDirection::Column)
            .background_color(Color::WHITE),
    )));
    ui.tree_mut().set_root(panel);

    let header = ui
        .tree_mut()
        .add_widget(Box::new(Text::new("Import settings").size(20.0)));
    ui.tree_mut().add_child(panel, header);

    let import = ui.mount_drop_zone(
        DropZoneContainer::new("settings-import")
            .child(Text::new("Drop a settings.json file here"))
            .child(Text::new("Existing values will be overwritten").color(Color::from_hex(0x6B7280))),
        Some(panel),
    )?;

    // Default identifier; drops here and on any other default zone collide.
    let themes = ui.mount_drop_zone(
        DropZoneContainer::default()
            .style(DropZoneStyle::default().min_height(120.0).background_color(Color::from_hex(0xF9FAFB)))
            .child(Text::new("Drop theme files")),
        Some(panel),
    )?;

    new_frame();
    ui.compute_layout();

    for zone in [&import, &themes] {
        if let Some(rect) = ui.drag_drop().geometry(zone.handle()) {
            tracing::info!(
                "Drop target '{}' at ({}, {}) size {}x{}",
                zone.id(),
                rect.x,
                rect.y,
                rect.width,
                rect.height
            );
        }
    }

    for command in ui.build_draw_list().commands() {
        match command {
            DrawCommand::Quad(quad) => tracing::debug!(
                "quad node={:?} z={} outline={} style={:?}",
                quad.node_id,
                quad.z_index,
                quad.is_outline(),
                quad.border_style
            ),
            DrawCommand::Text(text) => tracing::debug!(
                "text node={:?} z={} '{}'",
                text.node_id,
                text.z_index,
                text.content
            ),
        }
    }

    ui.unmount_drop_zone(themes)?;
    ui.unmount_drop_zone(import)?;
    tracing::info!(
        "{} drop targets registered after teardown",
        ui.drag_drop().registration_count()
    );

    Ok(())
}
