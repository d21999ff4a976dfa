//! Droparea UI - drop-zone containers on a Taffy-based retained UI tree
//!
//! This crate provides:
//! - A retained widget tree with flexbox layout via Taffy
//! - A backend-agnostic draw list
//! - [`dnd::DropZoneContainer`], a styled region that registers itself as a
//!   drop target while mounted
//! - [`dnd::DropTargetRegistry`], the seam to the drag-and-drop coordination
//!   service
//!
//! ## Quick Start
//!
//! ```rust
//! use droparea_ui::UiCore;
//! use droparea_ui::dnd::DropZoneContainer;
//! use droparea_ui::widgets::Text;
//!
//! let mut ui = UiCore::new();
//! let zone = ui
//!     .mount_drop_zone(DropZoneContainer::default().child(Text::new("Drop files here")), None)
//!     .unwrap();
//!
//! ui.compute_layout();
//! let geometry = ui.drag_drop().geometry(zone.handle()).unwrap();
//! assert!(geometry.height >= 200.0);
//!
//! let commands = ui.build_draw_list().len();
//! assert!(commands >= 2);
//! ```

pub mod color;
pub mod dnd;
pub mod draw_list;
pub mod style;
pub mod tree;
pub mod widgets;

pub use color::Color;
pub use dnd::{DndError, DndResult, DragDropContext, DropZoneContainer, MountedDropZone};
pub use draw_list::{DrawCommand, DrawList, QuadCommand, TextCommand};
pub use style::{BorderStyle, Style};
pub use tree::{LayoutRect, NodeId, UiTree};
pub use widgets::Widget;

pub use droparea_core::math::Vec2;

use droparea_core::geometry::Size;
use droparea_core::profiling::profile_function;

/// Headless UI core: tree, drop-target registry, layout and draw list.
pub struct UiCore {
    tree: UiTree,
    drag_drop: DragDropContext,
    draw_list: DrawList,
    viewport_size: Size<f32>,
}

impl UiCore {
    /// Create a UI core with an 800x600 viewport.
    pub fn new() -> Self {
        Self::with_viewport(Size::new(800.0, 600.0))
    }

    pub fn with_viewport(viewport_size: Size<f32>) -> Self {
        Self {
            tree: UiTree::new(),
            drag_drop: DragDropContext::new(),
            draw_list: DrawList::new(),
            viewport_size,
        }
    }

    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut UiTree {
        &mut self.tree
    }

    pub fn drag_drop(&self) -> &DragDropContext {
        &self.drag_drop
    }

    pub fn drag_drop_mut(&mut self) -> &mut DragDropContext {
        &mut self.drag_drop
    }

    pub fn viewport_size(&self) -> Size<f32> {
        self.viewport_size
    }

    /// Resize the viewport. Layout is recomputed on the next `compute_layout`.
    pub fn set_viewport_size(&mut self, size: Size<f32>) {
        if self.viewport_size != size {
            self.viewport_size = size;
            self.tree.mark_dirty();
        }
    }

    /// Mount a drop zone and register it with this core's context.
    pub fn mount_drop_zone(
        &mut self,
        zone: DropZoneContainer,
        parent: Option<NodeId>,
    ) -> DndResult<MountedDropZone> {
        zone.mount(&mut self.tree, parent, &mut self.drag_drop)
    }

    /// Unmount a drop zone mounted through this core.
    pub fn unmount_drop_zone(&mut self, zone: MountedDropZone) -> DndResult<()> {
        zone.unmount(&mut self.tree, &mut self.drag_drop)
    }

    /// Compute layout and refresh drop-target geometry.
    pub fn compute_layout(&mut self) {
        profile_function!();
        self.tree.compute_layout(self.viewport_size);
        self.drag_drop.sync_geometry(&self.tree);
    }

    /// Rebuild the draw list from the current layout.
    ///
    /// Nodes are painted depth-first; a node's depth is its z-index so
    /// content always draws above its container.
    pub fn build_draw_list(&mut self) -> &DrawList {
        profile_function!();

        self.draw_list.clear();
        for (node_id, depth) in self.tree.walk() {
            let (Some(widget), Some(bounds)) = (
                self.tree.get_widget(node_id),
                self.tree.absolute_layout(node_id),
            ) else {
                continue;
            };
            let z_index = u16::try_from(depth).unwrap_or(u16::MAX);
            self.draw_list
                .update_node(node_id, widget.draw(bounds, z_index));
        }
        self.draw_list.sort_if_needed();

        &self.draw_list
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }
}

impl Default for UiCore {
    fn default() -> Self {
        Self::new()
    }
}
