//! Drop-target registration and the drop-zone container.
//!
//! Drag tracking, collision detection and drop dispatch belong to an
//! external coordination service. This module only covers the part a widget
//! needs: registering a node as a drop target under an identifier, and
//! exposing that node's geometry so the service can hit-test against it.
//!
//! - [`DropTargetRegistry`]: the registration capability, injected into
//!   [`DropZoneContainer::mount`]
//! - [`DragDropContext`]: in-memory registry with cached geometry
//! - [`DropZoneContainer`]: dashed, padded container that registers itself
//!   while mounted
//!
//! # Example
//!
//! ```
//! use droparea_ui::dnd::{DragDropContext, DropZoneContainer, DEFAULT_DROP_ZONE_ID};
//! use droparea_ui::tree::UiTree;
//! use droparea_ui::widgets::Text;
//!
//! let mut tree = UiTree::new();
//! let mut registry = DragDropContext::new();
//!
//! let zone = DropZoneContainer::default()
//!     .child(Text::new("Drop settings files here"))
//!     .mount(&mut tree, None, &mut registry)
//!     .unwrap();
//! assert_eq!(registry.count_for(&DEFAULT_DROP_ZONE_ID.into()), 1);
//!
//! zone.unmount(&mut tree, &mut registry).unwrap();
//! assert_eq!(registry.registration_count(), 0);
//! ```

pub mod context;
pub mod drop_zone;
pub mod error;
pub mod registry;

pub use context::DragDropContext;
pub use drop_zone::{DropZoneContainer, DropZoneStyle, DropZoneWidget, MountedDropZone};
pub use error::{DndError, DndResult};
pub use registry::{
    DEFAULT_DROP_ZONE_ID, DropTargetHandle, DropTargetId, DropTargetRegistration,
    DropTargetRegistry,
};
