//! In-memory drop-target registry.
//!
//! Stands in for the coordination service's registration table: it records
//! which nodes are drop targets and caches their absolute geometry after each
//! layout pass, so hit testing does not need a tree walk on every mouse move.

use super::error::{DndError, DndResult};
use super::registry::{DropTargetHandle, DropTargetId, DropTargetRegistration, DropTargetRegistry};
use crate::tree::{LayoutRect, UiTree};
use droparea_core::alloc::HashMap;
use indexmap::IndexMap;

/// Registry of drop targets with cached geometry.
pub struct DragDropContext {
    /// Live registrations in registration order, keyed by handle index.
    registrations: IndexMap<u64, DropTargetRegistration>,
    /// Absolute layout per handle index, refreshed by `sync_geometry`.
    geometry: HashMap<u64, LayoutRect>,
    next_index: u64,
}

impl DragDropContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self {
            registrations: IndexMap::new(),
            geometry: HashMap::new(),
            next_index: 0,
        }
    }

    /// Number of live registrations.
    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }

    /// Number of live registrations under `id`.
    pub fn count_for(&self, id: &DropTargetId) -> usize {
        self.registrations.values().filter(|r| &r.id == id).count()
    }

    pub fn is_registered(&self, id: &DropTargetId) -> bool {
        self.registrations.values().any(|r| &r.id == id)
    }

    /// Live registrations in registration order.
    pub fn registrations(&self) -> impl Iterator<Item = &DropTargetRegistration> {
        self.registrations.values()
    }

    /// Look up the registration behind a handle.
    pub fn registration(&self, handle: &DropTargetHandle) -> Option<&DropTargetRegistration> {
        self.registrations.get(&handle.index())
    }

    /// Refresh cached geometry from the tree's current layout.
    ///
    /// Call after layout. Registrations whose node left the tree lose their
    /// geometry until they are released.
    pub fn sync_geometry(&mut self, tree: &UiTree) {
        self.geometry.clear();
        for (index, registration) in &self.registrations {
            match tree.absolute_layout(registration.node) {
                Some(rect) => {
                    self.geometry.insert(*index, rect);
                }
                None => {
                    tracing::warn!(
                        "Drop target '{}' points at missing node {:?}",
                        registration.id,
                        registration.node
                    );
                }
            }
        }
    }

    /// Cached geometry for a registration.
    pub fn geometry(&self, handle: &DropTargetHandle) -> Option<LayoutRect> {
        self.geometry.get(&handle.index()).copied()
    }

    /// Cached geometry of every registration under `id`, in registration order.
    pub fn geometry_for(&self, id: &DropTargetId) -> Vec<LayoutRect> {
        self.registrations
            .iter()
            .filter(|(_, r)| &r.id == id)
            .filter_map(|(index, _)| self.geometry.get(index).copied())
            .collect()
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.registrations.clear();
        self.geometry.clear();
    }
}

impl Default for DragDropContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DropTargetRegistry for DragDropContext {
    fn register(&mut self, id: DropTargetId, node: crate::tree::NodeId) -> DropTargetHandle {
        let existing = self.count_for(&id);
        if existing > 0 {
            // Drops on either target will be reported under the same identifier.
            tracing::warn!(
                "Drop target '{}' registered {} times; drops cannot be told apart",
                id,
                existing + 1
            );
        }

        let index = self.next_index;
        self.next_index += 1;

        tracing::debug!("Registered drop target '{}' (#{}) on {:?}", id, index, node);
        self.registrations
            .insert(index, DropTargetRegistration { id, node, index });

        DropTargetHandle::new(index)
    }

    fn release(&mut self, handle: DropTargetHandle) -> DndResult<DropTargetRegistration> {
        let index = handle.index();
        let registration = self
            .registrations
            .shift_remove(&index)
            .ok_or(DndError::UnknownHandle(index))?;
        self.geometry.remove(&index);

        tracing::debug!("Released drop target '{}' (#{})", registration.id, index);
        Ok(registration)
    }
}
