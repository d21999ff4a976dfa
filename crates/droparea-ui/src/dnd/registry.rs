//! The drop-target registration capability.

use super::error::DndResult;
use crate::tree::NodeId;
use std::fmt;
use std::sync::Arc;

/// Identifier used when a drop zone is built without one.
pub const DEFAULT_DROP_ZONE_ID: &str = "droppable-area";

/// Token a drop target is registered under.
///
/// The coordination service reports drops by this identifier, so two targets
/// sharing one identifier cannot be told apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DropTargetId(Arc<str>);

impl DropTargetId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DropTargetId {
    fn default() -> Self {
        Self::new(DEFAULT_DROP_ZONE_ID)
    }
}

impl From<&str> for DropTargetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DropTargetId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl fmt::Display for DropTargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Proof of a live registration, returned by [`DropTargetRegistry::register`].
///
/// Deliberately neither `Clone` nor `Copy`: releasing consumes it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct DropTargetHandle {
    index: u64,
}

impl DropTargetHandle {
    /// Mint a handle. Registries call this; widgets only hold the result.
    pub fn new(index: u64) -> Self {
        Self { index }
    }

    /// Registry-assigned index, unique per registry.
    pub fn index(&self) -> u64 {
        self.index
    }
}

/// A registered drop target as the registry sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTargetRegistration {
    pub id: DropTargetId,
    /// Node whose layout is the drop target's geometry.
    pub node: NodeId,
    pub index: u64,
}

/// Capability to register UI nodes as drop targets.
///
/// Implemented by the drag-and-drop coordination service. Registration does
/// not deduplicate identifiers.
pub trait DropTargetRegistry: Send {
    /// Register `node` as a drop target under `id`.
    fn register(&mut self, id: DropTargetId, node: NodeId) -> DropTargetHandle;

    /// Release a registration, returning what was registered.
    fn release(&mut self, handle: DropTargetHandle) -> DndResult<DropTargetRegistration>;
}
