use crate::tree::NodeId;

/// Errors from drop-target registration and drop-zone mounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DndError {
    /// Node not found in tree.
    NodeNotFound(NodeId),
    /// The registry never issued this handle index, or already released it.
    UnknownHandle(u64),
    /// Mount without a parent while the tree already has this root.
    RootOccupied(NodeId),
}

impl std::fmt::Display for DndError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DndError::NodeNotFound(id) => write!(f, "Node {:?} not found", id),
            DndError::UnknownHandle(index) => {
                write!(f, "Drop target handle #{} is not registered", index)
            }
            DndError::RootOccupied(root) => {
                write!(f, "Tree already has root {:?}; mount under a parent", root)
            }
        }
    }
}

impl std::error::Error for DndError {}

/// Result type for drag-and-drop operations.
pub type DndResult<T> = Result<T, DndError>;
