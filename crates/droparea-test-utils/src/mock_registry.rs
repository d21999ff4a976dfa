//! Recording implementation of `DropTargetRegistry` for tests.

use droparea_ui::dnd::{
    DndError, DndResult, DropTargetHandle, DropTargetId, DropTargetRegistration,
    DropTargetRegistry,
};
use droparea_ui::tree::NodeId;
use parking_lot::Mutex;

/// Records a registry call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryCall {
    Register {
        id: DropTargetId,
        node: NodeId,
        index: u64,
    },
    Release {
        index: u64,
        /// False when the handle was not live at release time.
        known: bool,
    },
}

/// Mock drop-target registry.
///
/// # Interior Mutability
///
/// Calls are recorded through `&self`, so a test can hand `&mut &mock` to
/// the code under test and still inspect the mock afterwards. `parking_lot`
/// mutexes keep the shared reference `Send`, which the registry trait needs.
pub struct MockDropTargetRegistry {
    /// Recorded calls for verification
    calls: Mutex<Vec<RegistryCall>>,
    /// Registrations not yet released
    active: Mutex<Vec<DropTargetRegistration>>,
    next_index: Mutex<u64>,
}

impl MockDropTargetRegistry {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            active: Mutex::new(Vec::new()),
            next_index: Mutex::new(0),
        }
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<RegistryCall> {
        self.calls.lock().clone()
    }

    pub fn count_registers(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RegistryCall::Register { .. }))
            .count()
    }

    pub fn count_releases(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RegistryCall::Release { .. }))
            .count()
    }

    /// Number of registrations currently live.
    pub fn active_count(&self) -> usize {
        self.active.lock().len()
    }

    /// Number of live registrations under `id`.
    pub fn active_count_for(&self, id: &DropTargetId) -> usize {
        self.active.lock().iter().filter(|r| &r.id == id).count()
    }

    /// Identifiers of live registrations, in registration order.
    pub fn active_ids(&self) -> Vec<DropTargetId> {
        self.active.lock().iter().map(|r| r.id.clone()).collect()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn record_register(&self, id: DropTargetId, node: NodeId) -> DropTargetHandle {
        let index = {
            let mut next = self.next_index.lock();
            let index = *next;
            *next += 1;
            index
        };

        self.calls.lock().push(RegistryCall::Register {
            id: id.clone(),
            node,
            index,
        });
        self.active
            .lock()
            .push(DropTargetRegistration { id, node, index });

        DropTargetHandle::new(index)
    }

    fn record_release(&self, handle: DropTargetHandle) -> DndResult<DropTargetRegistration> {
        let index = handle.index();
        let removed = {
            let mut active = self.active.lock();
            active
                .iter()
                .position(|r| r.index == index)
                .map(|pos| active.remove(pos))
        };

        self.calls.lock().push(RegistryCall::Release {
            index,
            known: removed.is_some(),
        });

        removed.ok_or(DndError::UnknownHandle(index))
    }
}

impl Default for MockDropTargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DropTargetRegistry for MockDropTargetRegistry {
    fn register(&mut self, id: DropTargetId, node: NodeId) -> DropTargetHandle {
        self.record_register(id, node)
    }

    fn release(&mut self, handle: DropTargetHandle) -> DndResult<DropTargetRegistration> {
        self.record_release(handle)
    }
}

impl DropTargetRegistry for &MockDropTargetRegistry {
    fn register(&mut self, id: DropTargetId, node: NodeId) -> DropTargetHandle {
        self.record_register(id, node)
    }

    fn release(&mut self, handle: DropTargetHandle) -> DndResult<DropTargetRegistration> {
        self.record_release(handle)
    }
}
