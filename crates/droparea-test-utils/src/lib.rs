//! Test utilities for droparea.
//!
//! Provides a recording [`DropTargetRegistry`] so drop zones can be tested
//! without a drag-and-drop runtime behind them.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use droparea_test_utils::MockDropTargetRegistry;
//! use droparea_ui::dnd::DropZoneContainer;
//! use droparea_ui::tree::UiTree;
//!
//! let mock = MockDropTargetRegistry::new();
//! let mut tree = UiTree::new();
//!
//! let zone = DropZoneContainer::default()
//!     .mount(&mut tree, None, &mut &mock)
//!     .unwrap();
//! assert_eq!(mock.active_count(), 1);
//!
//! zone.unmount(&mut tree, &mut &mock).unwrap();
//! assert_eq!(mock.count_registers(), 1);
//! assert_eq!(mock.count_releases(), 1);
//! assert_eq!(mock.active_count(), 0);
//! # }
//! ```
//!
//! [`DropTargetRegistry`]: droparea_ui::dnd::DropTargetRegistry

#[cfg(feature = "mock")]
pub mod mock_registry;

#[cfg(feature = "mock")]
pub use mock_registry::*;
