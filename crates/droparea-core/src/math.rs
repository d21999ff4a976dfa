//! Vector math re-exported from [`glam`].
//!
//! ```
//! use droparea_core::math::Vec2;
//!
//! let cursor = Vec2::new(10.0, 20.0);
//! assert_eq!(cursor + Vec2::ONE, Vec2::new(11.0, 21.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::Vec2;
