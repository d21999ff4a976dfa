//! Droparea Core
//!
//! Shared plumbing for the droparea crates: logging setup, configuration,
//! math and geometry types, hash collections and profiling hooks.

pub mod alloc;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::{BenchmarkMode, Config};
