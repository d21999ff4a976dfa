//! Profiling utilities based on the `puffin` crate.

use crate::config::BenchmarkMode;

pub use puffin::profile_function;

#[cfg(feature = "profiling")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Default address for the `puffin_http` server.
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8585";

/// Enable profiling according to the configured benchmark mode.
///
/// `WithWebserver` falls back to in-process recording when the crate is
/// built without the `profiling` feature.
pub fn init_profiling(mode: BenchmarkMode) {
    match mode {
        BenchmarkMode::Off => puffin::set_scopes_on(false),
        BenchmarkMode::On => puffin::set_scopes_on(true),
        BenchmarkMode::WithWebserver => {
            puffin::set_scopes_on(true);
            start_server();
        }
    }
}

#[cfg(feature = "profiling")]
fn start_server() {
    if PROFILING_SERVER.get().is_some() {
        return;
    }
    match puffin_http::Server::new(DEFAULT_SERVER_ADDR) {
        Ok(server) => {
            tracing::info!("Puffin profiler server started on http://{}", DEFAULT_SERVER_ADDR);
            let _ = PROFILING_SERVER.set(server);
        }
        Err(e) => {
            tracing::error!("Failed to start puffin server: {}", e);
        }
    }
}

#[cfg(not(feature = "profiling"))]
fn start_server() {
    tracing::warn!("puffin_http is disabled; profiling data stays in-process");
}

/// Mark the start of a new frame for profiling.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
