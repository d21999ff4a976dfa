/// Default `tracing` filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,droparea_ui=debug,taffy=warn";

/// Configuration for the droparea runtime.
#[derive(Debug, Clone)]
pub struct Config {
    pub benchmark: BenchmarkMode,
    /// `EnvFilter` directives applied when `RUST_LOG` is absent.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            benchmark: BenchmarkMode::Off,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the benchmarking mode.
    pub fn benchmark(mut self, mode: BenchmarkMode) -> Self {
        self.benchmark = mode;
        self
    }

    /// Set the fallback log filter.
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkMode {
    /// Benchmarking is disabled
    Off,
    /// Profiling scopes are recorded in-process
    On,
    /// Profiling scopes are recorded and served to `puffin_viewer` over HTTP
    WithWebserver,
}
