//! Tracing subscriber setup shared by the desktop and CLI binaries.
//!
//! ## Usage
//!
//! ```ignore
//! use citadel_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new().verbosity(cli.verbose).init();
//! ```
//!
//! `RUST_LOG` always wins over the verbosity level:
//!
//! ```bash
//! RUST_LOG=citadel_core=debug citadel list
//! ```

use tracing_subscriber::EnvFilter;

/// Builder for the global tracing subscriber.
#[derive(Debug, Clone, Default)]
pub struct LoggingBuilder {
    verbosity: u8,
    env_filter: Option<String>,
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verbosity from repeated `-v` flags (0 warn, 1 info, 2 debug, 3+ trace).
    pub fn verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Explicit filter directive, used when `RUST_LOG` is not set.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Filter directive the builder falls back to without `RUST_LOG`.
    pub fn directive(&self) -> String {
        if let Some(ref filter) = self.env_filter {
            return filter.clone();
        }
        level_for(self.verbosity).to_string()
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directive()))
    }

    /// Install as the global default. Logs to stderr so command output on
    /// stdout stays clean. A second call is a no-op.
    pub fn init(self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .try_init();
    }
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
