//! # Observability
//!
//! Tracing setup for the notebook builder and query helper. Library code only
//! emits `tracing` events; binaries call [`init`] once to install a subscriber.
//!
//! Console logs go to stderr. Stdout carries the notebook paths from `build`,
//! the topic table from `list` and the rendered example from `ask`, so it stays
//! clean for piping.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Configuration for initializing the observability system.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// The maximum log level to capture.
    pub level: Level,
    /// The target for the logs.
    pub target: LogTarget,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            target: LogTarget::default(),
        }
    }
}

/// Defines the output target for logs.
#[derive(Debug, Clone, Default)]
pub enum LogTarget {
    /// Log to the console (stderr), keeping stdout free for rendered output.
    #[default]
    Console,
    /// Log to a file.
    File(String),
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` directives are honoured; the configured level is added for this
/// crate. Returns an error if a global subscriber is already set.
pub fn init(config: ObservabilityConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("llm_param_notebooks={}", config.level).parse()?);

    let subscriber = tracing_subscriber::registry().with(filter);

    match config.target {
        LogTarget::Console => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            subscriber.with(layer).try_init()?;
        }
        LogTarget::File(path) => {
            let file = std::fs::File::create(path)?;
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file));
            subscriber.with(layer).try_init()?;
        }
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(matches!(config.target, LogTarget::Console));
    }
}
