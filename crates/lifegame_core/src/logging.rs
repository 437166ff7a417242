//! Structured logging setup.
//!
//! Frames are written to stdout, so log lines go to stderr and default to
//! `warn`. Set `RUST_LOG` (for example `RUST_LOG=lifegame_tui=debug`) to see
//! per-frame timings.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Initialize the tracing subscriber. Subsequent calls are no-ops.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
        tracing::info!("still alive");
    }
}
