// fileops - a small demonstration of text file operations
// Create, read, append, edit, search/replace, stats, copy and delete

pub mod commands;
pub mod config;
pub mod demo;
pub mod error;
pub mod error_handling;
pub mod file;

use anyhow::Result;
use tracing::info;

pub use error::{FileOpsError, FileOpsResult};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging to stderr
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `warn`.
/// Calling this more than once is harmless.
pub fn init_with_logger(verbose: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so stdout only carries operation results
    let installed = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose)
        .try_init()
        .is_ok();

    if installed {
        info!("Initializing fileops v{}", version());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_init_twice() {
        init_with_logger(false).unwrap();
        init_with_logger(true).unwrap();
    }
}
