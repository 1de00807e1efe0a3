//! `tracing` subscriber setup.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(verbose: u8) -> &'static str {
  match verbose {
    0 => "info",
    1 => "debug",
    _ => "trace",
  }
}

/// Build the filter: `RUST_LOG` when set, otherwise by `-v` count.
#[must_use]
pub fn filter(verbose: u8) -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber, writing to stderr so reports on stdout stay clean.
///
/// # Errors
///
/// If a global subscriber is already installed.
pub fn init(verbose: u8) -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(filter(verbose))
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init()
    .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
