//! Command-line interface layer.

pub mod commands;
pub mod types;

pub use types::{Cli, Commands};

/// Log a run-level failure and terminate with a non-zero exit code.
///
/// Per-item failures never reach here; only the unrecoverable ones
/// listed in the error-handling contract do (cannot list issues, cannot
/// resolve the repository, cannot read or write the data document).
pub fn handle_error(err: &anyhow::Error) -> ! {
    tracing::error!("{err:#}");
    std::process::exit(1);
}
