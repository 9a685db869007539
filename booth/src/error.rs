//! Errors that end a booth run.
//!
//! Bad operator input never surfaces here; validators re-prompt for it.

use crate::config::ConfigError;
use crate::prompt::ConsoleError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal booth errors
#[derive(Debug, Error)]
pub enum BoothError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The console closed or failed mid-session
    #[error(transparent)]
    Console(#[from] ConsoleError),

    /// The report file could not be written
    #[error("failed to write report file {}: {source}", path.display())]
    ReportFile {
        /// File that was being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
