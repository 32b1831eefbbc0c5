use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the session state machine.
///
/// The application treats both variants as inert: nothing changes and
/// nothing visibly happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Entry index {index} out of range (total: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No entry is selected")]
    NoSelection,
}

/// Errors from the application shell (file intake, configuration).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
