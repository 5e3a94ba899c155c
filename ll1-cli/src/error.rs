//! CLI error types

use std::io;
use std::path::PathBuf;

use ll1_core::{Diagnostic, Position, UnexpectedToken};

/// Failure while scanning integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    Unexpected(#[from] UnexpectedToken),

    #[error("integer overflow at {0}")]
    Overflow(Position),
}

/// Anything that ends a run of the client
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read config '{}': {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("cannot parse config '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot open '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("read failed: {0}")]
    Io(io::Error),

    #[error("{0}")]
    UnexpectedToken(Diagnostic<u8>),

    #[error("integer overflow at {0}")]
    Overflow(Position),
}

impl CliError {
    /// Source position the error points at, if any
    pub fn position(&self) -> Option<Position> {
        match self {
            CliError::UnexpectedToken(diag) => Some(diag.position),
            CliError::Overflow(pos) => Some(*pos),
            _ => None,
        }
    }
}
