use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = SanitizeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SanitizeError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: invalid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: top-level value is not an object", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("No players found")]
    NoPlayers,

    #[error("No saves found")]
    NoSaves,

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("selection cancelled")]
    Cancelled,
}

impl SanitizeError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// True for the two "nothing to work on" outcomes that end a run without failing it.
    pub fn is_nothing_found(&self) -> bool {
        matches!(self, Self::NoPlayers | Self::NoSaves)
    }
}
