use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for profile output operations.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The output directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The profiles could not be encoded as JSON.
    #[error("failed to serialize profiles for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    /// The file or directory the failed operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            WriteError::CreateDir { path, .. }
            | WriteError::Serialize { path, .. }
            | WriteError::Write { path, .. } => path,
        }
    }
}
