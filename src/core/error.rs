//! Error taxonomy for a single listing.
//!
//! Every stage of the pipeline returns a [ListError] on failure. None of them are recovered:
//! one failing entry aborts the listing, and only the binary decides how to exit.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("cannot access '{}': {source}", path.display())]
    PathNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open directory '{}': {source}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open directory '{}': {source}", path.display())]
    NotADirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read directory '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot access '{}': {source}", path.display())]
    MetadataUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot format modification time of '{name}'")]
    FormatFailure { name: String },
}

impl ListError {
    /// Classifies a failure to open the directory stream at `path`.
    pub fn from_open(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => ListError::PathNotFound { path, source },
            io::ErrorKind::PermissionDenied => ListError::PermissionDenied { path, source },
            io::ErrorKind::NotADirectory => ListError::NotADirectory { path, source },
            _ => ListError::Unreadable { path, source },
        }
    }

    /// A failure while pulling the next name out of an open stream.
    pub fn from_read(path: &Path, source: io::Error) -> Self {
        ListError::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    }

    /// A failure to stat one entry of the listing.
    pub fn from_stat(path: &Path, source: io::Error) -> Self {
        ListError::MetadataUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path the error refers to, if it has one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ListError::PathNotFound { path, .. }
            | ListError::PermissionDenied { path, .. }
            | ListError::NotADirectory { path, .. }
            | ListError::Unreadable { path, .. }
            | ListError::MetadataUnavailable { path, .. } => Some(path),
            ListError::FormatFailure { .. } => None,
        }
    }
}
