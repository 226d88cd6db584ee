//! Error types and error handling

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while materializing the manifest
///
/// Files written before the failure stay on disk.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A directory could not be created
    #[error("Failed to create directory: {}", .path.display())]
    CreateDirectory {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A manifest file could not be created
    #[error("Failed to create file: {}", .path.display())]
    CreateFile {
        /// File that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A created file could not receive its boilerplate header
    #[error("Failed to write file: {}", .path.display())]
    WriteFile {
        /// File that was created but not written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Reason a candidate base path was rejected
#[derive(Debug, Error)]
pub enum PathValidationError {
    /// Path exists but is not a directory
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Directory is not writable by the current user
    #[error("No write permission for '{}'", .0.display())]
    NotWritable(PathBuf),

    /// None of the path's ancestors exist
    #[error("No existing parent directory for '{}'", .0.display())]
    NoExistingAncestor(PathBuf),

    /// Metadata lookup failed for a reason other than absence
    #[error("Cannot inspect '{}'", .path.display())]
    Inspect {
        /// Path that could not be inspected
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}
