//! Base path resolution and validation

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::PathValidationError;

/// Outcome of inspecting a candidate base path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    /// Existing, writable directory
    Ready,
    /// Nothing exists at the path yet
    Missing,
}

/// Expand a leading `~` to the user's home directory
///
/// Only the bare `~` and `~/` (or `~\`) prefixes are expanded. Without a
/// known home directory the input is returned unchanged.
#[must_use]
pub fn expand_home(input: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(input);
    };

    if input == "~" {
        return home.to_path_buf();
    }

    match input
        .strip_prefix("~/")
        .or_else(|| input.strip_prefix("~\\"))
    {
        Some(rest) => home.join(rest),
        None => PathBuf::from(input),
    }
}

/// Turn operator input into an absolute base path
///
/// Empty input selects `cwd`. Relative paths are resolved against `cwd`.
#[must_use]
pub fn resolve(input: &str, cwd: &Path, home: Option<&Path>) -> PathBuf {
    let input = input.trim();
    if input.is_empty() {
        return cwd.to_path_buf();
    }

    let expanded = expand_home(input, home);
    if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    }
}

/// Check whether `path` can serve as a base directory
///
/// # Errors
///
/// Returns an error if the path exists but is not a writable directory, or
/// if its metadata cannot be read.
pub fn inspect(path: &Path) -> Result<PathStatus, PathValidationError> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            ensure_writable(path)?;
            Ok(PathStatus::Ready)
        }
        Ok(_) => Err(PathValidationError::NotADirectory(path.to_path_buf())),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(PathStatus::Missing),
        // Some ancestor is a file
        Err(err) if err.kind() == ErrorKind::NotADirectory => {
            ensure_creatable(path)?;
            Ok(PathStatus::Missing)
        }
        Err(source) => Err(PathValidationError::Inspect {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Check that a missing `path` could be created
///
/// The nearest existing ancestor must be a writable directory. Nothing is
/// created on disk.
///
/// # Errors
///
/// Returns an error if no ancestor exists or the nearest one is not a
/// writable directory.
pub fn ensure_creatable(path: &Path) -> Result<(), PathValidationError> {
    let ancestor = path
        .ancestors()
        .skip(1)
        .find(|candidate| !candidate.as_os_str().is_empty() && candidate.exists())
        .ok_or_else(|| PathValidationError::NoExistingAncestor(path.to_path_buf()))?;

    if !ancestor.is_dir() {
        return Err(PathValidationError::NotADirectory(ancestor.to_path_buf()));
    }

    ensure_writable(ancestor)
}

/// Probe write access by creating and dropping a temporary file
fn ensure_writable(dir: &Path) -> Result<(), PathValidationError> {
    tempfile::Builder::new()
        .prefix(".rtgc-write-probe")
        .tempfile_in(dir)
        .map(drop)
        .map_err(|_| PathValidationError::NotWritable(dir.to_path_buf()))
}
