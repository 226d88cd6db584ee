//! Idempotent project materialization
//!
//! The [`Scaffolder`] turns a [`Manifest`] into directories and files under
//! `<base>/RTGC`. Every file is created exclusively, so anything already on
//! disk is counted as skipped and left byte-for-byte untouched.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ScaffoldError;
use crate::manifest::{Manifest, ManifestEntry, PROJECT_DIR_NAME};

/// What happened to a single manifest entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// File did not exist and was created
    Created,
    /// Something already existed at the path
    Skipped,
}

/// Result of one materialization pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialization {
    /// Directory the manifest was materialized into
    pub project_root: PathBuf,
    /// Files created by this pass
    pub created: usize,
    /// Files left alone because they already existed
    pub skipped: usize,
}

impl Materialization {
    /// Total number of manifest entries processed
    #[must_use]
    pub const fn total(&self) -> usize {
        self.created + self.skipped
    }
}

/// Materializes a manifest below a base directory
#[derive(Debug, Clone)]
pub struct Scaffolder {
    manifest: Manifest,
}

impl Scaffolder {
    /// Create a scaffolder for the given manifest
    #[must_use]
    pub const fn new(manifest: Manifest) -> Self {
        Self { manifest }
    }

    /// The manifest this scaffolder materializes
    #[must_use]
    pub const fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory the project will be created in for a given base path
    #[must_use]
    pub fn project_root(base: &Path) -> PathBuf {
        base.join(PROJECT_DIR_NAME)
    }

    /// Materialize the manifest under `base`
    ///
    /// # Errors
    ///
    /// Returns an error if any directory or file operation fails. Work done
    /// before the failure is not rolled back.
    pub fn materialize(&self, base: &Path) -> Result<Materialization, ScaffoldError> {
        self.materialize_with(base, |_, _| {})
    }

    /// Materialize the manifest, reporting each entry's outcome to `on_entry`
    ///
    /// # Errors
    ///
    /// Returns an error if any directory or file operation fails. Work done
    /// before the failure is not rolled back.
    pub fn materialize_with<F>(
        &self,
        base: &Path,
        mut on_entry: F,
    ) -> Result<Materialization, ScaffoldError>
    where
        F: FnMut(&ManifestEntry, EntryOutcome),
    {
        let project_root = Self::project_root(base);
        create_dir_all(&project_root)?;

        let mut created = 0;
        let mut skipped = 0;

        for entry in self.manifest.entries() {
            let outcome = materialize_entry(&project_root, entry)?;
            match outcome {
                EntryOutcome::Created => created += 1,
                EntryOutcome::Skipped => skipped += 1,
            }
            on_entry(entry, outcome);
        }

        info!(
            project_root = %project_root.display(),
            created,
            skipped,
            "Materialized project structure"
        );

        Ok(Materialization {
            project_root,
            created,
            skipped,
        })
    }
}

/// Create a single entry if nothing exists at its path yet
fn materialize_entry(
    project_root: &Path,
    entry: &ManifestEntry,
) -> Result<EntryOutcome, ScaffoldError> {
    let path = project_root.join(entry.path());

    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    // create_new makes the existence check and the creation one atomic step
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "Skipping existing file");
            return Ok(EntryOutcome::Skipped);
        }
        Err(source) => return Err(ScaffoldError::CreateFile { path, source }),
    };

    write_header(&mut file, entry, path)
}

/// Write the entry's boilerplate into a freshly created file
///
/// The entry only counts as created once its header is fully written.
fn write_header<W: Write>(
    writer: &mut W,
    entry: &ManifestEntry,
    path: PathBuf,
) -> Result<EntryOutcome, ScaffoldError> {
    if let Some(header) = entry.policy().header() {
        if let Err(source) = writer.write_all(header.as_bytes()) {
            return Err(ScaffoldError::WriteFile { path, source });
        }
    }

    debug!(path = %path.display(), "Created file");
    Ok(EntryOutcome::Created)
}

fn create_dir_all(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn small_manifest() -> Manifest {
        Manifest::from_paths(&[
            "src/core/Engine.hpp",
            "src/core/Engine.cpp",
            "assets/shaders/vertex.glsl",
            "CMakeLists.txt",
            "build.bat",
        ])
    }

    #[test]
    fn test_project_root_appends_project_dir() {
        let root = Scaffolder::project_root(Path::new("/tmp/work"));
        assert_eq!(root, Path::new("/tmp/work").join("RTGC"));
    }

    #[test]
    fn test_materialize_writes_headers_by_policy() {
        let temp_dir = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(small_manifest());

        let result = scaffolder.materialize(temp_dir.path()).unwrap();
        assert_eq!(result.created, 5);
        assert_eq!(result.skipped, 0);

        let root = temp_dir.path().join("RTGC");
        assert_eq!(
            fs::read_to_string(root.join("src/core/Engine.cpp")).unwrap(),
            "// Auto-generated file\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("assets/shaders/vertex.glsl")).unwrap(),
            "# Auto-generated asset file\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("CMakeLists.txt")).unwrap(),
            "# CMakeLists.txt for RTGC project\n"
        );
        assert_eq!(fs::read(root.join("build.bat")).unwrap().len(), 0);
    }

    #[test]
    fn test_existing_directory_at_entry_path_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("RTGC/build.bat")).unwrap();

        let result = Scaffolder::new(small_manifest())
            .materialize(temp_dir.path())
            .unwrap();

        assert_eq!(result.created, 4);
        assert_eq!(result.skipped, 1);
        assert!(temp_dir.path().join("RTGC/build.bat").is_dir());
    }

    #[test]
    fn test_observer_sees_every_entry_in_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("RTGC")).unwrap();
        fs::write(temp_dir.path().join("RTGC/CMakeLists.txt"), "custom").unwrap();

        let scaffolder = Scaffolder::new(small_manifest());
        let mut seen = Vec::new();
        scaffolder
            .materialize_with(temp_dir.path(), |entry, outcome| {
                seen.push((entry.path(), outcome));
            })
            .unwrap();

        assert_eq!(
            seen,
            vec![
                ("src/core/Engine.hpp", EntryOutcome::Created),
                ("src/core/Engine.cpp", EntryOutcome::Created),
                ("assets/shaders/vertex.glsl", EntryOutcome::Created),
                ("CMakeLists.txt", EntryOutcome::Skipped),
                ("build.bat", EntryOutcome::Created),
            ]
        );
    }

    #[test]
    fn test_blocked_parent_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("RTGC/src")).unwrap();
        // A plain file where a directory is needed
        fs::write(temp_dir.path().join("RTGC/src/core"), "").unwrap();

        let err = Scaffolder::new(small_manifest())
            .materialize(temp_dir.path())
            .unwrap_err();

        match err {
            ScaffoldError::CreateDirectory { path, .. } => {
                assert_eq!(path, temp_dir.path().join("RTGC/src/core"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::StorageFull, "no space left"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_header_write_failure_is_an_error_not_a_creation() {
        let entry = ManifestEntry::new("src/core/Engine.cpp");
        let path = PathBuf::from("/work/RTGC/src/core/Engine.cpp");

        let result = write_header(&mut BrokenWriter, &entry, path.clone());

        match result {
            Err(ScaffoldError::WriteFile { path: failed, source }) => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), ErrorKind::StorageFull);
            }
            other => panic!("expected a write error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_entry_never_touches_the_writer() {
        let entry = ManifestEntry::new("build.bat");
        let outcome = write_header(&mut BrokenWriter, &entry, PathBuf::from("build.bat")).unwrap();
        assert_eq!(outcome, EntryOutcome::Created);
    }

    #[test]
    fn test_header_is_written_in_full() {
        let entry = ManifestEntry::new("assets/models/kamaz.obj");
        let mut buffer = Vec::new();

        let outcome = write_header(&mut buffer, &entry, PathBuf::from("kamaz.obj")).unwrap();

        assert_eq!(outcome, EntryOutcome::Created);
        assert_eq!(buffer, b"# Auto-generated asset file\n");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_full_device_write_failure_is_reported() {
        let entry = ManifestEntry::new("src/core/Engine.hpp");
        let mut full = OpenOptions::new().write(true).open("/dev/full").unwrap();

        let result = write_header(&mut full, &entry, PathBuf::from("Engine.hpp"));

        assert!(matches!(
            result,
            Err(ScaffoldError::WriteFile { ref path, .. }) if path == Path::new("Engine.hpp")
        ));
    }

    #[test]
    fn test_empty_manifest_only_creates_root() {
        let temp_dir = TempDir::new().unwrap();
        let result = Scaffolder::new(Manifest::from_paths(&[]))
            .materialize(temp_dir.path())
            .unwrap();

        assert_eq!(result.total(), 0);
        assert!(temp_dir.path().join("RTGC").is_dir());
    }
}
