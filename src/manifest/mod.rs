//! Manifest and lockfile access
//!
//! This module provides functionality to:
//! - Locate package.json and package-lock.json in a project
//! - Read the version-relevant parts of both files
//! - Write reconciled engine constraints back into package.json

mod lockfile;
mod package_json;
mod writer;

pub use lockfile::{LockedPackage, Lockfile, LockfileFormat};
pub use package_json::{PackageJson, UNKNOWN_NAME};
pub use writer::{apply_summary, read_manifest, update_manifest, write_engines, write_manifest};

use std::path::{Path, PathBuf};

/// File name of the manifest
pub const MANIFEST_FILENAME: &str = "package.json";

/// File name of the lockfile
pub const LOCKFILE_FILENAME: &str = "package-lock.json";

/// Paths of the files an analysis looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFiles {
    /// Project root
    pub root: PathBuf,
    /// package.json, whether or not it exists
    pub manifest: PathBuf,
    /// package-lock.json, whether or not it exists
    pub lockfile: PathBuf,
}

impl ProjectFiles {
    /// Paths for the project at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            manifest: root.join(MANIFEST_FILENAME),
            lockfile: root.join(LOCKFILE_FILENAME),
            root,
        }
    }

    /// Returns true if package.json exists
    pub fn has_manifest(&self) -> bool {
        self.manifest.is_file()
    }

    /// Returns true if package-lock.json exists
    pub fn has_lockfile(&self) -> bool {
        self.lockfile.is_file()
    }
}

/// Project files for `root`
pub fn project_files(root: &Path) -> ProjectFiles {
    ProjectFiles::new(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_project_files_paths() {
        let files = ProjectFiles::new("/work/app");
        assert_eq!(files.manifest, PathBuf::from("/work/app/package.json"));
        assert_eq!(files.lockfile, PathBuf::from("/work/app/package-lock.json"));
    }

    #[test]
    fn test_project_files_detection() {
        let temp_dir = tempfile::tempdir().unwrap();
        let files = project_files(temp_dir.path());
        assert!(!files.has_manifest());
        assert!(!files.has_lockfile());

        fs::write(&files.manifest, "{}").unwrap();
        fs::write(&files.lockfile, "{}").unwrap();
        assert!(files.has_manifest());
        assert!(files.has_lockfile());
    }
}
