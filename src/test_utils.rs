//! Temporary directory fixtures for tests.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tempdir::TempDir;

use crate::errors::Error;

// File paths, contents and directory flags to create in the temporary test
// root.
static TEMP_FILES: &[(&str, &str, bool)] = &[
    ("file1.txt", "", false),
    ("file2.txt", "", false),
    ("file3.txt", "", false),
    ("dir1", "", true),
    ("dir1/file1_1.txt", "", false),
    ("dir1/file1_2.txt", "contents 1_2", false),
    ("dir2", "", true),
];

/// A temporary directory pre-populated with a small known file tree.
#[derive(Debug)]
pub struct TestRoot {
    /// Root of the temporary test directory.
    pub root: TempDir,
}

impl TestRoot {
    /// Creates the fixture tree under a fresh temporary directory.
    pub fn new() -> Result<Self, Error> {
        let root = TempDir::new("dirstat").map_err(|e| Error::io(Path::new("<tempdir>"), e))?;
        let ret = Self { root };
        for (relative_path, contents, is_dir) in TEMP_FILES {
            if *is_dir {
                ret.create_dir(relative_path)?;
            } else {
                ret.create_file(relative_path, contents)?;
            }
        }
        Ok(ret)
    }

    /// Absolute path of `relative` inside the test root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Creates a directory (and any missing parents) under the root.
    pub fn create_dir(&self, relative: &str) -> Result<(), Error> {
        let full = self.path(relative);
        fs::create_dir_all(&full).map_err(|e| Error::io(&full, e))
    }

    /// Creates a file with `contents` under the root, creating parent
    /// directories as needed.
    pub fn create_file(&self, relative: &str, contents: &str) -> Result<(), Error> {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(&full, contents).map_err(|e| Error::io(&full, e))
    }
}
