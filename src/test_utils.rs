//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory for testing.
///
/// Provides methods for creating files of a given size and empty
/// directories. The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file filled with `size` bytes.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, size: usize) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, vec![b'x'; size]).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Recreate the demonstration hierarchy on disk (without the root
    /// directory itself, which is this temporary directory).
    pub fn with_sample_tree() -> Self {
        let dir = Self::new();
        dir.add_file("bin/vi", 10000);
        dir.add_file("bin/latex", 20000);
        dir.add_dir("tmp");
        dir.add_file("usr/yuki/diary.html", 100);
        dir.add_file("usr/yuki/Composite.java", 200);
        dir.add_file("usr/hanako/memo.tex", 300);
        dir.add_file("usr/tomura/game.doc", 400);
        dir.add_file("usr/tomura/junk.mail", 500);
        dir
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
