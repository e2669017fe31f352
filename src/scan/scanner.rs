//! Scanner - reads a directory hierarchy into an entry tree

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::entry::{Directory, Entry, File};
use crate::error::{Error, Result};

use super::config::ScanConfig;
use super::utils::{root_name, should_ignore_name};

/// Builds an [`Entry`] tree from a path on disk.
///
/// Children are sorted by file name, file sizes come from metadata, and
/// symlinks are skipped so the result is always a finite tree.
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan `root`, which may be a file or a directory.
    ///
    /// Failing to read the root is an error; unreadable entries below it are
    /// skipped with a warning.
    pub fn scan(&self, root: &Path) -> Result<Entry> {
        let meta = fs::metadata(root).map_err(|e| Error::io(root, e))?;
        let name = root_name(root);

        if meta.is_file() {
            return Ok(File::new(name, meta.len())?.into());
        }
        if !meta.is_dir() {
            return Err(Error::InvalidArgument(format!(
                "'{}' is neither a file nor a directory",
                root.display()
            )));
        }

        Ok(self.scan_dir(root, name, 0)?.into())
    }

    fn scan_dir(&self, path: &Path, name: String, depth: usize) -> Result<Directory> {
        let mut dir = Directory::new(name)?;

        debug!(path = %path.display(), depth, "scanning directory");
        let entries = fs::read_dir(path).map_err(|e| Error::io(path, e))?;
        let mut entries: Vec<_> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                    None
                }
            })
            .collect();
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let child_name = entry.file_name().to_string_lossy().to_string();
            if should_ignore_name(&child_name, &self.config) {
                continue;
            }

            let child_path = entry.path();
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    warn!(path = %child_path.display(), error = %e, "skipping entry");
                    continue;
                }
            };

            // Skip symlinks to prevent cycles and shared subtrees
            if file_type.is_symlink() {
                debug!(path = %child_path.display(), "skipping symlink");
                continue;
            }

            if file_type.is_dir() {
                match self.scan_dir(&child_path, child_name, depth + 1) {
                    Ok(child) => dir.add(child),
                    Err(e) => warn!(error = %e, "skipping unreadable directory"),
                }
            } else if file_type.is_file() {
                match entry.metadata() {
                    Ok(meta) => dir.add(File::new(child_name, meta.len())?),
                    Err(e) => {
                        warn!(path = %child_path.display(), error = %e, "skipping file")
                    }
                }
            }
        }

        Ok(dir)
    }
}
