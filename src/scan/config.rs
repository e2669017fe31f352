//! Configuration types for the filesystem scanner

/// Configuration for building an entry tree from disk.
///
/// There is no depth limit: directory sizes are only correct when every
/// level below them is read. Views prune at render time instead.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Include dot-files and dot-directories (`.git` is always skipped)
    pub show_hidden: bool,
    /// Names to skip, matched exactly or as glob patterns
    pub ignore_patterns: Vec<String>,
}
