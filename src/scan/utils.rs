//! Shared utility functions for scanning

use std::path::Path;

use glob::Pattern;

use super::config::ScanConfig;

/// Check if an entry should be skipped based on its name.
pub fn should_ignore_name(name: &str, config: &ScanConfig) -> bool {
    // Always ignore .git directory
    if name == ".git" {
        return true;
    }

    if !config.show_hidden && name.starts_with('.') {
        return true;
    }

    config
        .ignore_patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Display name for a scan root, defaulting to the path as given (e.g. ".").
pub fn root_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    if name.is_empty() { ".".to_string() } else { name }
}
