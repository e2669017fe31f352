//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print sizes as `1.5K` instead of raw byte counts
    pub human_sizes: bool,
    /// Stop drawing below this depth (the start entry is depth 0)
    pub max_depth: Option<usize>,
}

impl OutputConfig {
    pub(crate) fn size_label(&self, size: u64) -> String {
        if self.human_sizes {
            super::utils::format_size(size)
        } else {
            size.to_string()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            human_sizes: false,
            max_depth: None,
        }
    }
}
