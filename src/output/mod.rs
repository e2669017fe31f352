//! Tree formatting and display
//!
//! Presentation-oriented visitors:
//! - Console tree with connectors and colors
//! - JSON output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Shared utility functions (prefix calculation, size formatting)
//! - `tree` - Box-drawing tree visitor
//! - `json` - JSON snapshot visitor

mod config;
mod json;
mod tree;
mod utils;

pub use config::OutputConfig;
pub use json::{JsonNode, JsonVisitor, print_json, to_json_node};
pub use tree::TreeVisitor;
pub use utils::{connector, continuation_prefix, format_size};
