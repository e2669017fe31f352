//! Arbor - entry trees with pluggable visitors
//!
//! A tree of [`File`]s and [`Directory`]s, plus read-only operations written
//! as [`Visitor`]s: aggregate size, a path-annotated listing, name search,
//! counting, a box-drawing tree view and JSON export. Trees are built by
//! hand or scanned from disk with [`Scanner`].
//!
//! ```
//! use arbor::{Directory, Entry, File, FileFindVisitor};
//!
//! let mut bin = Directory::new("bin")?;
//! bin.add(File::new("vi", 10000)?);
//! bin.add(File::new("latex", 20000)?);
//! let root: Entry = Directory::new("root")?.with(bin).into();
//! assert_eq!(root.size(), 30000);
//!
//! let mut find = FileFindVisitor::new("tex")?;
//! let Ok(()) = root.accept(&mut find);
//! assert_eq!(find.found_files()[0].name(), "latex");
//! # Ok::<(), arbor::Error>(())
//! ```

pub mod entry;
pub mod error;
pub mod output;
pub mod sample;
pub mod scan;
pub mod visitor;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use entry::{Directory, Entry, File};
pub use error::{Error, Result};
pub use output::{JsonNode, JsonVisitor, OutputConfig, TreeVisitor, format_size, print_json};
pub use sample::sample_tree;
pub use scan::{ScanConfig, Scanner};
pub use visitor::{CountVisitor, FileFindVisitor, ListVisitor, Visitor, visit_children};
