//! Entry model: files and directories forming a rooted tree
//!
//! An [`Entry`] is either a [`File`] with a fixed size or a [`Directory`]
//! whose size is derived from its children on every query. Directories own
//! their children outright, so a child can be attached to exactly one parent
//! and the structure is always a finite tree.

use std::fmt;

use crate::error::{Error, Result};
use crate::visitor::Visitor;

fn validate_name(name: String, kind: &str) -> Result<String> {
    if name.is_empty() {
        return Err(Error::InvalidArgument(format!("{} name must not be empty", kind)));
    }
    Ok(name)
}

/// A leaf entry with an immutable name and size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, size: u64) -> Result<Self> {
        let name = validate_name(name.into(), "file")?;
        Ok(Self { name, size })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Dispatch to [`Visitor::visit_file`].
    pub fn accept<'a, V>(&'a self, visitor: &mut V) -> std::result::Result<(), V::Error>
    where
        V: Visitor<'a> + ?Sized,
    {
        visitor.visit_file(self)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.size)
    }
}

/// A composite entry holding an ordered list of children.
///
/// Children keep insertion order and may share names. The directory's size
/// is not stored; [`Directory::size`] sums the children each time it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    name: String,
    children: Vec<Entry>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = validate_name(name.into(), "directory")?;
        Ok(Self {
            name,
            children: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recursive sum of the children's sizes; 0 for an empty directory.
    ///
    /// The sum saturates at `u64::MAX` rather than wrapping.
    pub fn size(&self) -> u64 {
        self.children
            .iter()
            .map(Entry::size)
            .fold(0, u64::saturating_add)
    }

    /// Append a child, taking ownership of it.
    pub fn add(&mut self, entry: impl Into<Entry>) {
        self.children.push(entry.into());
    }

    /// Builder-style variant of [`Directory::add`].
    pub fn with(mut self, entry: impl Into<Entry>) -> Self {
        self.add(entry);
        self
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Entry] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Dispatch to [`Visitor::visit_directory`].
    ///
    /// This does not walk the children: descending is up to the visitor.
    pub fn accept<'a, V>(&'a self, visitor: &mut V) -> std::result::Result<(), V::Error>
    where
        V: Visitor<'a> + ?Sized,
    {
        visitor.visit_directory(self)
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.size())
    }
}

/// A node in the tree: either a file or a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File(File),
    Directory(Directory),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::File(file) => file.name(),
            Entry::Directory(dir) => dir.name(),
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Entry::File(file) => file.size(),
            Entry::Directory(dir) => dir.size(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Directory(_))
    }

    /// Single-level double dispatch: a file calls `visit_file`, a directory
    /// calls `visit_directory`.
    pub fn accept<'a, V>(&'a self, visitor: &mut V) -> std::result::Result<(), V::Error>
    where
        V: Visitor<'a> + ?Sized,
    {
        match self {
            Entry::File(file) => file.accept(visitor),
            Entry::Directory(dir) => dir.accept(visitor),
        }
    }
}

impl From<File> for Entry {
    fn from(file: File) -> Self {
        Entry::File(file)
    }
}

impl From<Directory> for Entry {
    fn from(dir: Directory) -> Self {
        Entry::Directory(dir)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::File(file) => file.fmt(f),
            Entry::Directory(dir) => dir.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> File {
        File::new(name, size).unwrap()
    }

    fn dir(name: &str) -> Directory {
        Directory::new(name).unwrap()
    }

    #[test]
    fn test_file_accessors() {
        let f = file("vi", 10000);
        assert_eq!(f.name(), "vi");
        assert_eq!(f.size(), 10000);
        assert_eq!(f.to_string(), "vi (10000)");
    }

    #[test]
    fn test_zero_sized_file() {
        assert_eq!(file("empty", 0).size(), 0);
    }

    #[test]
    fn test_empty_names_rejected() {
        assert!(matches!(File::new("", 1), Err(Error::InvalidArgument(_))));
        assert!(matches!(Directory::new(""), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_directory_size_is_zero() {
        let d = dir("tmp");
        assert_eq!(d.size(), 0);
        assert!(d.is_empty());
        assert_eq!(d.to_string(), "tmp (0)");
    }

    #[test]
    fn test_directory_size_is_recursive_sum() {
        let mut bin = dir("bin");
        bin.add(file("vi", 10000));
        bin.add(file("latex", 20000));

        let mut root = dir("root");
        root.add(bin);
        root.add(dir("tmp"));
        root.add(file("readme", 5));

        assert_eq!(root.size(), 30005);
        let sum: u64 = root.children().iter().map(Entry::size).sum();
        assert_eq!(root.size(), sum);
    }

    #[test]
    fn test_size_reflects_later_additions() {
        let mut d = dir("usr");
        assert_eq!(d.size(), 0);
        d.add(file("a", 1));
        assert_eq!(d.size(), 1);
        d.add(file("b", 2));
        assert_eq!(d.size(), 3);
    }

    #[test]
    fn test_size_saturates_on_overflow() {
        let d = dir("big").with(file("a", u64::MAX)).with(file("b", 1));
        assert_eq!(d.size(), u64::MAX);

        let outer = dir("outer").with(d).with(file("c", u64::MAX));
        assert_eq!(outer.size(), u64::MAX);
        assert_eq!(outer.to_string(), format!("outer ({})", u64::MAX));
    }

    #[test]
    fn test_children_keep_insertion_order_and_duplicates() {
        let d = dir("d")
            .with(file("b", 1))
            .with(file("a", 2))
            .with(file("b", 3));

        let names: Vec<_> = d.children().iter().map(Entry::name).collect();
        assert_eq!(names, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_entry_delegates_to_variant() {
        let e: Entry = dir("x").with(file("y", 7)).into();
        assert!(e.is_dir());
        assert_eq!(e.name(), "x");
        assert_eq!(e.size(), 7);
        assert_eq!(e.to_string(), "x (7)");

        let e: Entry = file("y", 7).into();
        assert!(!e.is_dir());
        assert_eq!(e.to_string(), "y (7)");
    }
}
