//! Entry counting

use std::convert::Infallible;

use super::{Visitor, visit_children};
use crate::entry::{Directory, File};

/// Counts the files and directories below (and including) the start entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountVisitor {
    files: usize,
    directories: usize,
}

impl CountVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> usize {
        self.files
    }

    pub fn directories(&self) -> usize {
        self.directories
    }
}

impl<'a> Visitor<'a> for CountVisitor {
    type Error = Infallible;

    fn visit_file(&mut self, _file: &'a File) -> Result<(), Infallible> {
        self.files += 1;
        Ok(())
    }

    fn visit_directory(&mut self, dir: &'a Directory) -> Result<(), Infallible> {
        self.directories += 1;
        visit_children(dir, self)
    }
}
