//! Name search over files

use std::convert::Infallible;

use regex::Regex;

use super::{Visitor, visit_children};
use crate::entry::{Directory, File};
use crate::error::{Error, Result};

enum Matcher {
    /// Regular expression anchored at the end of the name only.
    Regex(Regex),
    /// Plain `ends_with` comparison.
    Suffix(String),
}

impl Matcher {
    fn is_match(&self, name: &str) -> bool {
        match self {
            Matcher::Regex(re) => re.is_match(name),
            Matcher::Suffix(suffix) => name.ends_with(suffix.as_str()),
        }
    }
}

/// Collects every file whose name matches a pattern.
///
/// Directories are never collected and never pruned: the whole tree below
/// the starting entry is scanned. Results are in pre-order discovery order
/// and borrow from the visited tree.
pub struct FileFindVisitor<'a> {
    matcher: Matcher,
    found: Vec<&'a File>,
}

impl<'a> FileFindVisitor<'a> {
    /// Match names against `pattern` as a regular expression anchored at the
    /// end, so `".html"` matches `diary.html` but not `page.html.bak`.
    ///
    /// The start is unanchored; `.` keeps its regex meaning. The pattern is
    /// validated on its own before being wrapped, so it cannot close the
    /// anchoring group early.
    pub fn new(pattern: &str) -> Result<Self> {
        let compile = |source: &str| {
            Regex::new(source).map_err(|source| Error::Pattern {
                pattern: pattern.to_string(),
                source,
            })
        };
        compile(pattern)?;
        let re = compile(&format!("(?:{})$", pattern))?;
        Ok(Self::with_matcher(Matcher::Regex(re)))
    }

    /// Match names that literally end with `suffix`.
    pub fn literal(suffix: impl Into<String>) -> Self {
        Self::with_matcher(Matcher::Suffix(suffix.into()))
    }

    fn with_matcher(matcher: Matcher) -> Self {
        Self {
            matcher,
            found: Vec::new(),
        }
    }

    /// Files matched so far. Only meaningful once a traversal has completed.
    pub fn found_files(&self) -> &[&'a File] {
        &self.found
    }

    pub fn into_found_files(self) -> Vec<&'a File> {
        self.found
    }
}

impl<'a> Visitor<'a> for FileFindVisitor<'a> {
    type Error = Infallible;

    fn visit_file(&mut self, file: &'a File) -> std::result::Result<(), Infallible> {
        if self.matcher.is_match(file.name()) {
            self.found.push(file);
        }
        Ok(())
    }

    fn visit_directory(&mut self, dir: &'a Directory) -> std::result::Result<(), Infallible> {
        visit_children(dir, self)
    }
}
