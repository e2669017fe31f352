//! Path-annotated pre-order listing

use std::io::{self, Write};

use super::{Visitor, visit_children};
use crate::entry::{Directory, File};

/// Writes one line per entry, `"<path>/<name> (<size>)"`, in pre-order.
///
/// A directory's line comes before its descendants, and children are listed
/// in insertion order. The current path is extended while a directory's
/// children are visited and cut back afterwards, including when the sink
/// fails, so the visitor can be reused for another traversal.
pub struct ListVisitor<W> {
    writer: W,
    current_path: String,
}

impl<W: Write> ListVisitor<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_path: String::new(),
        }
    }

    /// Path prefix applied to the next line written.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ListVisitor<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<'a, W: Write> Visitor<'a> for ListVisitor<W> {
    type Error = io::Error;

    fn visit_file(&mut self, file: &'a File) -> io::Result<()> {
        writeln!(self.writer, "{}/{}", self.current_path, file)
    }

    fn visit_directory(&mut self, dir: &'a Directory) -> io::Result<()> {
        writeln!(self.writer, "{}/{}", self.current_path, dir)?;

        let saved_len = self.current_path.len();
        self.current_path.push('/');
        self.current_path.push_str(dir.name());
        let result = visit_children(dir, self);
        self.current_path.truncate(saved_len);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    use crate::sample::sample_tree;

    fn render(entry: &Entry) -> String {
        let mut v = ListVisitor::new(Vec::new());
        entry.accept(&mut v).unwrap();
        assert_eq!(v.current_path(), "");
        String::from_utf8(v.into_inner()).unwrap()
    }

    /// Accepts `limit` writes, then fails every write after that.
    struct FailAfter {
        limit: usize,
        writes: usize,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.writes >= self.limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.writes += 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_single_file() {
        let vi: Entry = File::new("vi", 10000).unwrap().into();
        assert_eq!(render(&vi), "/vi (10000)\n");
    }

    #[test]
    fn test_empty_directory() {
        let tmp: Entry = Directory::new("tmp").unwrap().into();
        assert_eq!(render(&tmp), "/tmp (0)\n");
    }

    #[test]
    fn test_sample_tree_listing() {
        let root: Entry = sample_tree().into();
        let expected = "\
/root (31500)
/root/bin (30000)
/root/bin/vi (10000)
/root/bin/latex (20000)
/root/tmp (0)
/root/usr (1500)
/root/usr/yuki (300)
/root/usr/yuki/diary.html (100)
/root/usr/yuki/Composite.java (200)
/root/usr/hanako (300)
/root/usr/hanako/memo.tex (300)
/root/usr/tomura (900)
/root/usr/tomura/game.doc (400)
/root/usr/tomura/junk.mail (500)
";
        assert_eq!(render(&root), expected);
    }

    #[test]
    fn test_sibling_subtrees_see_unextended_prefix() {
        let a = Directory::new("a")
            .unwrap()
            .with(Directory::new("b").unwrap().with(File::new("c", 1).unwrap()));
        let root: Entry = Directory::new("r")
            .unwrap()
            .with(a)
            .with(File::new("d", 2).unwrap())
            .into();

        let out = render(&root);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines, vec!["/r (3)", "/r/a (1)", "/r/a/b (1)", "/r/a/b/c (1)", "/r/d (2)"]);
    }

    #[test]
    fn test_visitor_reusable_across_traversals() {
        let root: Entry = sample_tree().into();
        let vi: Entry = File::new("vi", 10000).unwrap().into();

        let mut v = ListVisitor::new(Vec::new());
        root.accept(&mut v).unwrap();
        vi.accept(&mut v).unwrap();

        let out = String::from_utf8(v.into_inner()).unwrap();
        assert_eq!(out.lines().last(), Some("/vi (10000)"));
    }

    #[test]
    fn test_path_restored_when_sink_fails() {
        let root: Entry = sample_tree().into();
        let mut v = ListVisitor::new(FailAfter { limit: 40, writes: 0 });

        let err = root.accept(&mut v).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(v.current_path(), "");
    }
}
