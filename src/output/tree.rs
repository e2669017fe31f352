//! Box-drawing tree renderer
//!
//! `TreeVisitor` draws the familiar `tree`-style view with connectors and
//! colored names. It walks the children itself, which lets it stop at
//! `max_depth`: a directory at the limit is drawn, its children are not.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::entry::{Directory, File};
use crate::visitor::Visitor;

use super::config::OutputConfig;
use super::utils::{connector, continuation_prefix};

pub struct TreeVisitor<W> {
    writer: W,
    config: OutputConfig,
    prefix: String,
    depth: usize,
    is_last: bool,
    dir_count: usize,
    file_count: usize,
}

impl<W: WriteColor> TreeVisitor<W> {
    pub fn new(writer: W, config: OutputConfig) -> Self {
        Self {
            writer,
            config,
            prefix: String::new(),
            depth: 0,
            is_last: true,
            dir_count: 0,
            file_count: 0,
        }
    }

    /// Directories drawn below the start entry.
    pub fn dir_count(&self) -> usize {
        self.dir_count
    }

    pub fn file_count(&self) -> usize {
        self.file_count
    }

    /// Write the trailing summary line.
    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} directories, {} files",
            self.dir_count, self.file_count
        )?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_branch(&mut self) -> io::Result<()> {
        if self.depth > 0 {
            write!(self.writer, "{}{}", self.prefix, connector(self.is_last))?;
        }
        Ok(())
    }

    fn write_name(&mut self, name: &str, spec: &ColorSpec) -> io::Result<()> {
        self.writer.set_color(spec)?;
        write!(self.writer, "{}", name)?;
        self.writer.reset()
    }

    fn write_size(&mut self, size: u64) -> io::Result<()> {
        write!(self.writer, "  ")?;
        self.writer
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(self.writer, "[{}]", self.config.size_label(size))?;
        self.writer.reset()?;
        writeln!(self.writer)
    }

    fn at_max_depth(&self) -> bool {
        self.config.max_depth.is_some_and(|max| self.depth >= max)
    }
}

impl TreeVisitor<StandardStream> {
    pub fn stdout(config: OutputConfig) -> Self {
        // Terminal detection already happened when `use_color` was decided
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice), config)
    }
}

impl<'a, W: WriteColor> Visitor<'a> for TreeVisitor<W> {
    type Error = io::Error;

    fn visit_file(&mut self, file: &'a File) -> io::Result<()> {
        self.file_count += 1;
        self.write_branch()?;
        self.write_name(file.name(), ColorSpec::new().set_fg(Some(Color::White)))?;
        self.write_size(file.size())
    }

    fn visit_directory(&mut self, dir: &'a Directory) -> io::Result<()> {
        if self.depth > 0 {
            self.dir_count += 1;
        }
        self.write_branch()?;
        self.write_name(
            dir.name(),
            ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true),
        )?;
        self.write_size(dir.size())?;

        if self.at_max_depth() {
            return Ok(());
        }

        let child_prefix = if self.depth > 0 {
            continuation_prefix(&self.prefix, self.is_last)
        } else {
            String::new()
        };
        let saved_prefix = std::mem::replace(&mut self.prefix, child_prefix);
        let saved_last = self.is_last;
        self.depth += 1;

        let count = dir.children().len();
        let mut result = Ok(());
        for (i, child) in dir.children().iter().enumerate() {
            self.is_last = i + 1 == count;
            result = child.accept(self);
            if result.is_err() {
                break;
            }
        }

        self.depth -= 1;
        self.is_last = saved_last;
        self.prefix = saved_prefix;
        result
    }
}

#[cfg(test)]
mod tests {
    use termcolor::{Ansi, NoColor};

    use super::*;
    use crate::entry::Entry;
    use crate::sample::sample_tree;

    fn render(entry: &Entry, config: OutputConfig) -> String {
        let mut v = TreeVisitor::new(NoColor::new(Vec::new()), config);
        entry.accept(&mut v).unwrap();
        v.finish().unwrap();
        String::from_utf8(v.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_sample_tree() {
        let root: Entry = sample_tree().into();
        let expected = "\
root  [31500]
├── bin  [30000]
│   ├── vi  [10000]
│   └── latex  [20000]
├── tmp  [0]
└── usr  [1500]
    ├── yuki  [300]
    │   ├── diary.html  [100]
    │   └── Composite.java  [200]
    ├── hanako  [300]
    │   └── memo.tex  [300]
    └── tomura  [900]
        ├── game.doc  [400]
        └── junk.mail  [500]

6 directories, 7 files
";
        assert_eq!(render(&root, OutputConfig::default()), expected);
    }

    #[test]
    fn test_max_depth_prunes_children() {
        let root: Entry = sample_tree().into();
        let config = OutputConfig {
            max_depth: Some(1),
            ..Default::default()
        };
        let expected = "\
root  [31500]
├── bin  [30000]
├── tmp  [0]
└── usr  [1500]

3 directories, 0 files
";
        assert_eq!(render(&root, config), expected);
    }

    #[test]
    fn test_max_depth_zero_draws_start_only() {
        let root: Entry = sample_tree().into();
        let config = OutputConfig {
            max_depth: Some(0),
            ..Default::default()
        };
        assert_eq!(render(&root, config), "root  [31500]\n\n0 directories, 0 files\n");
    }

    #[test]
    fn test_human_sizes() {
        let root: Entry = sample_tree().into();
        let config = OutputConfig {
            human_sizes: true,
            max_depth: Some(1),
            ..Default::default()
        };
        let out = render(&root, config);
        assert!(out.starts_with("root  [30.8K]\n"), "{}", out);
        assert!(out.contains("├── tmp  [0B]"), "{}", out);
    }

    #[test]
    fn test_single_file_start() {
        let f: Entry = File::new("vi", 10000).unwrap().into();
        assert_eq!(
            render(&f, OutputConfig::default()),
            "vi  [10000]\n\n0 directories, 1 files\n"
        );
    }

    #[test]
    fn test_colors_emitted_for_ansi_sink() {
        let root: Entry = sample_tree().into();
        let mut v = TreeVisitor::new(Ansi::new(Vec::new()), OutputConfig::default());
        root.accept(&mut v).unwrap();
        let out = String::from_utf8(v.into_inner().into_inner()).unwrap();
        assert!(out.contains("\x1b["), "expected ANSI escapes: {:?}", out);
    }

    #[test]
    fn test_state_restored_between_traversals() {
        let root: Entry = sample_tree().into();
        let mut v = TreeVisitor::new(NoColor::new(Vec::new()), OutputConfig::default());
        root.accept(&mut v).unwrap();
        assert_eq!(v.depth, 0);
        assert!(v.prefix.is_empty());
        assert!(v.is_last);
    }
}
