//! CLI entry point for arbor

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use arbor::{
    CountVisitor, Entry, FileFindVisitor, ListVisitor, OutputConfig, ScanConfig, Scanner,
    TreeVisitor, format_size, print_json, sample_tree,
};
use clap::{ArgGroup, Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Show sizes, listings and name searches over a directory tree")]
#[command(version)]
#[command(group(ArgGroup::new("mode").args(["list", "find", "json", "summary"])))]
struct Args {
    /// Directory or file to scan
    #[arg(default_value = ".", conflicts_with = "sample")]
    path: PathBuf,

    /// Use the built-in demonstration tree instead of scanning a path
    #[arg(long = "sample")]
    sample: bool,

    /// Draw only N levels of the tree view (sizes still cover every level)
    #[arg(short = 'L', long = "level", conflicts_with = "mode")]
    level: Option<usize>,

    /// Include hidden files and directories
    #[arg(short, long)]
    all: bool,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print sizes in human-readable form (1.5K, 2.0M)
    #[arg(short = 'H', long = "human")]
    human: bool,

    /// Print one "<path>/<name> (<size>)" line per entry
    #[arg(long = "list")]
    list: bool,

    /// Print files whose name ends with PATTERN (a regular expression)
    #[arg(long = "find", value_name = "PATTERN")]
    find: Option<String>,

    /// Treat the --find pattern as a literal suffix
    #[arg(short = 'F', long = "fixed-strings", requires = "find")]
    fixed_strings: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Print directory and file counts with the total size
    #[arg(long = "summary")]
    summary: bool,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    init_logging();
    let args = Args::parse();

    let root = if args.sample {
        Entry::from(sample_tree())
    } else {
        let scan_config = ScanConfig {
            show_hidden: args.all,
            ignore_patterns: args.ignore.clone(),
        };
        match Scanner::new(scan_config).scan(&args.path) {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("arbor: {}", e);
                process::exit(1);
            }
        }
    };

    let result = if args.list {
        print_list(&root)
    } else if let Some(ref pattern) = args.find {
        print_matches(&root, pattern, args.fixed_strings)
    } else if args.json {
        print_json(&root)
    } else if args.summary {
        print_summary(&root, args.human)
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            human_sizes: args.human,
            max_depth: args.level,
        };
        print_tree(&root, output_config)
    };

    if let Err(e) = result {
        eprintln!("arbor: error writing output: {}", e);
        process::exit(1);
    }
}

fn print_list(root: &Entry) -> io::Result<()> {
    let mut visitor = ListVisitor::new(io::stdout().lock());
    root.accept(&mut visitor)?;
    visitor.into_inner().flush()
}

fn print_matches(root: &Entry, pattern: &str, literal: bool) -> io::Result<()> {
    let mut visitor = if literal {
        FileFindVisitor::literal(pattern)
    } else {
        FileFindVisitor::new(pattern).unwrap_or_else(|e| {
            eprintln!("arbor: {}", e);
            process::exit(1);
        })
    };
    let Ok(()) = root.accept(&mut visitor);

    let mut stdout = io::stdout().lock();
    for file in visitor.found_files() {
        writeln!(stdout, "{}", file)?;
    }
    stdout.flush()
}

fn print_summary(root: &Entry, human: bool) -> io::Result<()> {
    let mut counts = CountVisitor::new();
    let Ok(()) = root.accept(&mut counts);

    let size = root.size();
    let size = if human {
        format_size(size)
    } else {
        size.to_string()
    };
    // The start directory itself is not counted, matching the tree view
    let directories = counts.directories() - usize::from(root.is_dir());
    println!(
        "{} directories, {} files, {} total",
        directories,
        counts.files(),
        size
    );
    Ok(())
}

fn print_tree(root: &Entry, config: OutputConfig) -> io::Result<()> {
    let mut visitor = TreeVisitor::stdout(config);
    root.accept(&mut visitor)?;
    visitor.finish()
}
