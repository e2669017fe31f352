//! Built-in demonstration tree

use crate::entry::{Directory, File};

/// The demonstration hierarchy:
///
/// ```text
/// root
/// ├── bin
/// │   ├── vi (10000)
/// │   └── latex (20000)
/// ├── tmp
/// └── usr
///     ├── yuki
///     │   ├── diary.html (100)
///     │   └── Composite.java (200)
///     ├── hanako
///     │   └── memo.tex (300)
///     └── tomura
///         ├── game.doc (400)
///         └── junk.mail (500)
/// ```
pub fn sample_tree() -> Directory {
    let bin = dir("bin").with(file("vi", 10000)).with(file("latex", 20000));

    let yuki = dir("yuki")
        .with(file("diary.html", 100))
        .with(file("Composite.java", 200));
    let hanako = dir("hanako").with(file("memo.tex", 300));
    let tomura = dir("tomura")
        .with(file("game.doc", 400))
        .with(file("junk.mail", 500));
    let usr = dir("usr").with(yuki).with(hanako).with(tomura);

    dir("root").with(bin).with(dir("tmp")).with(usr)
}

// Names below are non-empty literals, so construction cannot fail.
fn dir(name: &'static str) -> Directory {
    Directory::new(name).unwrap_or_else(|_| unreachable!("literal directory name"))
}

fn file(name: &'static str, size: u64) -> File {
    File::new(name, size).unwrap_or_else(|_| unreachable!("literal file name"))
}
