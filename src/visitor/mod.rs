//! Visitor protocol for read-only operations over an entry tree
//!
//! New operations are added by implementing [`Visitor`], without touching
//! [`File`] or [`Directory`]. Calling `accept` on an entry dispatches exactly
//! one level: a file calls [`Visitor::visit_file`], a directory calls
//! [`Visitor::visit_directory`]. Nothing descends into a directory's children
//! automatically; each visitor decides its own walk policy (full scan,
//! pruning at a depth, work before and after the children, ...).
//!
//! - `ListVisitor`: path-annotated pre-order dump
//! - `FileFindVisitor`: collects files whose name matches a pattern
//! - `CountVisitor`: counts files and directories

mod count;
mod find;
mod list;

pub use count::CountVisitor;
pub use find::FileFindVisitor;
pub use list::ListVisitor;

use crate::entry::{Directory, File};

/// Per-variant callbacks invoked through `accept`.
///
/// The lifetime `'a` is that of the visited tree, so a visitor may keep
/// references to the entries it sees (see [`FileFindVisitor`]). Visitors
/// that cannot fail use [`std::convert::Infallible`] as their error type.
pub trait Visitor<'a> {
    type Error;

    fn visit_file(&mut self, file: &'a File) -> Result<(), Self::Error>;

    fn visit_directory(&mut self, dir: &'a Directory) -> Result<(), Self::Error>;
}

/// Accept `visitor` on every child of `dir`, in insertion order.
///
/// Convenience for visitors that recurse unconditionally.
pub fn visit_children<'a, V>(dir: &'a Directory, visitor: &mut V) -> Result<(), V::Error>
where
    V: Visitor<'a> + ?Sized,
{
    for child in dir.children() {
        child.accept(visitor)?;
    }
    Ok(())
}
