//! JSON output formatting

use std::convert::Infallible;
use std::io;

use serde::Serialize;

use crate::entry::{Directory, Entry, File};
use crate::visitor::{Visitor, visit_children};

/// Serializable snapshot of an entry tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonNode {
    File {
        name: String,
        size: u64,
    },
    Directory {
        name: String,
        size: u64,
        children: Vec<JsonNode>,
    },
}

impl JsonNode {
    pub fn name(&self) -> &str {
        match self {
            JsonNode::File { name, .. } => name,
            JsonNode::Directory { name, .. } => name,
        }
    }

    fn push_child(&mut self, child: JsonNode) {
        if let JsonNode::Directory { children, .. } = self {
            children.push(child);
        }
    }
}

/// Builds a [`JsonNode`] tree.
///
/// Directories being visited sit on an explicit stack; when a directory's
/// children are done it is popped and attached to its parent.
#[derive(Debug, Default)]
pub struct JsonVisitor {
    stack: Vec<JsonNode>,
    root: Option<JsonNode>,
}

impl JsonVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished tree, or `None` if nothing was visited.
    pub fn into_node(self) -> Option<JsonNode> {
        self.root
    }

    fn emit(&mut self, node: JsonNode) {
        match self.stack.last_mut() {
            Some(parent) => parent.push_child(node),
            None => self.root = Some(node),
        }
    }
}

impl<'a> Visitor<'a> for JsonVisitor {
    type Error = Infallible;

    fn visit_file(&mut self, file: &'a File) -> Result<(), Infallible> {
        self.emit(JsonNode::File {
            name: file.name().to_string(),
            size: file.size(),
        });
        Ok(())
    }

    fn visit_directory(&mut self, dir: &'a Directory) -> Result<(), Infallible> {
        self.stack.push(JsonNode::Directory {
            name: dir.name().to_string(),
            size: dir.size(),
            children: Vec::with_capacity(dir.children().len()),
        });
        visit_children(dir, self)?;
        if let Some(node) = self.stack.pop() {
            self.emit(node);
        }
        Ok(())
    }
}

/// Convert an entry tree into its serializable form.
pub fn to_json_node(entry: &Entry) -> JsonNode {
    let mut visitor = JsonVisitor::new();
    let Ok(()) = entry.accept(&mut visitor);
    match visitor.into_node() {
        Some(node) => node,
        // A visit always emits exactly one root.
        None => unreachable!("json visitor produced no root"),
    }
}

/// Print an entry tree as pretty-printed JSON to stdout.
pub fn print_json(entry: &Entry) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&to_json_node(entry)).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
