//! Filesystem Accessor
//!
//! Read-only walks over the [`NodeTree`]: lookup by location, directory
//! listings, reserved sections and per-node hints.

use serde::Serialize;
use tracing::trace;

use super::node::{Node, NodeTree};
use super::path::Location;

/// Entry kind as reported in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Directory,
    File,
}

/// One row of a directory listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
    pub description: Option<String>,
    pub preview: Option<String>,
}

impl DirEntry {
    fn from_node(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            kind: if node.is_directory() {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
            description: node.description.clone(),
            preview: node.preview.clone(),
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Get display name with icon
    pub fn display_name(&self) -> String {
        let icon = if self.is_directory() { "📁" } else { "📄" };
        let suffix = if self.is_directory() { "/" } else { "" };
        format!("{} {}{}", icon, self.name, suffix)
    }
}

/// Result of listing a location
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Entries(Vec<DirEntry>),
    NotADirectory,
    NotFound,
}

/// Lookup façade over a validated tree
#[derive(Debug, Clone)]
pub struct FileSystem {
    tree: NodeTree,
}

impl FileSystem {
    pub fn new(tree: NodeTree) -> Self {
        Self { tree }
    }

    pub fn root(&self) -> &Node {
        self.tree.root()
    }

    /// Walk from the root one segment at a time
    pub fn lookup(&self, location: &Location) -> Option<&Node> {
        let mut current = self.tree.root();
        for segment in location.segments() {
            if !current.is_directory() {
                trace!(%location, segment = %segment, "lookup stopped at a file");
                return None;
            }
            current = current.child(segment)?;
        }
        Some(current)
    }

    pub fn is_directory(&self, location: &Location) -> bool {
        self.lookup(location).is_some_and(Node::is_directory)
    }

    pub fn is_file(&self, location: &Location) -> bool {
        self.lookup(location).is_some_and(Node::is_file)
    }

    pub fn listing(&self, location: &Location) -> Listing {
        match self.lookup(location) {
            Some(node) if node.is_directory() => {
                Listing::Entries(node.children().iter().map(DirEntry::from_node).collect())
            }
            Some(_) => Listing::NotADirectory,
            None => Listing::NotFound,
        }
    }

    /// Reserved section names: the root's directory children, in order
    pub fn sections(&self) -> Vec<&str> {
        self.tree
            .root()
            .children()
            .iter()
            .filter(|child| child.is_directory())
            .map(|child| child.name.as_str())
            .collect()
    }

    /// Section named `word`, ignoring case. An exact match wins over a
    /// case-folded one; the tree's own spelling is returned.
    pub fn find_section(&self, word: &str) -> Option<&str> {
        let sections = self.sections();
        sections
            .iter()
            .find(|name| **name == word)
            .or_else(|| sections.iter().find(|name| name.eq_ignore_ascii_case(word)))
            .copied()
    }

    /// Description hint for a location, if the node has one
    pub fn describe(&self, location: &Location) -> Option<&str> {
        self.lookup(location)?.description.as_deref()
    }
}
