//! Node Tree
//!
//! Static directory/file tree that backs the virtual filesystem. The tree is
//! validated once in [`NodeTree::new`] and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::TreeError;

/// Body of a file node. The core forwards it to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Rich(serde_json::Value),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<serde_json::Value> for Content {
    fn from(value: serde_json::Value) -> Self {
        Content::Rich(value)
    }
}

/// Directory or file variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    Directory {
        #[serde(default)]
        children: Vec<Node>,
    },
    File {
        content: Content,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        external_link: Option<String>,
    },
}

/// One entry of the virtual filesystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Node {
    pub fn directory(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory { children },
            preview: None,
            description: None,
        }
    }

    pub fn file(name: impl Into<String>, content: impl Into<Content>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File {
                content: content.into(),
                external_link: None,
            },
            preview: None,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }

    /// Attach an external link. Ignored on directories.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        if let NodeKind::File { external_link, .. } = &mut self.kind {
            *external_link = Some(link.into());
        }
        self
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// Children in declaration order; empty for files
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Directory { children } => children,
            NodeKind::File { .. } => &[],
        }
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|child| child.name == name)
    }

    pub fn content(&self) -> Option<&Content> {
        match &self.kind {
            NodeKind::File { content, .. } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    pub fn external_link(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { external_link, .. } => external_link.as_deref(),
            NodeKind::Directory { .. } => None,
        }
    }
}

/// Validated, immutable tree rooted at a directory
#[derive(Debug, Clone)]
pub struct NodeTree {
    root: Node,
}

impl NodeTree {
    /// Validate and freeze a tree
    pub fn new(root: Node) -> Result<Self, TreeError> {
        if !root.is_directory() {
            return Err(TreeError::RootNotDirectory(root.name));
        }
        validate_children(&root, "~")?;
        Ok(Self { root })
    }

    /// Build a tree from its JSON description
    pub fn from_json(json: &str) -> Result<Self, crate::error::ConfigError> {
        let root: Node = serde_json::from_str(json)?;
        Ok(Self::new(root)?)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}

fn validate_children(dir: &Node, dir_path: &str) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    for child in dir.children() {
        if !is_valid_name(&child.name) {
            return Err(TreeError::InvalidName {
                parent: dir_path.to_string(),
                name: child.name.clone(),
            });
        }
        if !seen.insert(child.name.as_str()) {
            return Err(TreeError::DuplicateName {
                parent: dir_path.to_string(),
                name: child.name.clone(),
            });
        }
        if child.is_directory() {
            let child_path = if dir_path == "~" {
                format!("/{}", child.name)
            } else {
                format!("{}/{}", dir_path, child.name)
            };
            validate_children(child, &child_path)?;
        }
    }
    Ok(())
}

// Names the resolver would treat specially can never be reached.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.chars().any(char::is_whitespace)
        && !matches!(name, "." | ".." | "~")
}
