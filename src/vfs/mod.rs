//! Virtual Filesystem Module
//!
//! The static content tree visitors walk around in.
//!
//! - `node` - Node tree and validation
//! - `path` - Locations and syntactic path resolution
//! - `accessor` - Lookups, listings and reserved sections
//! - `portfolio` - Built-in sample content

pub mod accessor;
pub mod node;
pub mod path;
pub mod portfolio;

pub use accessor::{DirEntry, EntryKind, FileSystem, Listing};
pub use node::{Content, Node, NodeKind, NodeTree};
pub use path::{path_to_string, resolve, Location};
pub use portfolio::sample_tree;
