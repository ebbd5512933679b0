//! folio - a portfolio site presented as a shell
//!
//! Visitors browse a static tree of content with familiar commands (`ls`,
//! `cd`, `cat`, `open`). The interpreter never touches a real filesystem and
//! never performs side effects itself: it returns output records for a
//! renderer and host requests for whatever embeds it.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use folio::cli::Interpreter;
//! use folio::vfs::{sample_tree, FileSystem};
//!
//! let tree = sample_tree().expect("built-in content is valid");
//! let mut shell = Interpreter::new(FileSystem::new(tree));
//!
//! let outcome = shell.submit("cd projects");
//! assert_eq!(shell.prompt(), "/projects");
//! assert!(!outcome.has_diagnostic());
//! ```
//!
//! # Commands
//!
//! 1. **help** - List commands and section shortcuts
//! 2. **clear** - Empty the output log
//! 3. **pwd** - Print the current location
//! 4. **ls** / **dir** - List a directory
//! 5. **cd** - Change directory
//! 6. **cat** - Show a file
//! 7. **open** - Follow a file's external link, or show it
//! 8. **history** - Show submitted commands
//!
//! Typing a top-level section name (`projects`, `skills`, `contact`) jumps
//! straight to its overview.

pub mod cli;
pub mod error;
pub mod logging;
pub mod vfs;

// Re-export commonly used types for convenience
pub use cli::{CliConfig, CommandOutcome, HostRequest, Interpreter, OutputRecord, Payload};
pub use error::{ConfigError, DiagnosticKind, ShellError, TreeError};
pub use vfs::{FileSystem, Location, Node, NodeTree};
