//! CLI Terminal Interface Module
//!
//! The shell a visitor types into: parsing, dispatch, history, suggestions
//! and the output log, plus a terminal host that drives it.
//!
//! ## Module Structure
//!
//! - `commands` - Verb table and line parsing
//! - `interpreter` - Command dispatch over the virtual filesystem
//! - `history` - Append-only command history with recall
//! - `suggest` - Completion candidates and the Tab cycle
//! - `output` - Output records handed to the renderer
//! - `bridge` - Host requests (open link, switch panel, clear)
//! - `config` - Shell configuration
//! - `render` - Plain-terminal rendering of output records
//! - `utils` - Text layout helpers
//! - `prompter` - Interactive terminal loop

pub mod bridge;
pub mod commands;
pub mod config;
pub mod history;
pub mod interpreter;
pub mod output;
pub mod prompter;
pub mod render;
pub mod suggest;
pub mod utils;

// Re-export main types for convenience
pub use bridge::{HostRequest, PanelEvent, RequestDispatcher};
pub use commands::{CommandParser, ParsedLine, Verb};
pub use config::CliConfig;
pub use history::CommandHistory;
pub use interpreter::{CommandOutcome, Interpreter};
pub use output::{OutputLog, OutputRecord, Payload};
pub use prompter::CliPrompter;
pub use suggest::{SuggestionCycle, SuggestionEngine};
