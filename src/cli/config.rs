//! CLI Configuration
//!
//! Settings for the interpreter and the terminal host. Everything has a
//! default, so a config file only needs the fields it changes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use crate::vfs::{sample_tree, NodeTree};

/// Configuration for the interpreter and its host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub prompt_symbol: String,
    /// Cap on completion candidates
    pub max_suggestions: usize,
    /// Delay before the panel follows a `cd` into a section
    pub navigation_delay_ms: u64,
    /// Curated quick commands keyed by section; `""` is the root
    pub quick_commands: HashMap<String, Vec<String>>,
    /// JSON content tree; the built-in portfolio when unset
    pub content_path: Option<PathBuf>,
    pub logging: LoggingConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            prompt_symbol: "$".to_string(),
            max_suggestions: 6,
            navigation_delay_ms: 300,
            quick_commands: default_quick_commands(),
            content_path: None,
            logging: LoggingConfig::default(),
        }
    }
}

fn default_quick_commands() -> HashMap<String, Vec<String>> {
    let entries: [(&str, &[&str]); 4] = [
        ("", &["help", "ls", "projects", "skills", "contact"]),
        (
            "projects",
            &["ls", "cat epicwars-cvc", "open epicwars-cvc", "cd ~"],
        ),
        ("skills", &["ls", "cat languages", "cat tools", "cd ~"]),
        ("contact", &["ls", "open email", "open github", "cd ~"]),
    ];
    entries
        .iter()
        .map(|(section, commands)| {
            (
                section.to_string(),
                commands.iter().map(|c| c.to_string()).collect(),
            )
        })
        .collect()
}

const FALLBACK_QUICK_COMMANDS: &[&str] = &["ls", "cd ~", "help"];

impl CliConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Build the content tree this config points at
    pub fn load_tree(&self) -> Result<NodeTree, ConfigError> {
        match &self.content_path {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                NodeTree::from_json(&json)
            }
            None => Ok(sample_tree()?),
        }
    }

    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_delay_ms)
    }

    /// Quick commands for the section the visitor is in
    pub fn quick_commands_for(&self, section: Option<&str>) -> Vec<String> {
        self.quick_commands
            .get(section.unwrap_or(""))
            .cloned()
            .unwrap_or_else(|| {
                FALLBACK_QUICK_COMMANDS
                    .iter()
                    .map(|c| c.to_string())
                    .collect()
            })
    }
}
