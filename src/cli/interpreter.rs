//! Command Interpreter
//!
//! Owns the session state (current location, history, output log) and turns
//! submitted lines into output records and host requests. User mistakes never
//! escape as errors: every handler failure becomes one diagnostic record and
//! leaves the location untouched.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::bridge::HostRequest;
use super::commands::{CommandParser, ParsedLine, Verb};
use super::config::CliConfig;
use super::history::CommandHistory;
use super::output::{OutputLog, OutputRecord, Payload};
use super::suggest::SuggestionEngine;
use crate::error::ShellError;
use crate::vfs::{path_to_string, FileSystem, Listing, Location, NodeKind};

/// Everything a single submit produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOutcome {
    /// Records appended by this submit that are still in the log
    pub records: Vec<OutputRecord>,
    pub requests: Vec<HostRequest>,
}

impl CommandOutcome {
    pub fn has_diagnostic(&self) -> bool {
        self.records.iter().any(|r| r.payload.is_diagnostic())
    }
}

/// The interactive shell session
#[derive(Debug, Clone)]
pub struct Interpreter {
    fs: FileSystem,
    config: CliConfig,
    suggestions: SuggestionEngine,
    location: Location,
    history: CommandHistory,
    log: OutputLog,
}

impl Interpreter {
    pub fn new(fs: FileSystem) -> Self {
        Self::with_config(fs, CliConfig::default())
    }

    pub fn with_config(fs: FileSystem, config: CliConfig) -> Self {
        Self {
            fs,
            suggestions: SuggestionEngine::new(config.max_suggestions),
            config,
            location: Location::root(),
            history: CommandHistory::new(),
            log: OutputLog::new(),
        }
    }

    pub fn current_location(&self) -> &Location {
        &self.location
    }

    /// Current location as shown in the prompt
    pub fn prompt(&self) -> String {
        path_to_string(&self.location)
    }

    pub fn output(&self) -> &[OutputRecord] {
        self.log.records()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn filesystem(&self) -> &FileSystem {
        &self.fs
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    pub fn recall_previous(&mut self) -> Option<&str> {
        self.history.previous()
    }

    /// `None` means back to an empty, freshly typed line
    pub fn recall_next(&mut self) -> Option<&str> {
        self.history.next()
    }

    pub fn suggest(&self, partial: &str) -> Vec<String> {
        self.suggestions.suggest(&self.fs, &self.location, partial)
    }

    /// Curated shortcuts for the section the visitor is in
    pub fn quick_commands(&self) -> Vec<String> {
        self.config.quick_commands_for(self.location.section())
    }

    /// Run one input line
    pub fn submit(&mut self, input: &str) -> CommandOutcome {
        let mark = self.log.last_id();
        let line = input.trim();
        let prompt = self.prompt();
        self.log.push(Payload::Echo {
            prompt,
            input: input.to_string(),
        });

        let mut requests = Vec::new();
        if let Some(parsed) = CommandParser::parse_command_line(line) {
            self.history.add_command(line);
            debug!(verb = parsed.verb, args = parsed.args, "dispatching");

            match self.dispatch(&parsed, line, &mut requests) {
                Ok(payloads) => {
                    for payload in payloads {
                        self.log.push(payload);
                    }
                }
                Err(err) => {
                    warn!(%err, "command failed");
                    self.log.push(Payload::Diagnostic {
                        kind: err.kind(),
                        message: err.to_string(),
                    });
                }
            }
        }

        CommandOutcome {
            records: self.log.since(mark).to_vec(),
            requests,
        }
    }

    fn dispatch(
        &mut self,
        line: &ParsedLine<'_>,
        raw: &str,
        requests: &mut Vec<HostRequest>,
    ) -> Result<Vec<Payload>, ShellError> {
        match Verb::from_str(line.verb) {
            Some(Verb::Help) => Ok(vec![Payload::Lines(Verb::get_command_menu(
                &self.fs.sections(),
            ))]),
            Some(Verb::Clear) => {
                self.log.clear();
                requests.push(HostRequest::ClearPanel);
                Ok(Vec::new())
            }
            Some(Verb::Pwd) => Ok(vec![Payload::Text(self.prompt())]),
            Some(Verb::Ls) => self.list(line.args),
            Some(Verb::Cd) => self.change_directory(line.args, requests),
            Some(verb @ (Verb::Cat | Verb::Open)) => self.read_file(verb, line.args, requests),
            Some(Verb::History) if line.has_args() => {
                let matches = self.history.search(line.args);
                Ok(vec![Payload::Lines(
                    matches.into_iter().map(str::to_string).collect(),
                )])
            }
            Some(Verb::History) => Ok(vec![Payload::Lines(self.history.get_summary())]),
            None => self.open_section(line.verb, raw, requests),
        }
    }

    fn list(&self, args: &str) -> Result<Vec<Payload>, ShellError> {
        let target = self.location.resolve(args);
        match self.fs.listing(&target) {
            Listing::Entries(entries) => Ok(vec![Payload::Listing {
                path: path_to_string(&target),
                entries,
                enriched: false,
            }]),
            Listing::NotADirectory => {
                Ok(vec![Payload::Text(format!("ls: {}: not a directory", args))])
            }
            Listing::NotFound => Err(ShellError::NoSuchDirectory {
                verb: "ls".to_string(),
                path: args.to_string(),
            }),
        }
    }

    fn change_directory(
        &mut self,
        args: &str,
        requests: &mut Vec<HostRequest>,
    ) -> Result<Vec<Payload>, ShellError> {
        let target = if args.is_empty() {
            Location::root()
        } else {
            self.location.resolve(args)
        };

        if !target.is_root() && !self.fs.is_directory(&target) {
            return Err(ShellError::NoSuchDirectory {
                verb: "cd".to_string(),
                path: args.to_string(),
            });
        }

        self.location = target;
        info!(location = %self.location, "changed directory");

        if self.location.depth() == 1 {
            if let Some(section) = self.location.section() {
                requests.push(HostRequest::SwitchPanel {
                    section: section.to_string(),
                    delay: self.config.navigation_delay(),
                });
            }
        }

        Ok(vec![Payload::Text(format!(
            "Changed directory to {}",
            self.prompt()
        ))])
    }

    fn read_file(
        &self,
        verb: Verb,
        args: &str,
        requests: &mut Vec<HostRequest>,
    ) -> Result<Vec<Payload>, ShellError> {
        if args.is_empty() {
            return Err(ShellError::MissingFileArgument(verb.to_string()));
        }

        let target = self.location.resolve(args);
        let no_such_file = || ShellError::NoSuchFile {
            verb: verb.to_string(),
            path: args.to_string(),
        };
        let node = self.fs.lookup(&target).ok_or_else(no_such_file)?;
        let NodeKind::File {
            content,
            external_link,
        } = &node.kind
        else {
            return Err(no_such_file());
        };

        if verb == Verb::Open {
            if let Some(uri) = external_link {
                requests.push(HostRequest::OpenExternal { uri: uri.clone() });
                return Ok(vec![Payload::Text(format!("Opening {} ...", uri))]);
            }
        }

        Ok(vec![Payload::Content {
            name: node.name.clone(),
            content: content.clone(),
        }])
    }

    /// Bare section names (`projects`, `skills`, ...) jump straight to that
    /// section and show an overview
    fn open_section(
        &mut self,
        verb: &str,
        raw: &str,
        requests: &mut Vec<HostRequest>,
    ) -> Result<Vec<Payload>, ShellError> {
        let Some(name) = self.fs.find_section(verb).map(str::to_string) else {
            return Err(ShellError::CommandNotFound(raw.to_string()));
        };

        let target = Location::root().join(name.as_str());
        let Listing::Entries(entries) = self.fs.listing(&target) else {
            return Err(ShellError::CommandNotFound(raw.to_string()));
        };

        self.location = target;
        info!(section = %name, "opened section");
        requests.push(HostRequest::SwitchPanel {
            section: name,
            delay: Duration::ZERO,
        });

        let mut payloads = Vec::new();
        if let Some(description) = self.fs.describe(&self.location) {
            payloads.push(Payload::Text(description.to_string()));
        }
        payloads.push(Payload::Listing {
            path: self.prompt(),
            entries,
            enriched: true,
        });
        Ok(payloads)
    }
}
