//! CLI Commands Module
//!
//! The verb table, its help text and command-line tokenization.

use std::fmt;

/// Built-in verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Help,
    Clear,
    Pwd,
    Ls,
    Cd,
    Cat,
    Open,
    History,
}

/// Every accepted spelling, in declaration order
const VERB_NAMES: &[(&str, Verb)] = &[
    ("help", Verb::Help),
    ("clear", Verb::Clear),
    ("pwd", Verb::Pwd),
    ("ls", Verb::Ls),
    ("dir", Verb::Ls),
    ("cd", Verb::Cd),
    ("cat", Verb::Cat),
    ("open", Verb::Open),
    ("history", Verb::History),
];

impl Verb {
    /// Parse a verb, ignoring case
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        VERB_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, verb)| *verb)
    }

    /// All spellings in declaration order, used for completion
    pub fn names() -> impl Iterator<Item = &'static str> {
        VERB_NAMES.iter().map(|(name, _)| *name)
    }

    pub fn all_verbs() -> Vec<Self> {
        vec![
            Self::Help,
            Self::Clear,
            Self::Pwd,
            Self::Ls,
            Self::Cd,
            Self::Cat,
            Self::Open,
            Self::History,
        ]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Help => "Show available commands",
            Self::Clear => "Clear the terminal",
            Self::Pwd => "Print the current directory",
            Self::Ls => "List the contents of a directory",
            Self::Cd => "Change directory (.. goes up, ~ goes home)",
            Self::Cat => "Show the contents of a file",
            Self::Open => "Open a file's link in a new tab",
            Self::History => "Show previous commands, or those matching a pattern",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Clear => "clear",
            Self::Pwd => "pwd",
            Self::Ls => "ls | dir [path]",
            Self::Cd => "cd [path]",
            Self::Cat => "cat <file>",
            Self::Open => "open <file>",
            Self::History => "history [pattern]",
        }
    }

    /// Formatted help lines, section aliases listed last
    pub fn get_command_menu(sections: &[&str]) -> Vec<String> {
        let width = Self::all_verbs()
            .iter()
            .map(|verb| verb.usage().len())
            .max()
            .unwrap_or(0);

        let mut menu = vec!["Available commands:".to_string()];
        for verb in Self::all_verbs() {
            menu.push(format!(
                "  {:width$}  {}",
                verb.usage(),
                verb.description(),
                width = width
            ));
        }

        if !sections.is_empty() {
            menu.push(String::new());
            menu.push(format!("Shortcuts: {}", sections.join(", ")));
        }

        menu
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Help => "help",
            Self::Clear => "clear",
            Self::Pwd => "pwd",
            Self::Ls => "ls",
            Self::Cd => "cd",
            Self::Cat => "cat",
            Self::Open => "open",
            Self::History => "history",
        };
        write!(f, "{}", name)
    }
}

/// A tokenized input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// First token as typed
    pub verb: &'a str,
    /// Everything after the first whitespace run, untouched
    pub args: &'a str,
}

impl ParsedLine<'_> {
    pub fn has_args(&self) -> bool {
        !self.args.is_empty()
    }
}

/// Command parser and utilities
pub struct CommandParser;

impl CommandParser {
    /// Split a line into verb and argument remainder. `None` for blank input.
    pub fn parse_command_line(input: &str) -> Option<ParsedLine<'_>> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        match trimmed.find(char::is_whitespace) {
            Some(idx) => Some(ParsedLine {
                verb: &trimmed[..idx],
                args: trimmed[idx..].trim_start(),
            }),
            None => Some(ParsedLine {
                verb: trimmed,
                args: "",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_parsing() {
        assert_eq!(Verb::from_str("help"), Some(Verb::Help));
        assert_eq!(Verb::from_str("LS"), Some(Verb::Ls));
        assert_eq!(Verb::from_str("Dir"), Some(Verb::Ls));
        assert_eq!(Verb::from_str("projects"), None);
    }

    #[test]
    fn test_command_line_parsing() {
        let parsed = CommandParser::parse_command_line("  cd   projects/x  ").unwrap();
        assert_eq!(parsed.verb, "cd");
        assert_eq!(parsed.args, "projects/x");

        let parsed = CommandParser::parse_command_line("cat a  b").unwrap();
        assert_eq!(parsed.args, "a  b");

        let parsed = CommandParser::parse_command_line("pwd").unwrap();
        assert!(!parsed.has_args());

        assert!(CommandParser::parse_command_line("   ").is_none());
    }

    #[test]
    fn test_names_in_declaration_order() {
        let names: Vec<&str> = Verb::names().collect();
        assert_eq!(
            names,
            vec!["help", "clear", "pwd", "ls", "dir", "cd", "cat", "open", "history"]
        );
    }

    #[test]
    fn test_command_menu() {
        let menu = Verb::get_command_menu(&["projects", "skills"]);
        assert_eq!(menu[0], "Available commands:");
        assert!(menu.iter().any(|line| line.contains("cd [path]")));
        assert_eq!(menu.last().unwrap(), "Shortcuts: projects, skills");
    }
}
