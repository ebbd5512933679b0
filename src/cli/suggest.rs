//! Suggestion Engine
//!
//! Completion candidates for a partially typed line, plus the Tab cycle that
//! walks through them.

use super::commands::Verb;
use crate::vfs::{FileSystem, Location, Node};

/// Which children a verb completes against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Directories,
    Files,
}

/// Ranked completion candidates, capped at `max`
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    max: usize,
}

impl SuggestionEngine {
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    pub fn suggest(&self, fs: &FileSystem, location: &Location, partial: &str) -> Vec<String> {
        let line = partial.trim_start();
        if line.trim_end().is_empty() {
            return Vec::new();
        }

        let mut candidates = match split_verb(line) {
            Some((verb, rest)) => match verb.to_lowercase().as_str() {
                "cd" => {
                    let mut found = complete_children(fs, location, "cd", rest, Target::Directories);
                    found.extend(
                        ["..", "~"]
                            .iter()
                            .filter(|special| special.starts_with(rest))
                            .map(|special| format!("cd {}", special)),
                    );
                    found
                }
                verb @ ("cat" | "open") => {
                    complete_children(fs, location, verb, rest, Target::Files)
                }
                _ => complete_names(fs, location, line),
            },
            None => complete_names(fs, location, line),
        };

        candidates.truncate(self.max);
        candidates
    }
}

/// Split `verb rest` once the visitor has typed past the verb
fn split_verb(line: &str) -> Option<(&str, &str)> {
    let idx = line.find(char::is_whitespace)?;
    Some((&line[..idx], line[idx..].trim_start()))
}

fn children<'a>(fs: &'a FileSystem, location: &Location) -> &'a [Node] {
    fs.lookup(location).map(Node::children).unwrap_or(&[])
}

fn complete_children(
    fs: &FileSystem,
    location: &Location,
    verb: &str,
    rest: &str,
    target: Target,
) -> Vec<String> {
    children(fs, location)
        .iter()
        .filter(|child| match target {
            Target::Directories => child.is_directory(),
            Target::Files => child.is_file(),
        })
        .filter(|child| child.name.starts_with(rest))
        .map(|child| format!("{} {}", verb, child.name))
        .collect()
}

/// Verbs, then section shortcuts, then names in the current directory
fn complete_names(fs: &FileSystem, location: &Location, line: &str) -> Vec<String> {
    let needle = line.trim().to_lowercase();
    let mut found: Vec<String> = Vec::new();
    let mut consider = |name: &str| {
        if name.to_lowercase().starts_with(&needle) && !found.iter().any(|f| f == name) {
            found.push(name.to_string());
        }
    };

    Verb::names().for_each(&mut consider);
    fs.sections().into_iter().for_each(&mut consider);
    children(fs, location)
        .iter()
        .for_each(|child| consider(&child.name));
    found
}

/// Tab acceptance state: repeated accepts walk the list and wrap around
#[derive(Debug, Clone, Default)]
pub struct SuggestionCycle {
    candidates: Vec<String>,
    index: Option<usize>,
}

impl SuggestionCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept the next candidate. A different candidate list restarts the cycle.
    pub fn accept(&mut self, candidates: Vec<String>) -> Option<&str> {
        let next = match self.index {
            Some(idx) if candidates == self.candidates => (idx + 1) % candidates.len(),
            _ => {
                self.candidates = candidates;
                if self.candidates.is_empty() {
                    self.index = None;
                    return None;
                }
                0
            }
        };
        self.index = Some(next);
        self.candidates.get(next).map(String::as_str)
    }

    pub fn reset(&mut self) {
        self.candidates.clear();
        self.index = None;
    }

    pub fn is_active(&self) -> bool {
        self.index.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::sample_tree;

    fn fs() -> FileSystem {
        FileSystem::new(sample_tree().unwrap())
    }

    fn at(segments: &[&str]) -> Location {
        segments.iter().copied().collect()
    }

    #[test]
    fn test_empty_input_has_no_suggestions() {
        let engine = SuggestionEngine::new(6);
        assert!(engine.suggest(&fs(), &Location::root(), "").is_empty());
        assert!(engine.suggest(&fs(), &Location::root(), "   ").is_empty());
    }

    #[test]
    fn test_prefix_at_root() {
        let found = SuggestionEngine::new(6).suggest(&fs(), &Location::root(), "pro");
        assert!(found.contains(&"projects".to_string()));
        assert!(!found.contains(&"skills".to_string()));
        assert!(!found.contains(&"contact".to_string()));
    }

    #[test]
    fn test_verbs_are_case_insensitive_and_ordered() {
        let found = SuggestionEngine::new(6).suggest(&fs(), &Location::root(), "C");
        assert_eq!(found, vec!["clear", "cd", "cat", "contact"]);
    }

    #[test]
    fn test_cd_completes_directories_only() {
        let engine = SuggestionEngine::new(6);
        let found = engine.suggest(&fs(), &Location::root(), "cd ");
        assert_eq!(
            found,
            vec!["cd projects", "cd skills", "cd contact", "cd ..", "cd ~"]
        );

        let found = engine.suggest(&fs(), &Location::root(), "cd s");
        assert_eq!(found, vec!["cd skills"]);

        // files are never offered to cd
        assert!(engine.suggest(&fs(), &at(&["projects"]), "cd e").is_empty());
        assert_eq!(engine.suggest(&fs(), &at(&["projects"]), "cd ."), vec!["cd .."]);
    }

    #[test]
    fn test_cat_and_open_complete_files_only() {
        let engine = SuggestionEngine::new(6);
        let found = engine.suggest(&fs(), &at(&["projects"]), "cat ");
        assert_eq!(
            found,
            vec!["cat epicwars-cvc", "cat pixel-forge", "cat terminal-folio"]
        );

        let found = engine.suggest(&fs(), &at(&["contact"]), "open g");
        assert_eq!(found, vec!["open github"]);

        assert!(engine.suggest(&fs(), &Location::root(), "cat ").is_empty());
    }

    #[test]
    fn test_local_names_after_verbs() {
        let found = SuggestionEngine::new(6).suggest(&fs(), &at(&["projects"]), "p");
        assert_eq!(found, vec!["pwd", "projects", "pixel-forge"]);
    }

    #[test]
    fn test_truncates_to_cap() {
        let found = SuggestionEngine::new(2).suggest(&fs(), &Location::root(), "cd ");
        assert_eq!(found, vec!["cd projects", "cd skills"]);
    }

    #[test]
    fn test_cycle_wraps() {
        let list = vec!["cd projects".to_string(), "cd skills".to_string()];
        let mut cycle = SuggestionCycle::new();
        assert_eq!(cycle.accept(list.clone()), Some("cd projects"));
        assert_eq!(cycle.accept(list.clone()), Some("cd skills"));
        assert_eq!(cycle.accept(list.clone()), Some("cd projects"));
    }

    #[test]
    fn test_cycle_restarts_on_new_list() {
        let mut cycle = SuggestionCycle::new();
        cycle.accept(vec!["a".to_string(), "b".to_string()]);
        cycle.accept(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(cycle.accept(vec!["c".to_string()]), Some("c"));

        assert_eq!(cycle.accept(Vec::new()), None);
        assert!(!cycle.is_active());
    }
}
