//! Command History Module
//!
//! Append-only record of submitted lines with an up/down recall cursor.

/// Submitted command lines and the recall position
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    commands: Vec<String>,
    /// `None` while the visitor is typing a fresh line
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a submitted line and go back to fresh typing
    pub fn add_command(&mut self, cmd: impl Into<String>) {
        self.commands.push(cmd.into());
        self.cursor = None;
    }

    /// Step to an older entry (up arrow)
    pub fn previous(&mut self) -> Option<&str> {
        if self.commands.is_empty() {
            return None;
        }

        let idx = match self.cursor {
            None => self.commands.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.cursor = Some(idx);
        self.commands.get(idx).map(String::as_str)
    }

    /// Step to a newer entry (down arrow).
    /// Returns `None` once the newest entry is passed; the input should be emptied.
    pub fn next(&mut self) -> Option<&str> {
        match self.cursor {
            Some(idx) if idx + 1 < self.commands.len() => {
                self.cursor = Some(idx + 1);
                self.commands.get(idx + 1).map(String::as_str)
            }
            _ => {
                self.cursor = None;
                None
            }
        }
    }

    /// Entries oldest first
    pub fn entries(&self) -> &[String] {
        &self.commands
    }

    /// Search for commands containing the given pattern, most recent first
    pub fn search(&self, pattern: &str) -> Vec<&str> {
        let pattern = pattern.to_lowercase();
        self.commands
            .iter()
            .rev()
            .filter(|cmd| cmd.to_lowercase().contains(&pattern))
            .map(String::as_str)
            .collect()
    }

    pub fn last_command(&self) -> Option<&str> {
        self.commands.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Numbered lines for the `history` verb
    pub fn get_summary(&self) -> Vec<String> {
        self.commands
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{:4}  {}", i + 1, cmd))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recall_order() {
        let mut history = CommandHistory::new();
        history.add_command("ls");
        history.add_command("pwd");
        history.add_command("help");

        assert_eq!(history.previous(), Some("help"));
        assert_eq!(history.previous(), Some("pwd"));
        assert_eq!(history.previous(), Some("ls"));
        // clamped at the oldest entry
        assert_eq!(history.previous(), Some("ls"));

        assert_eq!(history.next(), Some("pwd"));
        assert_eq!(history.next(), Some("help"));
        assert!(history.next().is_none());
        assert_eq!(history.cursor(), None);
        assert!(history.next().is_none());
    }

    #[test]
    fn test_submit_resets_cursor() {
        let mut history = CommandHistory::new();
        history.add_command("cd projects");
        history.add_command("ls");
        history.previous();
        history.previous();
        assert_eq!(history.cursor(), Some(0));

        history.add_command("pwd");
        assert_eq!(history.cursor(), None);
        assert_eq!(history.previous(), Some("pwd"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut history = CommandHistory::new();
        history.add_command("ls");
        history.add_command("ls");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_empty_history() {
        let mut history = CommandHistory::new();
        assert!(history.is_empty());
        assert!(history.previous().is_none());
        assert!(history.next().is_none());
    }

    #[test]
    fn test_search() {
        let mut history = CommandHistory::new();
        history.add_command("cd projects");
        history.add_command("ls");
        history.add_command("cd ~/skills");

        assert_eq!(history.search("CD"), vec!["cd ~/skills", "cd projects"]);
    }

    #[test]
    fn test_summary() {
        let mut history = CommandHistory::new();
        history.add_command("ls");
        history.add_command("pwd");
        assert_eq!(history.get_summary(), vec!["   1  ls", "   2  pwd"]);
    }
}
