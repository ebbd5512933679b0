//! Plain-terminal rendering of output records.
//!
//! Stands in for the graphical renderer. Rich content is printed as JSON; the
//! markup inside it is left for a real renderer to interpret.

use super::output::Payload;
use super::utils::{create_table, highlight_text, truncate_text, wrap_text, HighlightColor};
use crate::vfs::{Content, DirEntry};

/// Lines to print for one payload
pub fn render_payload(payload: &Payload, width: usize, prompt_symbol: &str) -> Vec<String> {
    match payload {
        Payload::Echo { prompt, input } => vec![format!(
            "{} {} {}",
            highlight_text(prompt, HighlightColor::Cyan),
            prompt_symbol,
            input
        )],
        Payload::Text(text) => wrap_text(text, width),
        Payload::Lines(lines) => lines.clone(),
        Payload::Listing {
            entries, enriched, ..
        } => render_listing(entries, *enriched, width),
        Payload::Content { name, content } => render_content(name, content, width),
        Payload::Diagnostic { message, .. } => {
            vec![highlight_text(message, HighlightColor::Red)]
        }
    }
}

fn render_listing(entries: &[DirEntry], enriched: bool, width: usize) -> Vec<String> {
    if entries.is_empty() {
        return vec![highlight_text("(empty)", HighlightColor::Dim)];
    }

    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            let mut row = vec![
                entry.display_name(),
                entry.description.clone().unwrap_or_default(),
            ];
            if enriched {
                row.push(entry.preview.clone().unwrap_or_default());
            }
            row
        })
        .collect();
    create_table(&rows)
        .into_iter()
        .map(|line| truncate_text(&line, width, true))
        .collect()
}

fn render_content(name: &str, content: &Content, width: usize) -> Vec<String> {
    let mut lines = vec![highlight_text(name, HighlightColor::Bold)];
    match content {
        Content::Text(text) => lines.extend(wrap_text(text, width)),
        Content::Rich(value) => match serde_json::to_string_pretty(value) {
            Ok(json) => lines.extend(json.lines().map(str::to_string)),
            Err(_) => lines.push(value.to_string()),
        },
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiagnosticKind;

    #[test]
    fn test_echo_line() {
        let lines = render_payload(
            &Payload::Echo {
                prompt: "~".to_string(),
                input: "ls".to_string(),
            },
            80,
            "$",
        );
        assert_eq!(lines, vec!["\x1b[36m~\x1b[0m $ ls"]);
    }

    #[test]
    fn test_diagnostic_is_red() {
        let lines = render_payload(
            &Payload::Diagnostic {
                kind: DiagnosticKind::UnknownCommand,
                message: "command not found: x".to_string(),
            },
            80,
            "$",
        );
        assert!(lines[0].starts_with("\x1b[31m"));
    }

    #[test]
    fn test_listing_rows_fit_width() {
        let entry = DirEntry {
            name: "projects".to_string(),
            kind: crate::vfs::EntryKind::Directory,
            description: Some("Things I have built over the years".to_string()),
            preview: None,
        };
        let payload = Payload::Listing {
            path: "~".to_string(),
            entries: vec![entry],
            enriched: false,
        };
        let lines = render_payload(&payload, 20, "$");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("..."));
        assert_eq!(lines[0].chars().count(), 20);
    }

    #[test]
    fn test_rich_content_is_passed_through_as_json() {
        let lines = render_payload(
            &Payload::Content {
                name: "demo".to_string(),
                content: Content::Rich(serde_json::json!({ "title": "Demo" })),
            },
            80,
            "$",
        );
        assert!(lines.iter().any(|l| l.contains("\"title\": \"Demo\"")));
    }
}
