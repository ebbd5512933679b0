//! CLI Utilities Module
//!
//! Text layout helpers for the terminal host.

/// Utility function to wrap text to specified width
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let mut wrapped = Vec::new();
    for line in text.lines() {
        let mut current = String::new();
        for word in line.split(' ') {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > max_width && !current.is_empty() {
                wrapped.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        wrapped.push(current);
    }

    wrapped
}

/// Truncate text to fit within specified width
pub fn truncate_text(text: &str, max_width: usize, ellipsis: bool) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }

    if ellipsis && max_width > 3 {
        let kept: String = text.chars().take(max_width - 3).collect();
        format!("{}...", kept)
    } else {
        text.chars().take(max_width).collect()
    }
}

/// Left-align text within `width` columns
pub fn pad_text(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - len))
}

/// Highlight text with ANSI color codes
pub fn highlight_text(text: &str, color: HighlightColor) -> String {
    let color_code = match color {
        HighlightColor::Red => "\x1b[31m",
        HighlightColor::Blue => "\x1b[34m",
        HighlightColor::Cyan => "\x1b[36m",
        HighlightColor::Dim => "\x1b[2m",
        HighlightColor::Bold => "\x1b[1m",
    };

    format!("{}{}\x1b[0m", color_code, text)
}

/// Color options for text highlighting
pub enum HighlightColor {
    Red,
    Blue,
    Cyan,
    Dim,
    Bold,
}

/// Borderless table with padded columns
pub fn create_table(rows: &[Vec<String>]) -> Vec<String> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut col_widths = vec![0; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            col_widths[i] = col_widths[i].max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(i, cell)| pad_text(cell, col_widths[i]))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        let text = "This is a long line that should be wrapped at word boundaries";
        let wrapped = wrap_text(text, 20);
        assert!(wrapped.len() > 1);
        assert!(wrapped.iter().all(|line| line.chars().count() <= 20));
        assert_eq!(wrapped.join(" "), text);
    }

    #[test]
    fn test_wrap_keeps_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello world", 5, false), "hello");
        assert_eq!(truncate_text("hello world", 8, true), "hello...");
        assert_eq!(truncate_text("héllo", 10, true), "héllo");
    }

    #[test]
    fn test_pad_text() {
        assert_eq!(pad_text("hello", 10), "hello     ");
        assert_eq!(pad_text("héllo", 6), "héllo ");
        assert_eq!(pad_text("hello", 3), "hello");
    }

    #[test]
    fn test_create_table() {
        let rows = vec![
            vec!["projects/".to_string(), "Things I have built".to_string()],
            vec!["skills/".to_string(), "What I work with".to_string()],
        ];
        let table = create_table(&rows);
        assert_eq!(table[0], "projects/  Things I have built");
        assert_eq!(table[1], "skills/    What I work with");
    }
}
