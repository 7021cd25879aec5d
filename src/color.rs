//! Terminal color utilities using ANSI escape codes.
//!
//! Used by the line-based commands (`list`, `status`, ...). The TUI styles
//! itself through the theme palette instead.

/// ANSI color codes
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const STRIKE: &str = "\x1b[9m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

use codes::*;

use crate::view::{ItemView, ListView};

/// Dim text for placeholders and secondary details.
pub fn muted(text: &str) -> String {
    format!("{}{}{}", DIM, text, RESET)
}

/// Color "completed" counts and markers (green + bold).
pub fn completed(text: &str) -> String {
    format!("{}{}{}{}", BOLD, GREEN, text, RESET)
}

/// Color success messages (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", GREEN, text, RESET)
}

/// Color error messages (red).
pub fn error(text: &str) -> String {
    format!("{}{}{}", RED, text, RESET)
}

/// Color warning messages (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", YELLOW, text, RESET)
}

/// Color a label (bold).
pub fn label(text: &str) -> String {
    format!("{}{}{}", BOLD, text, RESET)
}

/// Color a number/count (bright cyan).
pub fn number(n: impl std::fmt::Display) -> String {
    format!("{}{}{}", BRIGHT_CYAN, n, RESET)
}

/// One task as a list line: checkbox, text, dim id.
///
/// Completed text is struck through and dimmed, like the TUI row.
pub fn item_line(item: &ItemView) -> String {
    let text = if item.completed {
        format!("{}{}{}{}", DIM, STRIKE, item.text, RESET)
    } else {
        item.text.clone()
    };
    format!("{} {} {}", item.checkbox(), text, muted(&format!("(#{})", item.id)))
}

/// Every line of a rendered view, placeholder included.
pub fn view_lines(view: &ListView) -> Vec<String> {
    match view.placeholder() {
        Some(message) => vec![muted(message)],
        None => view.items().iter().map(item_line).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Filter, Task};

    #[test]
    fn test_completed_green_bold() {
        let text = completed("3");
        assert!(text.contains(GREEN));
        assert!(text.contains(BOLD));
        assert!(text.ends_with(RESET));
    }

    #[test]
    fn test_error_red() {
        let text = error("boom");
        assert!(text.contains(RED));
        assert!(text.contains("boom"));
    }

    #[test]
    fn test_item_line_open_task() {
        let tasks = vec![Task::new(7, "Buy milk")];
        let view = ListView::build(&tasks, Filter::All);
        let line = item_line(&view.items()[0]);
        assert!(line.starts_with("[ ] Buy milk "));
        assert!(line.contains("(#7)"));
        assert!(!line.contains(STRIKE));
    }

    #[test]
    fn test_item_line_completed_is_struck() {
        let mut task = Task::new(7, "Buy milk");
        task.completed = true;
        let view = ListView::build(&[task], Filter::All);
        let line = item_line(&view.items()[0]);
        assert!(line.starts_with("[x] "));
        assert!(line.contains(STRIKE));
    }

    #[test]
    fn test_view_lines_placeholder() {
        let view = ListView::build(&[], Filter::Active);
        let lines = view_lines(&view);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("No active tasks!"));
    }
}
