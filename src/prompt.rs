//! Blocking user questions used by edit and delete.
//!
//! The controller never talks to a terminal directly. It asks a [`Prompter`]
//! and acts on the answer, so the same logic runs under the TUI, the
//! line-based commands and tests.

use std::io::{self, BufRead, Write};

/// Message shown when editing a task.
pub const EDIT_MESSAGE: &str = "Edit your task:";
/// Message shown before deleting a task.
pub const DELETE_MESSAGE: &str = "Are you sure you want to delete this task?";

/// Source of answers to synchronous questions.
pub trait Prompter {
    /// Ask for a line of text, pre-filled with `default`. `None` means cancelled.
    fn input(&mut self, message: &str, default: &str) -> Option<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
}

/// A prompter whose answers were collected before the question is asked.
///
/// The TUI gathers the answer in a modal and then hands it to the controller
/// through this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    pub text: Option<String>,
    pub confirmed: bool,
}

impl Answer {
    /// An answer to an input question.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            confirmed: false,
        }
    }

    /// A cancelled input question.
    pub fn cancelled() -> Self {
        Self::default()
    }

    /// An answer to a confirmation.
    pub fn confirm(confirmed: bool) -> Self {
        Self {
            text: None,
            confirmed,
        }
    }
}

impl Prompter for Answer {
    fn input(&mut self, _message: &str, _default: &str) -> Option<String> {
        self.text.take()
    }

    fn confirm(&mut self, _message: &str) -> bool {
        self.confirmed
    }
}

/// Line-based prompter over a reader and writer, used by the plain commands.
pub struct StdioPrompter<R, W> {
    reader: R,
    writer: W,
    /// Answer every confirmation with yes without asking.
    assume_yes: bool,
}

impl StdioPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(assume_yes: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), assume_yes)
    }
}

impl<R: BufRead, W: Write> StdioPrompter<R, W> {
    pub fn new(reader: R, writer: W, assume_yes: bool) -> Self {
        Self {
            reader,
            writer,
            assume_yes,
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl<R: BufRead, W: Write> Prompter for StdioPrompter<R, W> {
    /// An empty line keeps `default`; end of input cancels.
    fn input(&mut self, message: &str, default: &str) -> Option<String> {
        let _ = write!(self.writer, "{} [{}] ", message, default);
        let _ = self.writer.flush();
        let line = self.read_line()?;
        if line.is_empty() {
            Some(default.to_string())
        } else {
            Some(line)
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let _ = write!(self.writer, "{} [y/N] ", message);
        let _ = self.writer.flush();
        matches!(
            self.read_line().as_deref().map(str::trim),
            Some("y") | Some("Y") | Some("yes")
        )
    }
}
