//! Application log with rotation.
//!
//! The TUI owns the terminal, so diagnostics go to a plain text file instead.
//! The file is rotated to a timestamped backup once it exceeds a configurable
//! line limit.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

/// Default maximum number of lines before rotation.
pub const DEFAULT_MAX_LINES: usize = 1000;

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// File logger for the application.
#[derive(Debug, Clone)]
pub struct AppLogger {
    /// Path to the log file.
    pub path: PathBuf,
    /// Maximum lines before rotation.
    pub max_lines: usize,
}

impl AppLogger {
    /// Create a logger writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_lines: DEFAULT_MAX_LINES,
        }
    }

    /// Create a logger with a custom max lines setting.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Write a log entry.
    ///
    /// Format: `YYYY-MM-DD HH:MM:SS | <LEVEL> | <message>`
    pub fn log(&self, level: Level, message: &str) -> io::Result<()> {
        self.ensure_dir()?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("{} | {} | {}\n", timestamp, level, message);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(line.as_bytes())?;
        file.flush()?;

        self.rotate_if_needed()?;

        Ok(())
    }

    /// Write a separator for a new session.
    pub fn log_session_start(&self) -> io::Result<()> {
        self.ensure_dir()?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = format!(
            "\n======================================================================\n\
             === tickoff {} - Session Started at {} ===\n\
             ======================================================================\n\n",
            env!("CARGO_PKG_VERSION"),
            timestamp
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(separator.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    fn ensure_dir(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn rotate_if_needed(&self) -> io::Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let line_count = count_lines(&self.path)?;
        if line_count <= self.max_lines {
            return Ok(());
        }

        rotate_log(&self.path)
    }

    /// Read the last N lines from the log file.
    pub fn read_recent(&self, n: usize) -> io::Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path)?;
        let all_lines: Vec<String> = BufReader::new(file).lines().collect::<io::Result<_>>()?;
        let start = all_lines.len().saturating_sub(n);
        Ok(all_lines[start..].to_vec())
    }
}

/// Count lines in a file.
pub fn count_lines(path: &Path) -> io::Result<usize> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(reader.lines().count())
}

/// Rotate a log file.
///
/// Creates a timestamped backup and clears the original file.
pub fn rotate_log(path: &Path) -> io::Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let backup_name = format!(
        "{}.{}.bak",
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("log"),
        timestamp
    );
    let backup_path = path.with_file_name(backup_name);

    fs::rename(path, &backup_path)?;
    File::create(path)?;

    Ok(())
}
