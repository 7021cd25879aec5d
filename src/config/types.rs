use std::path::Path;

use thiserror::Error;

use super::cli::CliArgs;
use super::{env, toml};
use crate::log::DEFAULT_MAX_LINES;
use crate::task::Filter;

/// Config file looked up in the working directory when `-c` is not given.
pub const CONFIG_FILE: &str = "tickoff.toml";

/// Default location of the key-value store.
pub const DEFAULT_STORE_PATH: &str = ".tickoff/storage.json";

/// Default location of the application log.
pub const DEFAULT_LOG_PATH: &str = ".tickoff/tickoff.log";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the storage file.
    pub files_store: String,
    /// Path to the log file.
    pub files_log: String,
    /// Lines kept in the log before rotation.
    pub log_max_lines: usize,
    /// Filter selected at startup.
    pub ui_filter: Filter,
    /// Ask before deleting a task.
    pub ui_confirm_delete: bool,
    /// Keep everything in memory; nothing is read from or written to disk.
    pub ephemeral: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files_store: DEFAULT_STORE_PATH.to_string(),
            files_log: DEFAULT_LOG_PATH.to_string(),
            log_max_lines: DEFAULT_MAX_LINES,
            ui_filter: Filter::All,
            ui_confirm_delete: true,
            ephemeral: false,
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Precedence: CLI args > env vars > config file > defaults.
    ///
    /// An explicit `--config` file that cannot be read or parsed is an error.
    /// A broken `tickoff.toml` picked up implicitly is too, so a typo does not
    /// silently fall back to defaults.
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(ref path) = cli_args.config {
            config = Self::load_from_file(path)?;
        } else if Path::new(CONFIG_FILE).exists() {
            config = Self::load_from_file(CONFIG_FILE)?;
        }

        config.apply_env();
        config.apply_cli(cli_args);

        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        toml::load_from_file(path)
    }

    /// Parse TOML content into configuration.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::parse_toml(content)
    }

    fn apply_env(&mut self) {
        env::apply_env(self, |key| std::env::var(key).ok());
    }

    /// Apply CLI arguments.
    pub(super) fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(ref path) = args.store_file {
            self.files_store = path.clone();
        }
        if let Some(ref path) = args.log_file {
            self.files_log = path.clone();
        }
        if let Some(filter) = args.filter {
            self.ui_filter = filter;
        }
        if args.ephemeral {
            self.ephemeral = true;
        }
    }

    /// Generate default tickoff.toml content.
    pub fn default_toml() -> String {
        format!(
            r#"# tickoff configuration

[files]
store = "{}"
log = "{}"

[log]
max_lines = {}

[ui]
filter = "all"        # all, active, completed
confirm_delete = true
"#,
            DEFAULT_STORE_PATH, DEFAULT_LOG_PATH, DEFAULT_MAX_LINES
        )
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading config file.
    #[error("config I/O error: {0}")]
    Io(String),
    /// Parse error in config file.
    #[error("config parse error: {0}")]
    Parse(String),
}
