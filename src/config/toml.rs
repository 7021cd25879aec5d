use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::types::{Config, ConfigError};
use crate::task::Filter;

/// On-disk shape of tickoff.toml. Every key is optional; unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    files: FilesSection,
    log: LogSection,
    ui: UiSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FilesSection {
    store: Option<String>,
    log: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LogSection {
    max_lines: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    filter: Option<String>,
    confirm_delete: Option<bool>,
}

pub(super) fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
    parse_toml(&content)
}

pub(super) fn parse_toml(content: &str) -> Result<Config, ConfigError> {
    let file: FileConfig =
        ::toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    let mut config = Config::default();

    if let Some(store) = file.files.store {
        config.files_store = store;
    }
    if let Some(log) = file.files.log {
        config.files_log = log;
    }
    if let Some(max_lines) = file.log.max_lines {
        config.log_max_lines = max_lines;
    }
    if let Some(filter) = file.ui.filter {
        config.ui_filter = Filter::parse(&filter)
            .ok_or_else(|| ConfigError::Parse(format!("invalid ui.filter: {}", filter)))?;
    }
    if let Some(confirm) = file.ui.confirm_delete {
        config.ui_confirm_delete = confirm;
    }

    Ok(config)
}
