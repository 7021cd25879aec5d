//! Key-value persistence for tasks and the theme preference.
//!
//! Values are strings keyed by strings, like browser local storage. The task
//! collection is stored as a JSON array under [`TASKS_KEY`] and the theme as
//! `"dark"`/`"light"` under [`THEME_KEY`].
//!
//! The file-backed store keeps every key in one JSON object:
//!
//! ```text
//! {"todo-tasks": "[{\"id\":1,\"text\":\"Buy milk\",\"completed\":false}]", "todo-theme": "dark"}
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::task::{IdsExhausted, Task};
use crate::theme::Theme;

/// Key holding the JSON-encoded task collection.
pub const TASKS_KEY: &str = "todo-tasks";
/// Key holding the theme preference.
pub const THEME_KEY: &str = "todo-theme";

/// Errors from reading or writing the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("stored value for '{key}' is not valid: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage file {} is not a JSON object of strings: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    IdsExhausted(#[from] IdsExhausted),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// String-valued key-value storage.
pub trait KeyValueStore {
    /// Read a value. Absent keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON file.
///
/// The file is re-read on every `get` so another process editing it is seen
/// on the next render. Writes go through a sibling temp file and a rename.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let io_err = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| io_err(e.into()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Read the task collection. An absent key is an empty collection; a value
/// that does not parse is [`StoreError::Corrupt`].
pub fn load_tasks<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<Task>> {
    match store.get(TASKS_KEY)? {
        Some(json) => serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
            key: TASKS_KEY.to_string(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

/// Write the whole task collection.
pub fn save_tasks<S: KeyValueStore + ?Sized>(store: &mut S, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string(tasks).map_err(|source| StoreError::Corrupt {
        key: TASKS_KEY.to_string(),
        source,
    })?;
    store.set(TASKS_KEY, &json)
}

/// Read the theme preference. Unknown markers read as no preference.
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Theme>> {
    Ok(store.get(THEME_KEY)?.as_deref().and_then(Theme::parse))
}

pub fn save_theme<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())
}
