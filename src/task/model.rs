use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single to-do entry.
///
/// Serialized as `{"id": number, "text": string, "completed": boolean}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable key for every lookup and mutation.
    pub id: i64,
    /// The task text, always trimmed and non-empty.
    pub text: String,
    /// Whether the task has been checked off.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task.
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Which tasks the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks.
    Completed,
}

impl Filter {
    /// All filters in tab order.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Parse a filter from its name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Placeholder shown when nothing matches this filter.
    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::All => "No tasks yet!",
            Self::Active => "No active tasks!",
            Self::Completed => "No completed tasks!",
        }
    }

    /// Whether a task passes this filter.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// The filter after this one, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::All,
        }
    }
}

/// Normalize user-entered text. Returns `None` for empty or whitespace-only input.
pub fn clean_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// No id is left above the largest one in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no task id is left after {max}")]
pub struct IdsExhausted {
    pub max: i64,
}

/// Pick an id for a task created at `now_ms`.
///
/// Uses the clock value unless it would not exceed the largest existing id,
/// in which case the id is one past that maximum.
pub fn next_id(tasks: &[Task], now_ms: i64) -> Result<i64, IdsExhausted> {
    match tasks.iter().map(|t| t.id).max() {
        Some(max) if now_ms <= max => max.checked_add(1).ok_or(IdsExhausted { max }),
        _ => Ok(now_ms),
    }
}

/// Append a task with the given text. Returns the new id, or `None` if the
/// text was blank and nothing changed.
pub fn append(tasks: &mut Vec<Task>, raw: &str, now_ms: i64) -> Result<Option<i64>, IdsExhausted> {
    let Some(text) = clean_text(raw) else {
        return Ok(None);
    };
    let id = next_id(tasks, now_ms)?;
    tasks.push(Task::new(id, text));
    Ok(Some(id))
}

/// Flip the completion flag of the task with `id`. Returns false if not found.
pub fn toggle(tasks: &mut [Task], id: i64) -> bool {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// Replace the text of the task with `id`. Returns false if the id is unknown
/// or the new text is blank.
pub fn replace_text(tasks: &mut [Task], id: i64, raw: &str) -> bool {
    let Some(text) = clean_text(raw) else {
        return false;
    };
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.text = text;
            true
        }
        None => false,
    }
}

/// Remove the task with `id`, keeping the order of the rest. Returns false if
/// no task had that id.
pub fn remove(tasks: &mut Vec<Task>, id: i64) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    tasks.len() != before
}

/// Tasks passing `filter`, in collection order.
pub fn filtered(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// Look up a task by id.
pub fn find(tasks: &[Task], id: i64) -> Option<&Task> {
    tasks.iter().find(|t| t.id == id)
}

/// Count of incomplete tasks.
pub fn active_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

/// Count of completed tasks.
pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.completed).count()
}
