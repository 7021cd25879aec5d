//! The task list controller.
//!
//! Every operation works on the full persisted collection: read it from the
//! store, change it, write it back, then re-render from what was written.
//! The filter, dark-mode flag and input field are plain fields here so the
//! whole flow can be driven without a terminal.

use chrono::Utc;

use crate::log::{AppLogger, Level};
use crate::prompt::{Prompter, DELETE_MESSAGE, EDIT_MESSAGE};
use crate::store::{self, KeyValueStore, Result};
use crate::task::{self, Filter, Task};
use crate::theme::Theme;
use crate::view::ListView;

/// Milliseconds since the Unix epoch.
pub fn wall_clock_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Owns the store and the UI-level state of the list.
pub struct TaskController<S> {
    store: S,
    filter: Filter,
    dark_mode: bool,
    input: String,
    view: ListView,
    logger: Option<AppLogger>,
    clock: fn() -> i64,
}

impl<S: KeyValueStore> TaskController<S> {
    /// Create a controller over `store`. Call [`init`](Self::init) before use.
    pub fn new(store: S) -> Self {
        Self {
            store,
            filter: Filter::All,
            dark_mode: false,
            input: String::new(),
            view: ListView::default(),
            logger: None,
            clock: wall_clock_ms,
        }
    }

    /// Log mutations to `logger`.
    pub fn with_logger(mut self, logger: AppLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Start with `filter` selected instead of `All`.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Apply the saved theme and draw the first view.
    ///
    /// A saved `"dark"` preference ends in the same state as one press of the
    /// theme control. The store already holds `"dark"`, so nothing is written.
    pub fn init(&mut self) -> Result<()> {
        if store::load_theme(&self.store)? == Some(Theme::Dark) {
            self.dark_mode = true;
        }
        self.render()?;
        Ok(())
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.dark_mode)
    }

    /// The view from the last render.
    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// The persisted collection, unfiltered.
    pub fn tasks(&self) -> Result<Vec<Task>> {
        store::load_tasks(&self.store)
    }

    /// Add the text in the input field as a new task.
    pub fn add(&mut self) -> Result<Option<i64>> {
        let text = self.input.clone();
        self.add_text(&text)
    }

    /// Add a task with `text`.
    ///
    /// Blank text is ignored and leaves the input field untouched. On success
    /// the input field is cleared and the new id returned.
    pub fn add_text(&mut self, text: &str) -> Result<Option<i64>> {
        let mut tasks = store::load_tasks(&self.store)?;
        let Some(id) = task::append(&mut tasks, text, (self.clock)())? else {
            return Ok(None);
        };
        store::save_tasks(&mut self.store, &tasks)?;
        self.input.clear();
        self.note(Level::Info, &format!("added task {}", id));
        self.render()?;
        Ok(Some(id))
    }

    /// Flip completion of task `id`. Unknown ids are ignored.
    pub fn toggle_complete(&mut self, id: i64) -> Result<bool> {
        let mut tasks = store::load_tasks(&self.store)?;
        if !task::toggle(&mut tasks, id) {
            self.note(Level::Warn, &format!("toggle: no task with id {}", id));
            return Ok(false);
        }
        store::save_tasks(&mut self.store, &tasks)?;
        self.note(Level::Info, &format!("toggled task {}", id));
        self.render()?;
        Ok(true)
    }

    /// Ask `prompter` for new text for task `id` and store it trimmed.
    ///
    /// Cancelling or answering with blank text leaves the task unchanged.
    pub fn edit<P: Prompter + ?Sized>(&mut self, id: i64, prompter: &mut P) -> Result<bool> {
        let mut tasks = store::load_tasks(&self.store)?;
        let Some(current) = task::find(&tasks, id).map(|t| t.text.clone()) else {
            return Ok(false);
        };
        let Some(answer) = prompter.input(EDIT_MESSAGE, &current) else {
            return Ok(false);
        };
        if !task::replace_text(&mut tasks, id, &answer) {
            return Ok(false);
        }
        store::save_tasks(&mut self.store, &tasks)?;
        self.note(Level::Info, &format!("edited task {}", id));
        self.render()?;
        Ok(true)
    }

    /// Remove task `id` once `prompter` confirms.
    pub fn delete<P: Prompter + ?Sized>(&mut self, id: i64, prompter: &mut P) -> Result<bool> {
        if !prompter.confirm(DELETE_MESSAGE) {
            return Ok(false);
        }
        let mut tasks = store::load_tasks(&self.store)?;
        if !task::remove(&mut tasks, id) {
            self.note(Level::Warn, &format!("delete: no task with id {}", id));
            return Ok(false);
        }
        store::save_tasks(&mut self.store, &tasks)?;
        self.note(Level::Info, &format!("deleted task {}", id));
        self.render()?;
        Ok(true)
    }

    /// Switch the visible filter. The collection is not touched.
    pub fn set_filter(&mut self, filter: Filter) -> Result<()> {
        self.filter = filter;
        self.render()?;
        Ok(())
    }

    /// Rebuild the view from the persisted collection.
    pub fn render(&mut self) -> Result<&ListView> {
        let tasks = store::load_tasks(&self.store)?;
        self.view = ListView::build(&tasks, self.filter);
        Ok(&self.view)
    }

    /// Flip dark mode and persist the preference.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.dark_mode = !self.dark_mode;
        let theme = self.theme();
        store::save_theme(&mut self.store, theme)?;
        self.note(Level::Info, &format!("theme set to {}", theme.as_str()));
        Ok(theme)
    }

    /// Record a failed operation in the log.
    pub fn log_error(&self, message: &str) {
        self.note(Level::Error, message);
    }

    fn note(&self, level: Level, message: &str) {
        if let Some(ref logger) = self.logger {
            // The log is best effort; a full disk must not block editing.
            let _ = logger.log(level, message);
        }
    }
}
