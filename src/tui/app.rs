use crossterm::event::{KeyCode, KeyModifiers};

use crate::controller::TaskController;
use crate::prompt::Answer;
use crate::store::{KeyValueStore, StoreError};
use crate::task::Filter;

/// Input mode for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum InputMode {
    /// Normal mode - moving through the list
    Normal,
    /// Typing into the new-task field
    Input,
    /// Edit modal for the task with this id
    Edit(i64),
    /// Delete confirmation modal for the task with this id
    ConfirmDelete(i64),
}

/// TUI application state
pub struct TuiApp<S> {
    pub(super) controller: TaskController<S>,
    pub(super) input_mode: InputMode,
    /// Text in the edit modal
    pub(super) edit_buffer: String,
    /// Index of the highlighted row in the visible list
    pub(super) selected: usize,
    /// Last error, shown in the footer until the next key press
    pub(super) status: Option<String>,
    /// Skip the delete confirmation modal
    confirm_delete: bool,
    /// Whether the user asked to quit
    pub(super) should_quit: bool,
}

impl<S: KeyValueStore> TuiApp<S> {
    /// Wrap an initialized controller.
    pub fn new(controller: TaskController<S>) -> Self {
        Self {
            controller,
            input_mode: InputMode::Normal,
            edit_buffer: String::new(),
            selected: 0,
            status: None,
            confirm_delete: true,
            should_quit: false,
        }
    }

    /// Delete without asking when `confirm` is false.
    pub fn with_confirm_delete(mut self, confirm: bool) -> Self {
        self.confirm_delete = confirm;
        self
    }

    pub fn controller(&self) -> &TaskController<S> {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Id of the highlighted task, if the list has any.
    pub(super) fn selected_id(&self) -> Option<i64> {
        self.controller.view().items().get(self.selected).map(|i| i.id)
    }

    fn clamp_selection(&mut self) {
        let len = self.controller.view().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn move_selection(&mut self, down: bool, step: usize) {
        if self.controller.view().is_empty() {
            self.selected = 0;
            return;
        }
        let len = self.controller.view().len();
        self.selected = if down {
            (self.selected + step).min(len - 1)
        } else {
            self.selected.saturating_sub(step)
        };
    }

    /// Record the outcome of a controller call.
    fn settle<T>(&mut self, result: Result<T, StoreError>) {
        if let Err(e) = result {
            self.controller.log_error(&e.to_string());
            self.status = Some(e.to_string());
        }
        self.clamp_selection();
    }

    fn set_filter(&mut self, filter: Filter) {
        let result = self.controller.set_filter(filter);
        self.selected = 0;
        self.settle(result);
    }

    fn request_delete(&mut self, id: i64) {
        if self.confirm_delete {
            self.input_mode = InputMode::ConfirmDelete(id);
        } else {
            let result = self.controller.delete(id, &mut Answer::confirm(true));
            self.settle(result);
        }
    }

    /// Handle a key event.
    pub(super) fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        self.status = None;

        match self.input_mode {
            InputMode::ConfirmDelete(id) => {
                let confirmed = match key {
                    KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => true,
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
                    _ => return,
                };
                self.input_mode = InputMode::Normal;
                let result = self.controller.delete(id, &mut Answer::confirm(confirmed));
                self.settle(result);
            }
            InputMode::Edit(id) => match key {
                KeyCode::Enter => {
                    self.input_mode = InputMode::Normal;
                    let text = std::mem::take(&mut self.edit_buffer);
                    let result = self.controller.edit(id, &mut Answer::text(text));
                    self.settle(result);
                }
                KeyCode::Esc => {
                    self.input_mode = InputMode::Normal;
                    self.edit_buffer.clear();
                    let result = self.controller.edit(id, &mut Answer::cancelled());
                    self.settle(result);
                }
                KeyCode::Backspace => {
                    self.edit_buffer.pop();
                }
                KeyCode::Char(c) => {
                    self.edit_buffer.push(c);
                }
                _ => {}
            },
            InputMode::Input => match key {
                KeyCode::Enter => {
                    let result = self.controller.add();
                    self.settle(result);
                }
                KeyCode::Esc | KeyCode::Tab => {
                    self.input_mode = InputMode::Normal;
                }
                KeyCode::Backspace => {
                    self.controller.input_mut().pop();
                }
                KeyCode::Char(c) => {
                    self.controller.input_mut().push(c);
                }
                _ => {}
            },
            InputMode::Normal => match key {
                KeyCode::Char('a') | KeyCode::Char('i') => {
                    self.input_mode = InputMode::Input;
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => self.move_selection(false, 1),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection(true, 1),
                KeyCode::PageUp => self.move_selection(false, 10),
                KeyCode::PageDown => self.move_selection(true, 10),
                KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
                KeyCode::End | KeyCode::Char('G') => {
                    self.selected = self.controller.view().len().saturating_sub(1);
                }
                KeyCode::Char(' ') | KeyCode::Char('x') => {
                    if let Some(id) = self.selected_id() {
                        let result = self.controller.toggle_complete(id);
                        self.settle(result);
                    }
                }
                KeyCode::Char('e') | KeyCode::Enter => {
                    if let Some(item) = self.controller.view().items().get(self.selected) {
                        self.edit_buffer = item.text.clone();
                        self.input_mode = InputMode::Edit(item.id);
                    }
                }
                KeyCode::Char('d') | KeyCode::Delete => {
                    if let Some(id) = self.selected_id() {
                        self.request_delete(id);
                    }
                }
                KeyCode::Char('1') => self.set_filter(Filter::All),
                KeyCode::Char('2') => self.set_filter(Filter::Active),
                KeyCode::Char('3') => self.set_filter(Filter::Completed),
                KeyCode::Tab => {
                    let next = self.controller.filter().next();
                    self.set_filter(next);
                }
                KeyCode::Char('t') => {
                    let result = self.controller.toggle_theme();
                    self.settle(result);
                }
                _ => {}
            },
        }
    }

    /// Mouse wheel moves the highlight outside of modals.
    pub(super) fn handle_mouse_scroll(&mut self, up: bool) {
        if self.input_mode == InputMode::Normal {
            self.move_selection(!up, 1);
        }
    }
}
