//! Terminal user interface using ratatui.
//!
//! Shows the new-task field, filter tabs, the task list and the theme toggle,
//! with modal dialogs for editing and delete confirmation.

mod app;
mod render;
mod run;

pub use app::TuiApp;
pub use run::run_tui;
