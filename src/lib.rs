//! tickoff: a to-do list for the terminal.
//!
//! Tasks can be added, edited, deleted, completed and filtered
//! (all / active / completed). Everything persists in a small key-value store:
//! - `todo-tasks` - the task collection as a JSON array
//! - `todo-theme` - `"dark"` or `"light"`
//!
//! The store file defaults to `.tickoff/storage.json` and the log to
//! `.tickoff/tickoff.log`; both can be moved through `tickoff.toml`,
//! `TICKOFF_*` environment variables or command-line flags.

pub mod color;
pub mod config;
pub mod controller;
pub mod log;
pub mod prompt;
pub mod shutdown;
pub mod store;
pub mod task;
#[cfg(test)]
pub mod testutil;
pub mod theme;
pub mod tui;
pub mod view;
