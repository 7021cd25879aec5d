//! Task records and the list operations on them.
//!
//! A collection is a plain `Vec<Task>` in insertion order. Every mutation is a
//! free function that reports whether anything changed, so callers can skip
//! persisting on a no-op.

mod model;

#[cfg(test)]
mod tests;

pub use model::{
    active_count, append, clean_text, completed_count, filtered, find, next_id, remove,
    replace_text, toggle, Filter, IdsExhausted, Task,
};
