//! The rendered list: what the user sees after each render.
//!
//! A [`ListView`] is rebuilt from scratch on every render; nothing is carried
//! over from the previous one.

use crate::task::{self, Filter, Task};

/// One visible task with its controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    /// Id the checkbox, edit and delete controls act on.
    pub id: i64,
    pub text: String,
    /// Checkbox state.
    pub completed: bool,
}

impl ItemView {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
        }
    }

    /// Checkbox glyph.
    pub fn checkbox(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

/// The list area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Nothing matched; a single placeholder line.
    Empty(&'static str),
    /// Visible tasks in collection order.
    Items(Vec<ItemView>),
}

impl Default for ListView {
    fn default() -> Self {
        Self::Empty(Filter::All.empty_message())
    }
}

impl ListView {
    /// Build the view of `tasks` under `filter`.
    pub fn build(tasks: &[Task], filter: Filter) -> Self {
        let visible = task::filtered(tasks, filter);
        if visible.is_empty() {
            return Self::Empty(filter.empty_message());
        }
        Self::Items(visible.into_iter().map(ItemView::from_task).collect())
    }

    pub fn items(&self) -> &[ItemView] {
        match self {
            Self::Empty(_) => &[],
            Self::Items(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Placeholder text, if the list is empty.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Empty(msg) => Some(msg),
            Self::Items(_) => None,
        }
    }
}

/// Filter tab bar state: each filter and whether it is the active one.
pub fn filter_tabs(active: Filter) -> [(Filter, bool); 3] {
    Filter::ALL.map(|f| (f, f == active))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks() -> Vec<Task> {
        vec![
            Task::new(1, "open"),
            Task {
                id: 2,
                text: "done".to_string(),
                completed: true,
            },
        ]
    }

    #[test]
    fn test_build_items() {
        let view = ListView::build(&tasks(), Filter::All);
        assert_eq!(view.len(), 2);
        assert_eq!(view.items()[0].id, 1);
        assert_eq!(view.items()[1].checkbox(), "[x]");
        assert_eq!(view.placeholder(), None);
    }

    #[test]
    fn test_placeholder_per_filter() {
        assert_eq!(
            ListView::build(&[], Filter::All).placeholder(),
            Some("No tasks yet!")
        );
        let only_open = vec![Task::new(1, "open")];
        assert_eq!(
            ListView::build(&only_open, Filter::Completed).placeholder(),
            Some("No completed tasks!")
        );
        let mut only_done = only_open.clone();
        only_done[0].completed = true;
        assert_eq!(
            ListView::build(&only_done, Filter::Active).placeholder(),
            Some("No active tasks!")
        );
    }

    #[test]
    fn test_filter_tabs_one_active() {
        let tabs = filter_tabs(Filter::Active);
        assert_eq!(tabs.iter().filter(|(_, active)| *active).count(), 1);
        assert_eq!(tabs[1], (Filter::Active, true));
    }
}
