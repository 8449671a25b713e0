//! Filter projection over the task collection.
//!
//! # Responsibility
//! - Compute the visible subset of a column's tasks for rendering.
//! - Enumerate the distinct tags in use across the board.
//!
//! # Invariants
//! - Filters are AND-combined; an empty search query always passes.
//! - Result order is the insertion order of the input collection; no
//!   re-sort happens here.
//! - Projection is read-only; canonical data never leaves the store.

use crate::model::task::{Priority, Task};
use std::collections::BTreeSet;

/// Transient filter state applied before rendering a column.
///
/// Not persisted; cleared filters mean "show everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against title or description.
    pub query: String,
    /// Exact tag that must be present on the task.
    pub tag: Option<String>,
    /// Priority the task must have.
    pub priority: Option<Priority>,
}

impl TaskFilter {
    /// Returns whether any filter dimension is set.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.tag.is_some() || self.priority.is_some()
    }

    fn matches(&self, task: &Task) -> bool {
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            if !task.title.to_lowercase().contains(&needle)
                && !task.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some(tag) = self.tag.as_deref() {
            if !task.tags.iter().any(|candidate| candidate == tag) {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }

        true
    }
}

/// Returns the tasks of `column_id` that pass `filter`, in input order.
pub fn visible_tasks<'t>(tasks: &'t [Task], column_id: &str, filter: &TaskFilter) -> Vec<&'t Task> {
    tasks
        .iter()
        .filter(|task| task.column_id == column_id)
        .filter(|task| filter.matches(task))
        .collect()
}

/// Returns every distinct tag across all tasks.
///
/// Presented order carries no meaning; sorted here for determinism.
pub fn all_tags(tasks: &[Task]) -> Vec<String> {
    let unique: BTreeSet<&str> = tasks
        .iter()
        .flat_map(|task| task.tags.iter().map(String::as_str))
        .collect();
    unique.into_iter().map(str::to_string).collect()
}
