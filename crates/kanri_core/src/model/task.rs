//! Task and subtask domain models.
//!
//! # Responsibility
//! - Define the task record, its checklist items, and typed creation and
//!   update payloads.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_at` is set once at creation and never mutated.
//! - `column_id` should reference an existing column; deleting a column
//!   cascades to its tasks so no orphan persists.

use crate::model::column::ColumnId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task. `String` alias for the same reason as
/// [`ColumnId`](crate::model::column::ColumnId).
pub type TaskId = String;

/// Identifier for a subtask, unique within its parent task.
pub type SubtaskId = String;

/// Task urgency level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A boolean-completable checklist item owned by one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub text: String,
    pub completed: bool,
}

impl Subtask {
    /// Creates an uncompleted subtask with a generated id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
        }
    }
}

/// A unit of work belonging to exactly one column.
///
/// Wire names are camelCase to match the board interchange format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Foreign key to the owning column.
    pub column_id: ColumnId,
    /// Set at creation; immutable afterwards.
    pub created_at: DateTime<Utc>,
    /// Reserved for future file attachment support; always empty here.
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// Materializes a task from a creation payload.
    ///
    /// Generates a fresh id, stamps `created_at`, and starts with empty
    /// attachment and subtask lists.
    pub fn from_new(data: NewTask) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: data.title,
            description: data.description,
            priority: data.priority,
            due_date: data.due_date,
            tags: data.tags,
            column_id: data.column_id,
            created_at: Utc::now(),
            attachments: Vec::new(),
            subtasks: Vec::new(),
        }
    }

    /// Merges the set fields of `patch` into this task.
    ///
    /// `id` and `created_at` are not patchable.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(column_id) = patch.column_id {
            self.column_id = column_id;
        }
        if let Some(subtasks) = patch.subtasks {
            self.subtasks = subtasks;
        }
    }
}

/// Creation payload for [`Task`].
///
/// `column_id` and `title` are required; everything else defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub column_id: ColumnId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<String>,
}

impl NewTask {
    pub fn new(column_id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            due_date: None,
            tags: Vec::new(),
        }
    }
}

/// Typed partial update for [`Task`].
///
/// Unset fields leave the current value unchanged. `due_date` is doubly
/// optional: `Some(None)` clears the date, `None` leaves it as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
    pub tags: Option<Vec<String>>,
    pub column_id: Option<ColumnId>,
    pub subtasks: Option<Vec<Subtask>>,
}
