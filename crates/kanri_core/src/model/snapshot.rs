//! Board export/import format and validation.
//!
//! # Responsibility
//! - Define the JSON-serializable snapshot exchanged with the user.
//! - Validate imported payloads instead of accepting garbage wholesale.
//!
//! # Invariants
//! - `exportedAt` is informational only; it is ignored on import.
//! - Validation rejects a payload before any board state is replaced.
//! - Unknown top-level fields are ignored.

use crate::model::column::{is_hex_color, Column, ColumnId};
use crate::model::task::{Task, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Portable snapshot of board data.
///
/// Export always fills both collections; import honors columns-only or
/// tasks-only payloads independently. A payload carrying neither is an
/// accepted no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
}

/// Validation/decoding error for snapshot import.
#[derive(Debug)]
pub enum SnapshotError {
    /// Payload is not valid JSON or field types do not match the format.
    Json(serde_json::Error),
    DuplicateColumnId(ColumnId),
    DuplicateTaskId(TaskId),
    /// Column color is not a `#rrggbb` hex string.
    InvalidColor { column_id: ColumnId, value: String },
    /// Task references a column absent from the payload (or, for
    /// tasks-only payloads, from the live board).
    UnknownColumn { task_id: TaskId, column_id: ColumnId },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid snapshot payload: {err}"),
            Self::DuplicateColumnId(id) => write!(f, "duplicate column id: {id}"),
            Self::DuplicateTaskId(id) => write!(f, "duplicate task id: {id}"),
            Self::InvalidColor { column_id, value } => {
                write!(f, "column {column_id} has invalid color `{value}`")
            }
            Self::UnknownColumn { task_id, column_id } => {
                write!(f, "task {task_id} references unknown column {column_id}")
            }
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl BoardSnapshot {
    /// Decodes a snapshot from JSON text without validating references.
    ///
    /// Callers importing into a board should go through
    /// [`BoardStore::import_snapshot`](crate::store::board_store::BoardStore::import_snapshot),
    /// which validates against live state.
    pub fn from_json(payload: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Encodes this snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks internal consistency of the payload.
    ///
    /// `live_columns` is the reference set for task `column_id`s when the
    /// payload carries no columns of its own. Columns-only payloads must
    /// still cover every task in `live_tasks` so an import cannot orphan
    /// existing tasks.
    pub fn validate(
        &self,
        live_columns: &[Column],
        live_tasks: &[Task],
    ) -> Result<(), SnapshotError> {
        if let Some(columns) = self.columns.as_deref() {
            let mut seen = HashSet::new();
            for column in columns {
                if !seen.insert(column.id.as_str()) {
                    return Err(SnapshotError::DuplicateColumnId(column.id.clone()));
                }
                if !is_hex_color(&column.color) {
                    return Err(SnapshotError::InvalidColor {
                        column_id: column.id.clone(),
                        value: column.color.clone(),
                    });
                }
            }
        }

        let column_ids: HashSet<&str> = self
            .columns
            .as_deref()
            .unwrap_or(live_columns)
            .iter()
            .map(|column| column.id.as_str())
            .collect();

        let tasks = self.tasks.as_deref().unwrap_or(live_tasks);
        let mut seen = HashSet::new();
        for task in tasks {
            if !seen.insert(task.id.as_str()) {
                return Err(SnapshotError::DuplicateTaskId(task.id.clone()));
            }
            if !column_ids.contains(task.column_id.as_str()) {
                return Err(SnapshotError::UnknownColumn {
                    task_id: task.id.clone(),
                    column_id: task.column_id.clone(),
                });
            }
        }

        Ok(())
    }
}
