//! The board store — single source of truth for columns and tasks.
//!
//! # Responsibility
//! - Provide every mutation and query the board UI needs.
//! - Persist the whole affected collection after each data mutation.
//!
//! # Invariants
//! - The selection never references a nonexistent task; every path that
//!   removes or replaces tasks prunes it.
//! - Persistence is synchronous and per-mutation, never batched; a failed
//!   save is logged and the in-memory effect stands.
//! - Unknown-id updates and deletes are silent no-ops.

use crate::dnd::DropAction;
use crate::filter::{self, TaskFilter};
use crate::model::column::{Column, ColumnId, ColumnPatch};
use crate::model::snapshot::{BoardSnapshot, SnapshotError};
use crate::model::task::{NewTask, Priority, Subtask, SubtaskId, Task, TaskId, TaskPatch};
use crate::storage::{self, Storage, COLUMNS_KEY, TASKS_KEY};
use crate::store::seed;
use chrono::Utc;
use log::error;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by store operations that can fail fast.
///
/// Most mutations cannot fail: unknown ids are silent no-ops and persist
/// failures are absorbed after the in-memory update.
#[derive(Debug)]
pub enum StoreError {
    /// A reorder index fell outside the column list.
    ColumnIndexOutOfRange { index: usize, len: usize },
    /// An import payload failed validation.
    Snapshot(SnapshotError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ColumnIndexOutOfRange { index, len } => {
                write!(f, "column index {index} out of range for {len} columns")
            }
            Self::Snapshot(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColumnIndexOutOfRange { .. } => None,
            Self::Snapshot(err) => Some(err),
        }
    }
}

impl From<SnapshotError> for StoreError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

/// Transient view-layer state owned by the store.
///
/// Never persisted; a fresh store starts with everything closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub loading: bool,
    pub task_modal_open: bool,
    /// Column preselected in the task modal when opened from a column.
    pub default_column_id: Option<ColumnId>,
    pub add_column_modal_open: bool,
    pub filter_panel_open: bool,
    /// Task currently being edited in the modal, if any.
    pub editing_task: Option<TaskId>,
}

/// Single source of truth for the board, generic over its persistence
/// capability so tests can run against in-memory storage.
pub struct BoardStore<S: Storage> {
    storage: S,
    columns: Vec<Column>,
    tasks: Vec<Task>,
    selected: BTreeSet<TaskId>,
    filter: TaskFilter,
    ui: UiState,
}

impl<S: Storage> BoardStore<S> {
    /// Loads a board from `storage`, seeding the default board when a
    /// collection is absent or unreadable.
    pub fn open(storage: S) -> Self {
        let columns: Vec<Column> = storage::load_or(&storage, COLUMNS_KEY, seed::default_columns);
        let tasks: Vec<Task> =
            storage::load_or(&storage, TASKS_KEY, || seed::sample_tasks(&columns));
        Self {
            storage,
            columns,
            tasks,
            selected: BTreeSet::new(),
            filter: TaskFilter::default(),
            ui: UiState::default(),
        }
    }

    /// Creates a blank board on top of `storage`.
    pub fn empty(storage: S) -> Self {
        Self {
            storage,
            columns: Vec::new(),
            tasks: Vec::new(),
            selected: BTreeSet::new(),
            filter: TaskFilter::default(),
            ui: UiState::default(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn selected_tasks(&self) -> &BTreeSet<TaskId> {
        &self.selected
    }

    pub fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Consumes the store, returning the storage capability.
    pub fn into_storage(self) -> S {
        self.storage
    }

    // ---- Column operations ----

    /// Appends a new column and returns its id.
    ///
    /// Title content is a caller-side form concern; any string is accepted.
    pub fn add_column(&mut self, title: impl Into<String>, color: Option<&str>) -> ColumnId {
        let column = Column::new(title, color);
        let id = column.id.clone();
        self.columns.push(column);
        self.persist_columns();
        id
    }

    /// Merges `patch` into the matching column; unknown id is a no-op.
    pub fn update_column(&mut self, id: &str, patch: ColumnPatch) {
        let Some(column) = self.columns.iter_mut().find(|column| column.id == id) else {
            return;
        };
        column.apply(patch);
        self.persist_columns();
    }

    /// Removes a column and cascade-deletes every task in it.
    ///
    /// Irreversible; confirmation is the caller's responsibility. Cascaded
    /// tasks are also dropped from the selection.
    pub fn delete_column(&mut self, id: &str) {
        let before = self.columns.len();
        self.columns.retain(|column| column.id != id);
        if self.columns.len() == before {
            return;
        }

        let cascaded: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|task| task.column_id == id)
            .map(|task| task.id.clone())
            .collect();
        self.tasks.retain(|task| task.column_id != id);
        for task_id in &cascaded {
            self.selected.remove(task_id);
        }

        self.persist_columns();
        self.persist_tasks();
    }

    /// Splice-moves the column at `source_index` to `dest_index`.
    ///
    /// `dest_index` is the position in the list after removal, matching
    /// the drag-library convention. Out-of-range indices fail fast rather
    /// than corrupt order silently.
    pub fn reorder_columns(&mut self, source_index: usize, dest_index: usize) -> StoreResult<()> {
        let len = self.columns.len();
        if source_index >= len {
            return Err(StoreError::ColumnIndexOutOfRange {
                index: source_index,
                len,
            });
        }
        if dest_index >= len {
            return Err(StoreError::ColumnIndexOutOfRange {
                index: dest_index,
                len,
            });
        }
        if source_index == dest_index {
            return Ok(());
        }

        let column = self.columns.remove(source_index);
        self.columns.insert(dest_index, column);
        self.persist_columns();
        Ok(())
    }

    // ---- Task operations ----

    /// Creates a task from `data` and returns its id.
    pub fn add_task(&mut self, data: NewTask) -> TaskId {
        let task = Task::from_new(data);
        let id = task.id.clone();
        self.tasks.push(task);
        self.persist_tasks();
        id
    }

    /// Merges `patch` into the matching task; unknown id is a no-op.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return;
        };
        task.apply(patch);
        self.persist_tasks();
    }

    /// Removes a task unconditionally and prunes it from the selection.
    pub fn delete_task(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return;
        }
        self.selected.remove(id);
        self.persist_tasks();
    }

    /// Reassigns a task to `new_column_id`; unknown task id is a no-op.
    ///
    /// `new_index` is the drop position reported by the drag layer. It is
    /// accepted for interface fidelity but does not reorder within the
    /// column: a column displays its tasks in task-list insertion order.
    pub fn move_task(&mut self, task_id: &str, new_column_id: &str, new_index: usize) {
        let _ = new_index;
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == task_id) else {
            return;
        };
        task.column_id = new_column_id.to_string();
        self.persist_tasks();
    }

    /// Applies a resolved drop action.
    pub fn apply_drop(&mut self, action: DropAction) -> StoreResult<()> {
        match action {
            DropAction::ReorderColumns {
                source_index,
                dest_index,
            } => self.reorder_columns(source_index, dest_index),
            DropAction::MoveTask {
                task_id,
                column_id,
                index,
            } => {
                self.move_task(&task_id, &column_id, index);
                Ok(())
            }
        }
    }

    // ---- Subtask operations ----

    /// Appends an uncompleted subtask; returns its id, or `None` when the
    /// parent task does not exist.
    pub fn add_subtask(&mut self, task_id: &str, text: impl Into<String>) -> Option<SubtaskId> {
        let task = self.tasks.iter_mut().find(|task| task.id == task_id)?;
        let subtask = Subtask::new(text);
        let id = subtask.id.clone();
        task.subtasks.push(subtask);
        self.persist_tasks();
        Some(id)
    }

    /// Flips a subtask's completion flag; unknown ids are no-ops.
    pub fn toggle_subtask(&mut self, task_id: &str, subtask_id: &str) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == task_id) else {
            return;
        };
        let Some(subtask) = task
            .subtasks
            .iter_mut()
            .find(|subtask| subtask.id == subtask_id)
        else {
            return;
        };
        subtask.completed = !subtask.completed;
        self.persist_tasks();
    }

    /// Removes a subtask; unknown ids are no-ops.
    pub fn delete_subtask(&mut self, task_id: &str, subtask_id: &str) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == task_id) else {
            return;
        };
        let before = task.subtasks.len();
        task.subtasks.retain(|subtask| subtask.id != subtask_id);
        if task.subtasks.len() == before {
            return;
        }
        self.persist_tasks();
    }

    // ---- Selection ----

    /// Toggles a task's membership in the selection.
    pub fn select_task(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Selects every current task.
    pub fn select_all_tasks(&mut self) {
        self.selected = self.tasks.iter().map(|task| task.id.clone()).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Removes every selected task, then clears the selection.
    pub fn delete_selected_tasks(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let selected = std::mem::take(&mut self.selected);
        self.tasks.retain(|task| !selected.contains(&task.id));
        self.persist_tasks();
    }

    /// Reassigns every selected task to `column_id`, then clears the
    /// selection.
    pub fn move_selected_tasks(&mut self, column_id: &str) {
        if self.selected.is_empty() {
            return;
        }
        for task in &mut self.tasks {
            if self.selected.contains(&task.id) {
                task.column_id = column_id.to_string();
            }
        }
        self.selected.clear();
        self.persist_tasks();
    }

    // ---- Filters and projections ----

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_filter_tag(&mut self, tag: Option<String>) {
        self.filter.tag = tag;
    }

    pub fn set_filter_priority(&mut self, priority: Option<Priority>) {
        self.filter.priority = priority;
    }

    pub fn clear_filters(&mut self) {
        self.filter = TaskFilter::default();
    }

    /// Returns the tasks of `column_id` that pass the current filters, in
    /// task-list insertion order.
    pub fn tasks_in_column(&self, column_id: &str) -> Vec<&Task> {
        filter::visible_tasks(&self.tasks, column_id, &self.filter)
    }

    /// Returns every distinct tag across the board.
    pub fn all_tags(&self) -> Vec<String> {
        filter::all_tags(&self.tasks)
    }

    // ---- UI state ----

    pub fn set_loading(&mut self, loading: bool) {
        self.ui.loading = loading;
    }

    pub fn set_task_modal_open(&mut self, open: bool, default_column_id: Option<ColumnId>) {
        self.ui.task_modal_open = open;
        self.ui.default_column_id = default_column_id;
    }

    pub fn set_add_column_modal_open(&mut self, open: bool) {
        self.ui.add_column_modal_open = open;
    }

    pub fn set_filter_panel_open(&mut self, open: bool) {
        self.ui.filter_panel_open = open;
    }

    pub fn set_editing_task(&mut self, task_id: Option<TaskId>) {
        self.ui.editing_task = task_id;
    }

    // ---- Export / import ----

    /// Returns a snapshot of the board; no mutation, no persistence.
    pub fn export_data(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: Some(self.columns.clone()),
            tasks: Some(self.tasks.clone()),
            exported_at: Some(Utc::now()),
        }
    }

    /// Replaces columns and/or tasks from a validated snapshot.
    ///
    /// Columns-only and tasks-only payloads are honored independently; a
    /// payload with neither is an accepted no-op. Replaced collections are
    /// persisted immediately and the selection keeps only ids that still
    /// resolve to a task.
    pub fn import_snapshot(&mut self, snapshot: BoardSnapshot) -> StoreResult<()> {
        snapshot.validate(&self.columns, &self.tasks)?;

        let BoardSnapshot { columns, tasks, .. } = snapshot;
        if let Some(columns) = columns {
            self.columns = columns;
            self.persist_columns();
        }
        if let Some(tasks) = tasks {
            self.tasks = tasks;
            let live = &self.tasks;
            self.selected
                .retain(|id| live.iter().any(|task| &task.id == id));
            self.persist_tasks();
        }
        Ok(())
    }

    // ---- Persistence ----

    fn persist_columns(&self) {
        if let Err(err) = storage::save_json(&self.storage, COLUMNS_KEY, &self.columns) {
            error!("event=persist module=store key={COLUMNS_KEY} status=error error={err}");
        }
    }

    fn persist_tasks(&self) {
        if let Err(err) = storage::save_json(&self.storage, TASKS_KEY, &self.tasks) {
            error!("event=persist module=store key={TASKS_KEY} status=error error={err}");
        }
    }
}
