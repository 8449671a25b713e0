//! Core state management for the Kanri task board.
//! This crate is the single source of truth for board data and invariants.

pub mod db;
pub mod dnd;
pub mod filter;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use dnd::{resolve_drop, DragEvent, DragKind, DropAction, DropPosition};
pub use filter::{all_tags, visible_tasks, TaskFilter};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::column::{Column, ColumnId, ColumnPatch, DEFAULT_COLUMN_COLOR};
pub use model::snapshot::{BoardSnapshot, SnapshotError};
pub use model::task::{NewTask, Priority, Subtask, SubtaskId, Task, TaskId, TaskPatch};
pub use storage::{
    MemoryStorage, SqliteStorage, Storage, StorageError, StorageResult, COLUMNS_KEY, TASKS_KEY,
};
pub use store::board_store::{BoardStore, StoreError, StoreResult, UiState};
