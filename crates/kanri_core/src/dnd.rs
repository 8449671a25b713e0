//! Drop-event resolution for drag-and-drop.
//!
//! # Responsibility
//! - Translate a raw drag-end event into a typed board action.
//!
//! # Invariants
//! - Drops outside any target resolve to nothing and are discarded.
//! - A drop at the exact source position resolves to nothing.
//! - Resolution is pure; applying the action is the store's job.

use crate::model::column::ColumnId;
use crate::model::task::TaskId;

/// What kind of draggable the event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Column,
    Task,
}

/// A position inside a drop container.
///
/// For column drags the container is the board; for task drags it is the
/// target column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropPosition {
    pub droppable_id: String,
    pub index: usize,
}

impl DropPosition {
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// A completed drag gesture as reported by the drag layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEvent {
    pub kind: DragKind,
    /// Id of the dragged column or task.
    pub draggable_id: String,
    pub source: DropPosition,
    /// `None` when the pointer was released outside every drop target.
    pub destination: Option<DropPosition>,
}

/// Board mutation derived from a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    /// Splice-move a column; `dest_index` is the position after removal.
    ReorderColumns {
        source_index: usize,
        dest_index: usize,
    },
    /// Reassign a task to `column_id`. `index` is the drop position within
    /// the column, carried through for interface fidelity.
    MoveTask {
        task_id: TaskId,
        column_id: ColumnId,
        index: usize,
    },
}

/// Resolves a drag-end event into the action to apply, if any.
pub fn resolve_drop(event: &DragEvent) -> Option<DropAction> {
    let destination = event.destination.as_ref()?;

    if destination.droppable_id == event.source.droppable_id
        && destination.index == event.source.index
    {
        return None;
    }

    match event.kind {
        DragKind::Column => Some(DropAction::ReorderColumns {
            source_index: event.source.index,
            dest_index: destination.index,
        }),
        DragKind::Task => Some(DropAction::MoveTask {
            task_id: event.draggable_id.clone(),
            column_id: destination.droppable_id.clone(),
            index: destination.index,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_drop, DragEvent, DragKind, DropAction, DropPosition};

    #[test]
    fn drop_outside_any_target_is_discarded() {
        let event = DragEvent {
            kind: DragKind::Task,
            draggable_id: "t1".to_string(),
            source: DropPosition::new("c1", 0),
            destination: None,
        };
        assert_eq!(resolve_drop(&event), None);
    }

    #[test]
    fn drop_at_source_position_is_discarded() {
        let event = DragEvent {
            kind: DragKind::Column,
            draggable_id: "c1".to_string(),
            source: DropPosition::new("board", 2),
            destination: Some(DropPosition::new("board", 2)),
        };
        assert_eq!(resolve_drop(&event), None);
    }

    #[test]
    fn column_drag_resolves_to_reorder() {
        let event = DragEvent {
            kind: DragKind::Column,
            draggable_id: "c3".to_string(),
            source: DropPosition::new("board", 2),
            destination: Some(DropPosition::new("board", 0)),
        };
        assert_eq!(
            resolve_drop(&event),
            Some(DropAction::ReorderColumns {
                source_index: 2,
                dest_index: 0,
            })
        );
    }

    #[test]
    fn task_drag_resolves_to_move_into_destination_column() {
        let event = DragEvent {
            kind: DragKind::Task,
            draggable_id: "t1".to_string(),
            source: DropPosition::new("c1", 0),
            destination: Some(DropPosition::new("c2", 3)),
        };
        assert_eq!(
            resolve_drop(&event),
            Some(DropAction::MoveTask {
                task_id: "t1".to_string(),
                column_id: "c2".to_string(),
                index: 3,
            })
        );
    }

    #[test]
    fn same_column_different_index_still_resolves_for_tasks() {
        let event = DragEvent {
            kind: DragKind::Task,
            draggable_id: "t1".to_string(),
            source: DropPosition::new("c1", 0),
            destination: Some(DropPosition::new("c1", 2)),
        };
        assert!(matches!(
            resolve_drop(&event),
            Some(DropAction::MoveTask { .. })
        ));
    }
}
