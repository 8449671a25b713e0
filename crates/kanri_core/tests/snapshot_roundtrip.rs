use kanri_core::{
    BoardSnapshot, BoardStore, Column, MemoryStorage, NewTask, Priority, SnapshotError, StoreError,
};
use std::collections::HashSet;

fn seeded_store() -> BoardStore<MemoryStorage> {
    let mut store = BoardStore::empty(MemoryStorage::new());
    let todo = store.add_column("To Do", Some("#9aa0a6"));
    let done = store.add_column("Done", Some("#48dbfb"));
    store.add_task(NewTask {
        priority: Priority::High,
        tags: vec!["planning".to_string()],
        ..NewTask::new(todo.clone(), "Plan")
    });
    let shipped = store.add_task(NewTask::new(done, "Ship"));
    store.add_subtask(&shipped, "Tag the release").unwrap();
    store
}

#[test]
fn export_import_round_trip_preserves_collections() {
    let mut store = seeded_store();
    let before_columns = store.columns().to_vec();
    let before_tasks = store.tasks().to_vec();

    let snapshot = store.export_data();
    assert!(snapshot.exported_at.is_some());

    store.import_snapshot(snapshot).unwrap();

    assert_eq!(store.columns(), before_columns.as_slice());
    assert_eq!(store.tasks(), before_tasks.as_slice());
}

#[test]
fn json_round_trip_preserves_wire_shape() {
    let store = seeded_store();
    let json = store.export_data().to_json().unwrap();

    assert!(json.contains("\"columnId\""));
    assert!(json.contains("\"createdAt\""));
    assert!(json.contains("\"exportedAt\""));

    let decoded = BoardSnapshot::from_json(&json).unwrap();
    assert_eq!(decoded.columns.as_deref(), Some(store.columns()));
    assert_eq!(decoded.tasks.as_deref(), Some(store.tasks()));
}

#[test]
fn columns_only_import_replaces_columns_and_keeps_tasks() {
    let mut store = seeded_store();
    let tasks_before = store.tasks().to_vec();
    let mut renamed = store.columns().to_vec();
    renamed[0].title = "Inbox".to_string();

    store
        .import_snapshot(BoardSnapshot {
            columns: Some(renamed.clone()),
            tasks: None,
            exported_at: None,
        })
        .unwrap();

    assert_eq!(store.columns(), renamed.as_slice());
    assert_eq!(store.tasks(), tasks_before.as_slice());
}

#[test]
fn tasks_only_import_validates_against_live_columns() {
    let mut store = seeded_store();
    let mut tasks = store.tasks().to_vec();
    tasks[0].column_id = "unknown-column".to_string();

    let err = store
        .import_snapshot(BoardSnapshot {
            columns: None,
            tasks: Some(tasks),
            exported_at: None,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Snapshot(SnapshotError::UnknownColumn { .. })
    ));
}

#[test]
fn columns_only_import_cannot_orphan_live_tasks() {
    let mut store = seeded_store();

    let err = store
        .import_snapshot(BoardSnapshot {
            columns: Some(vec![Column::with_id("fresh", "Fresh", None)]),
            tasks: None,
            exported_at: None,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Snapshot(SnapshotError::UnknownColumn { .. })
    ));
}

#[test]
fn empty_payload_is_an_accepted_noop() {
    let mut store = seeded_store();
    let columns_before = store.columns().to_vec();
    let tasks_before = store.tasks().to_vec();

    store.import_snapshot(BoardSnapshot::default()).unwrap();

    assert_eq!(store.columns(), columns_before.as_slice());
    assert_eq!(store.tasks(), tasks_before.as_slice());
}

#[test]
fn malformed_json_is_rejected_with_parse_error() {
    let err = BoardSnapshot::from_json("{ not json").unwrap_err();
    assert!(matches!(err, SnapshotError::Json(_)));

    let err = BoardSnapshot::from_json("{\"columns\": 42}").unwrap_err();
    assert!(matches!(err, SnapshotError::Json(_)));
}

#[test]
fn unknown_top_level_fields_are_ignored() {
    let snapshot =
        BoardSnapshot::from_json("{\"columns\": [], \"futureField\": {\"x\": 1}}").unwrap();
    assert_eq!(snapshot.columns.as_deref(), Some(&[][..]));
    assert!(snapshot.tasks.is_none());
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut store = BoardStore::empty(MemoryStorage::new());

    let column = Column::with_id("c1", "Doubled", None);
    let err = store
        .import_snapshot(BoardSnapshot {
            columns: Some(vec![column.clone(), column]),
            tasks: None,
            exported_at: None,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Snapshot(SnapshotError::DuplicateColumnId(id)) if id == "c1"
    ));
}

#[test]
fn invalid_column_color_is_rejected() {
    let mut store = BoardStore::empty(MemoryStorage::new());

    let err = store
        .import_snapshot(BoardSnapshot {
            columns: Some(vec![Column {
                id: "c1".to_string(),
                title: "Bad".to_string(),
                color: "blue".to_string(),
            }]),
            tasks: None,
            exported_at: None,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Snapshot(SnapshotError::InvalidColor { .. })
    ));
}

#[test]
fn failed_import_leaves_state_untouched() {
    let mut store = seeded_store();
    let columns_before = store.columns().to_vec();
    let tasks_before = store.tasks().to_vec();

    let mut tasks = tasks_before.clone();
    tasks[0].column_id = "unknown".to_string();
    let bad = BoardSnapshot {
        columns: None,
        tasks: Some(tasks),
        exported_at: None,
    };
    assert!(store.import_snapshot(bad).is_err());

    assert_eq!(store.columns(), columns_before.as_slice());
    assert_eq!(store.tasks(), tasks_before.as_slice());
}

#[test]
fn import_prunes_selection_of_replaced_tasks() {
    let mut store = seeded_store();
    store.select_all_tasks();
    let kept = store.tasks()[0].clone();

    store
        .import_snapshot(BoardSnapshot {
            columns: None,
            tasks: Some(vec![kept.clone()]),
            exported_at: None,
        })
        .unwrap();

    let selected: HashSet<&str> = store
        .selected_tasks()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(selected, HashSet::from([kept.id.as_str()]));
}
