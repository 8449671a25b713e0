use kanri_core::{
    BoardStore, ColumnPatch, MemoryStorage, NewTask, SqliteStorage, Storage, COLUMNS_KEY,
    TASKS_KEY,
};

#[test]
fn every_data_mutation_persists_the_whole_collection() {
    let mut store = BoardStore::empty(MemoryStorage::new());

    let column = store.add_column("To Do", None);
    let saved = store.into_storage().get(COLUMNS_KEY).unwrap();
    assert!(saved.contains(&column));
    assert!(saved.contains("To Do"));

    let mut store = BoardStore::empty(MemoryStorage::new());
    let column = store.add_column("To Do", None);
    let task = store.add_task(NewTask::new(column, "persisted"));
    store.update_task(&task, Default::default());
    let saved = store.into_storage().get(TASKS_KEY).unwrap();
    assert!(saved.contains(&task));
    assert!(saved.contains("persisted"));
}

#[test]
fn selection_and_filters_are_never_persisted() {
    let mut store = BoardStore::empty(MemoryStorage::new());
    let column = store.add_column("To Do", None);
    let task = store.add_task(NewTask::new(column, "transient state"));

    store.select_task(&task);
    store.set_search_query("transient");

    let storage = store.into_storage();
    assert!(!storage.get(COLUMNS_KEY).unwrap().contains("transient"));
    let tasks_blob = storage.get(TASKS_KEY).unwrap();
    assert!(tasks_blob.contains("transient state"));
    assert!(!tasks_blob.contains("searchQuery"));

    let reopened = BoardStore::open(storage);
    assert!(reopened.selected_tasks().is_empty());
    assert!(!reopened.filter().is_active());
}

#[test]
fn sqlite_backed_board_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("board.sqlite3");

    let storage = SqliteStorage::open(&db_path).unwrap();
    let mut store = BoardStore::empty(storage);
    let column = store.add_column("Durable", Some("#feca57"));
    let task = store.add_task(NewTask::new(column.clone(), "outlives the process"));
    store.update_column(
        &column,
        ColumnPatch {
            title: Some("Still Durable".to_string()),
            color: None,
        },
    );
    drop(store);

    let reopened = BoardStore::open(SqliteStorage::open(&db_path).unwrap());
    assert_eq!(reopened.columns().len(), 1);
    assert_eq!(reopened.columns()[0].title, "Still Durable");
    assert_eq!(reopened.tasks().len(), 1);
    assert_eq!(reopened.tasks()[0].id, task);
}

#[test]
fn sqlite_save_is_an_upsert() {
    let storage = SqliteStorage::open_in_memory().unwrap();

    storage.save("key", "first").unwrap();
    storage.save("key", "second").unwrap();

    assert_eq!(storage.load("key").unwrap().as_deref(), Some("second"));
    assert_eq!(storage.load("absent").unwrap(), None);
}

#[test]
fn open_seeds_default_board_when_storage_is_empty() {
    let store = BoardStore::open(MemoryStorage::new());

    assert_eq!(store.columns().len(), 4);
    assert_eq!(store.tasks().len(), 2);
    for task in store.tasks() {
        assert!(store.column(&task.column_id).is_some());
    }
}

#[test]
fn open_falls_back_to_defaults_on_malformed_blob() {
    let storage = MemoryStorage::new();
    storage.save(COLUMNS_KEY, "{ definitely not a column list").unwrap();
    storage.save(TASKS_KEY, "[]").unwrap();

    let store = BoardStore::open(storage);

    assert_eq!(store.columns().len(), 4);
    assert!(store.tasks().is_empty());
}

#[test]
fn open_honors_stored_collections_over_defaults() {
    let mut store = BoardStore::empty(MemoryStorage::new());
    let column = store.add_column("Only", None);
    store.add_task(NewTask::new(column, "only task"));

    let reopened = BoardStore::open(store.into_storage());
    assert_eq!(reopened.columns().len(), 1);
    assert_eq!(reopened.tasks().len(), 1);
}
