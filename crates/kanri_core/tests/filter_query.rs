use kanri_core::{BoardStore, MemoryStorage, NewTask, Priority, TaskPatch};

fn seeded_store() -> (BoardStore<MemoryStorage>, String) {
    let mut store = BoardStore::empty(MemoryStorage::new());
    let c1 = store.add_column("C1", None);
    let milk = store.add_task(NewTask {
        tags: vec!["home".to_string()],
        priority: Priority::Low,
        ..NewTask::new(c1.clone(), "Buy milk")
    });
    store.add_task(NewTask {
        tags: vec!["work".to_string()],
        priority: Priority::High,
        ..NewTask::new(c1.clone(), "Ship release")
    });
    store.update_task(
        &milk,
        TaskPatch {
            description: Some("semi-skimmed".to_string()),
            ..TaskPatch::default()
        },
    );
    (store, c1)
}

#[test]
fn search_filter_narrows_to_matching_title() {
    let (mut store, c1) = seeded_store();

    store.set_search_query("ship");
    let visible = store.tasks_in_column(&c1);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Ship release");
}

#[test]
fn tag_filter_narrows_to_tagged_task() {
    let (mut store, c1) = seeded_store();

    store.set_filter_tag(Some("home".to_string()));
    let visible = store.tasks_in_column(&c1);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Buy milk");
}

#[test]
fn priority_filter_narrows_by_equality() {
    let (mut store, c1) = seeded_store();

    store.set_filter_priority(Some(Priority::High));
    let visible = store.tasks_in_column(&c1);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Ship release");
}

#[test]
fn search_matches_description_too() {
    let (mut store, c1) = seeded_store();

    store.set_search_query("SKIMMED");
    let visible = store.tasks_in_column(&c1);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Buy milk");
}

#[test]
fn clear_filters_restores_full_column() {
    let (mut store, c1) = seeded_store();

    store.set_search_query("ship");
    store.set_filter_tag(Some("work".to_string()));
    store.set_filter_priority(Some(Priority::High));
    assert_eq!(store.tasks_in_column(&c1).len(), 1);

    store.clear_filters();
    assert_eq!(store.tasks_in_column(&c1).len(), 2);
    assert!(!store.filter().is_active());
}

#[test]
fn conjunction_of_filters_can_empty_the_view() {
    let (mut store, c1) = seeded_store();

    store.set_filter_tag(Some("home".to_string()));
    store.set_filter_priority(Some(Priority::High));
    assert!(store.tasks_in_column(&c1).is_empty());
}

#[test]
fn all_tags_lists_distinct_tags() {
    let (store, _) = seeded_store();
    assert_eq!(store.all_tags(), ["home", "work"]);
}

#[test]
fn projection_ignores_other_columns() {
    let (mut store, _) = seeded_store();
    let c2 = store.add_column("C2", None);
    assert!(store.tasks_in_column(&c2).is_empty());
}
