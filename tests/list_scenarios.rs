//! End-to-end scenarios over the list store and the derived view.

use chrono::NaiveDate;
use getdone::model::{FilterMode, Task};
use getdone::ops::view::{StatusLine, status_line, visible_tasks};
use getdone::ops::{Intent, ListStore};
use pretty_assertions::assert_eq;

fn texts(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.text.clone()).collect()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

#[test]
fn milk_and_dog() {
    let mut store = ListStore::new();
    store.apply(Intent::Add("buy milk".into()));
    store.apply(Intent::Add("walk dog".into()));
    let dog = store.tasks()[1].id;
    store.apply(Intent::ToggleComplete(dog));

    let completed = visible_tasks(store.tasks(), FilterMode::Completed, "");
    assert_eq!(texts(&completed), vec!["walk dog"]);

    let uncompleted = visible_tasks(store.tasks(), FilterMode::Uncompleted, "");
    assert_eq!(texts(&uncompleted), vec!["buy milk"]);

    let searched = visible_tasks(store.tasks(), FilterMode::All, "MILK");
    assert_eq!(texts(&searched), vec!["buy milk"]);
}

#[test]
fn status_line_through_a_session() {
    let mut store = ListStore::new();
    let line = |store: &ListStore, filter, query| {
        let visible = visible_tasks(store.tasks(), filter, query).len();
        status_line(store.len(), visible, today(), "%-m/%-d/%Y")
    };

    assert_eq!(line(&store, FilterMode::All, ""), StatusLine::Empty);

    let id = store.add("write report");
    assert_eq!(
        line(&store, FilterMode::All, ""),
        StatusLine::Header("10/18/2026".into())
    );
    assert_eq!(line(&store, FilterMode::Completed, ""), StatusLine::NoMatches);

    store.toggle_complete(id);
    store.clear_completed();
    assert_eq!(line(&store, FilterMode::All, ""), StatusLine::Empty);
}

#[test]
fn deleted_id_stays_gone() {
    let mut store = ListStore::new();
    let keep = store.add("keep");
    let gone = store.add("gone");
    store.apply(Intent::Delete(gone));

    for intent in [
        Intent::ToggleComplete(gone),
        Intent::EnterEditMode(gone),
        Intent::CommitEdit {
            id: gone,
            text: "back?".into(),
        },
        Intent::Delete(gone),
    ] {
        assert!(!store.apply(intent));
    }
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].id, keep);
}

#[test]
fn clear_completed_preserves_open_order() {
    let mut store = ListStore::new();
    let ids: Vec<_> = ["a", "b", "c", "d", "e"]
        .into_iter()
        .map(|t| store.add(t))
        .collect();
    for id in [ids[0], ids[2], ids[4]] {
        store.toggle_complete(id);
    }
    store.apply(Intent::ClearCompleted);

    let left: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(left, vec!["b", "d"]);
    assert!(store.tasks().iter().all(|t| !t.completed));
}
