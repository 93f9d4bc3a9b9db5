use pocketnote_core::{NoteStore, StoreError};
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn create_and_find_roundtrip() {
    let mut store = NoteStore::new();
    let note = store.create("Groceries", "Milk, eggs");

    let loaded = store.find(note.id).unwrap();
    assert_eq!(loaded.id, note.id);
    assert_eq!(loaded.title, "Groceries");
    assert_eq!(loaded.content, "Milk, eggs");
    assert_eq!(loaded.created_at, loaded.updated_at);
}

#[test]
fn generated_ids_are_pairwise_distinct() {
    let mut store = NoteStore::new();
    let ids: HashSet<_> = (0..100)
        .map(|index| store.create(format!("Note {index}"), "body").id)
        .collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn list_reflects_creation_order() {
    let mut store = NoteStore::new();
    let a = store.create("First", "a");
    let b = store.create("Second", "b");
    let c = store.create("Third", "c");

    let ids: Vec<_> = store.list().iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);
}

#[test]
fn update_preserves_id_and_created_at() {
    let mut store = NoteStore::new();
    let note = store.create("Groceries", "Milk, eggs");

    let updated = store
        .update(note.id, "Groceries", "Milk, eggs, butter")
        .unwrap();

    assert_eq!(updated.id, note.id);
    assert_eq!(updated.created_at, note.created_at);
    assert!(updated.updated_at >= note.updated_at);
    assert_eq!(updated.content, "Milk, eggs, butter");
}

#[test]
fn update_does_not_resort_the_list() {
    let mut store = NoteStore::new();
    let a = store.create("First", "a");
    let b = store.create("Second", "b");

    store.update(a.id, "First", "edited").unwrap();

    let ids: Vec<_> = store.list().iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[test]
fn update_missing_id_is_not_found_and_store_is_unchanged() {
    let mut store = NoteStore::new();
    store.create("Groceries", "Milk, eggs");

    let missing = Uuid::new_v4();
    let err = store.update(missing, "New", "body").unwrap_err();
    assert_eq!(err, StoreError::NotFound(missing));

    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].title, "Groceries");
}

#[test]
fn remove_is_idempotent() {
    let mut store = NoteStore::new();
    let keep = store.create("Keep me", "body");
    let gone = store.create("Drop me", "body");

    store.remove(gone.id);
    let after_first: Vec<_> = store.list().to_vec();

    store.remove(gone.id);
    assert_eq!(store.list(), after_first.as_slice());
    assert!(store.find(keep.id).is_some());
    assert!(store.find(gone.id).is_none());
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let mut store = NoteStore::new();
    store.create("Groceries", "Milk, eggs");

    store.remove(Uuid::new_v4());
    assert_eq!(store.len(), 1);
}
