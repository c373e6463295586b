use contactbook_core::{ContactFields, ContactStore, StoreError, StoreEvent};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use uuid::Uuid;

fn fields(name: &str) -> ContactFields {
    ContactFields::new(name, "555-0100", "someone@example.com")
}

#[test]
fn add_appends_in_insertion_order() {
    let mut store = ContactStore::new();
    let first = store.add(fields("Ada"));
    let second = store.add(fields("Grace"));

    let listed: Vec<_> = store.list().iter().map(|c| c.id).collect();
    assert_eq!(listed, vec![first.id, second.id]);
    assert_eq!(store.list()[0].name, "Ada");
    assert_eq!(store.list()[1].name, "Grace");
}

#[test]
fn every_add_allocates_a_fresh_id() {
    let mut store = ContactStore::new();
    let mut ids = HashSet::new();
    for n in 0..50 {
        let contact = store.add(fields(&format!("contact-{n}")));
        assert!(ids.insert(contact.id), "duplicate id from add");
    }
    assert_eq!(store.list().len(), 50);
}

#[test]
fn list_length_tracks_adds_and_removes() {
    let mut store = ContactStore::new();
    let a = store.add(fields("a"));
    assert_eq!(store.list().len(), 1);
    let b = store.add(fields("b"));
    assert_eq!(store.list().len(), 2);

    store.remove(a.id).unwrap();
    assert_eq!(store.list().len(), 1);
    store.remove(b.id).unwrap();
    assert!(store.list().is_empty());
}

#[test]
fn update_replaces_fields_and_keeps_id() {
    let mut store = ContactStore::new();
    let contact = store.add(fields("Ada"));

    let updated = store
        .update(contact.id, ContactFields::new("Ada Lovelace", "0800", "ada@example.com"))
        .unwrap();

    assert_eq!(updated.id, contact.id);
    assert_eq!(updated.name, "Ada Lovelace");
    assert_eq!(updated.phone, "0800");

    let loaded = store.get(contact.id).unwrap();
    assert_eq!(loaded.name, "Ada Lovelace");
    assert_eq!(store.list().len(), 1);
}

#[test]
fn update_missing_id_fails_and_leaves_store_untouched() {
    let mut store = ContactStore::new();
    let existing = store.add(fields("Ada"));
    let missing = Uuid::new_v4();

    let err = store.update(missing, fields("ghost")).unwrap_err();
    assert_eq!(err, StoreError::NotFound(missing));

    assert_eq!(store.list().len(), 1);
    assert_eq!(store.get(existing.id).unwrap().name, "Ada");
}

#[test]
fn remove_missing_id_fails_and_leaves_store_untouched() {
    let mut store = ContactStore::new();
    store.add(fields("Ada"));
    let missing = Uuid::new_v4();

    let err = store.remove(missing).unwrap_err();
    assert_eq!(err, StoreError::NotFound(missing));
    assert_eq!(store.list().len(), 1);
}

#[test]
fn subscribers_see_one_event_per_successful_mutation() {
    let mut store = ContactStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |event| sink.borrow_mut().push(*event));

    let contact = store.add(fields("Ada"));
    store.update(contact.id, fields("Ada L.")).unwrap();
    store.remove(contact.id).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            StoreEvent::Added(contact.id),
            StoreEvent::Updated(contact.id),
            StoreEvent::Removed(contact.id),
        ]
    );
}

#[test]
fn failed_mutations_emit_no_events() {
    let mut store = ContactStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |event| sink.borrow_mut().push(*event));

    let missing = Uuid::new_v4();
    store.update(missing, fields("ghost")).unwrap_err();
    store.remove(missing).unwrap_err();

    assert!(seen.borrow().is_empty());
}

#[test]
fn subscriber_observes_mutation_already_applied() {
    let mut store = ContactStore::new();
    let removed_during_event = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&removed_during_event);
    store.subscribe(move |event| {
        if let StoreEvent::Removed(id) = event {
            *sink.borrow_mut() = Some(*id);
        }
    });

    let contact = store.add(fields("Ada"));
    store.remove(contact.id).unwrap();

    // The listener fired inside `remove`, after the record left the list.
    assert_eq!(*removed_during_event.borrow(), Some(contact.id));
    assert!(store.get(contact.id).is_none());
}
