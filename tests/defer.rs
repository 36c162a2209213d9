use std::cell::RefCell;
use std::rc::Rc;

use rust_datastore::{DeferRegistry, KeyGen};

#[test]
fn handler_fires_at_most_once() {
    let fired: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
    let mut registry = DeferRegistry::new();
    let mut keys = KeyGen::default();

    let key = keys.next_key();
    let sink = Rc::clone(&fired);
    registry.register(key, move |value: u32| sink.borrow_mut().push(value));
    assert!(registry.has(key));

    let handler = registry.take(key);
    handler(7);
    assert!(!registry.has(key));

    // Depleted: a second take yields the no-op.
    let handler = registry.take(key);
    handler(9);

    assert_eq!(*fired.borrow(), vec![7]);
}

#[test]
fn take_on_unregistered_key_is_a_noop() {
    let mut registry: DeferRegistry<u32> = DeferRegistry::new();
    let mut keys = KeyGen::default();

    let key = keys.next_key();
    assert!(!registry.has(key));

    // Must not panic, and must leave nothing behind.
    let handler = registry.take(key);
    handler(1);
    assert!(!registry.has(key));
}

#[test]
fn register_replaces_existing_handler() {
    let fired: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    let mut registry = DeferRegistry::new();
    let mut keys = KeyGen::default();

    let key = keys.next_key();
    let first = Rc::clone(&fired);
    registry.register(key, move |_: u32| first.borrow_mut().push("first"));
    let second = Rc::clone(&fired);
    registry.register(key, move |_: u32| second.borrow_mut().push("second"));

    let handler = registry.take(key);
    handler(0);
    assert_eq!(*fired.borrow(), vec!["second"]);
}

#[test]
fn keys_are_fresh_per_call() {
    let mut keys = KeyGen::default();
    let a = keys.next_key();
    let b = keys.next_key();
    let c = keys.next_key();
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}
