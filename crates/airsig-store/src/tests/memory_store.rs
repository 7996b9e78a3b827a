use crate::{KeyValueStore, MemoryStore};

use googletest::prelude::*;

#[test]
fn given_empty_store_when_get_then_none() {
    let store = MemoryStore::new();
    assert_that!(store.get("users").unwrap(), none());
}

#[test]
fn given_value_set_when_get_then_returns_value() {
    let mut store = MemoryStore::new();

    store.set("authenticated", "true").unwrap();

    assert_that!(store.get("authenticated").unwrap(), some(eq("true")));
}

#[test]
fn given_clone_when_written_then_original_sees_write() {
    let original = MemoryStore::new();
    let mut handle = original.clone();

    handle.set("k", "v").unwrap();

    assert_that!(original.get("k").unwrap(), some(eq("v")));
    assert_that!(original.snapshot().unwrap().len(), eq(1));
}

#[test]
fn given_missing_key_when_remove_then_ok() {
    let mut store = MemoryStore::new();
    assert_that!(store.remove("nothing"), ok(anything()));
}

#[test]
fn given_value_when_removed_then_gone() {
    let mut store = MemoryStore::new();
    store.set("k", "v").unwrap();

    store.remove("k").unwrap();

    assert_that!(store.get("k").unwrap(), none());
}
