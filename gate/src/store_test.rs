use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.get(), None);
    assert!(!store.has_token());
}

#[test]
fn memory_store_set_replaces_previous_token() {
    let store = MemoryStore::with_token("old");
    store.set("abc123");
    assert_eq!(store.get().as_deref(), Some("abc123"));
    assert!(store.has_token());
}

#[test]
fn memory_store_clear_removes_token() {
    let store = MemoryStore::with_token("abc123");
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn blank_token_is_not_a_session() {
    let store = MemoryStore::with_token("   ");
    assert!(!store.has_token());
}
