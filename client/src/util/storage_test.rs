use super::*;

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("k", "v");
    assert_eq!(storage.get("k").as_deref(), Some("v"));
}

#[test]
fn memory_storage_last_write_wins() {
    let storage = MemoryStorage::new();
    storage.set("k", "first");
    storage.set("k", "second");
    assert_eq!(storage.get("k").as_deref(), Some("second"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_clears_key() {
    let storage = MemoryStorage::new();
    storage.set("k", "v");
    storage.remove("k");
    assert!(storage.get("k").is_none());
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("shared", "yes");
    assert_eq!(b.get("shared").as_deref(), Some("yes"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_without_window_is_empty() {
    let storage = BrowserStorage;
    storage.set("k", "v");
    assert!(storage.get("k").is_none());
}
