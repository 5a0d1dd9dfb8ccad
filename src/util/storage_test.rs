use super::*;

#[test]
fn memory_store_set_overwrites_previous_value() {
    let store = MemoryStore::new();
    store.set(TOKEN_STORAGE_KEY, "first");
    store.set(TOKEN_STORAGE_KEY, "second");
    assert_eq!(store.get(TOKEN_STORAGE_KEY).as_deref(), Some("second"));
}

#[test]
fn memory_store_remove_clears_only_that_key() {
    let store = MemoryStore::new();
    store.set(TOKEN_STORAGE_KEY, "tok");
    store.set("other", "kept");
    store.remove(TOKEN_STORAGE_KEY);
    store.remove(TOKEN_STORAGE_KEY);
    assert_eq!(store.get(TOKEN_STORAGE_KEY), None);
    assert_eq!(store.get("other").as_deref(), Some("kept"));
}

#[test]
fn token_key_is_token() {
    assert_eq!(TOKEN_STORAGE_KEY, "token");
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_noop_outside_browser() {
    let store = LocalStorage;
    store.set(TOKEN_STORAGE_KEY, "tok");
    store.remove(TOKEN_STORAGE_KEY);
}
