use super::*;

// =============================================================
// token_is_present
// =============================================================

#[test]
fn absent_token_is_not_present() {
    assert!(!token_is_present(None));
}

#[test]
fn empty_and_whitespace_tokens_are_not_present() {
    assert!(!token_is_present(Some("")));
    assert!(!token_is_present(Some("   ")));
    assert!(!token_is_present(Some("\t\n ")));
}

#[test]
fn padded_token_is_present() {
    assert!(token_is_present(Some("  abc123  ")));
}

// =============================================================
// SessionReader
// =============================================================

#[test]
fn reader_follows_store_writes() {
    let store = MemoryTokenStore::new();
    let reader = SessionReader::new(store.clone());
    assert!(!reader.is_authenticated());

    store.set("abc123").unwrap();
    assert!(reader.is_authenticated());

    store.clear().unwrap();
    assert!(!reader.is_authenticated());
}

#[test]
fn reader_treats_whitespace_token_as_absent() {
    let reader = SessionReader::new(MemoryTokenStore::with_token("   "));
    assert!(!reader.is_authenticated());
}

// =============================================================
// sign_in / sign_out
// =============================================================

#[test]
fn sign_in_stores_token() {
    let store = MemoryTokenStore::new();
    sign_in(&store, "abc123").unwrap();
    assert_eq!(store.get().as_deref(), Some("abc123"));
}

#[test]
fn sign_in_rejects_blank_token_without_writing() {
    let store = MemoryTokenStore::with_token("old");
    assert_eq!(sign_in(&store, "  "), Err(StoreError::BlankToken));
    assert_eq!(store.get().as_deref(), Some("old"));
}

#[test]
fn sign_out_clears_token() {
    let store = MemoryTokenStore::with_token("abc123");
    sign_out(&store).unwrap();
    assert!(store.get().is_none());
}

#[test]
fn login_view_flow_returns_to_preserved_destination() {
    let config = crate::config::GateConfig::default();
    let store = MemoryTokenStore::new();
    let reader = SessionReader::new(store.clone());

    sign_in(&store, "abc123").unwrap();
    assert!(reader.is_authenticated());
    assert_eq!(crate::routes::post_login_target(Some("/profile"), &config), "/profile");

    sign_out(&store).unwrap();
    assert!(!reader.is_authenticated());
}
