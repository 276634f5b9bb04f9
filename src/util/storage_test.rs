#![cfg(not(feature = "csr"))]

use super::*;
use crate::state::session::SessionReader;

#[test]
fn key_is_kept() {
    assert_eq!(LocalStorageTokenStore::new("token").key(), "token");
}

#[test]
fn reads_nothing_outside_the_browser() {
    let store = LocalStorageTokenStore::new("token");
    assert!(store.get().is_none());
    assert!(!SessionReader::new(store).is_authenticated());
}

#[test]
fn writes_report_unavailable_outside_the_browser() {
    let store = LocalStorageTokenStore::new("token");
    assert_eq!(store.set("abc123"), Err(StoreError::Unavailable));
    assert_eq!(store.clear(), Err(StoreError::Unavailable));
}
