//! Integration tests for the session store.

use sentinel_core::models::AuthUser;
use sentinel_session::credentials::{CredentialStore, AUTH_TOKEN_KEY, AUTH_USER_KEY};
use sentinel_session::{FileCredentialStore, MemoryCredentialStore, SessionStore};

fn analyst() -> AuthUser {
    AuthUser {
        user_id: "u42".into(),
        username: "analyst".into(),
    }
}

#[test]
fn login_authenticates_and_persists_both_entries() {
    let session = SessionStore::new(MemoryCredentialStore::new());
    session.login("tok-123".into(), analyst()).unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("tok-123"));
    assert_eq!(session.auth_user(), Some(analyst()));
}

#[test]
fn login_then_restore_survives_reload() {
    let storage = MemoryCredentialStore::new();
    {
        let session = SessionStore::new(&storage);
        session.login("tok-123".into(), analyst()).unwrap();
    }

    // A fresh store over the same storage simulates a page reload.
    let session = SessionStore::new(&storage);
    assert!(!session.is_authenticated());
    session.restore();

    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("tok-123"));
    assert_eq!(session.auth_user(), Some(analyst()));
}

#[test]
fn restore_with_only_token_clears_both_entries() {
    let storage = MemoryCredentialStore::new();
    storage.set(AUTH_TOKEN_KEY, "tok-123").unwrap();

    let session = SessionStore::new(&storage);
    session.restore();

    assert!(!session.is_authenticated());
    assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get(AUTH_USER_KEY).unwrap(), None);
}

#[test]
fn restore_with_only_user_clears_both_entries() {
    let storage = MemoryCredentialStore::new();
    storage
        .set(AUTH_USER_KEY, "{\"userId\":\"u42\",\"username\":\"analyst\"}")
        .unwrap();

    let session = SessionStore::new(&storage);
    session.restore();

    assert!(!session.is_authenticated());
    assert_eq!(storage.get(AUTH_USER_KEY).unwrap(), None);
}

#[test]
fn restore_with_malformed_user_degrades_to_logged_out() {
    let storage = MemoryCredentialStore::new();
    storage.set(AUTH_TOKEN_KEY, "tok-123").unwrap();
    storage.set(AUTH_USER_KEY, "not json {{").unwrap();

    let session = SessionStore::new(&storage);
    session.restore();

    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
    assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get(AUTH_USER_KEY).unwrap(), None);
}

#[test]
fn restore_is_idempotent() {
    let storage = MemoryCredentialStore::new();
    let session = SessionStore::new(&storage);
    session.login("tok-123".into(), analyst()).unwrap();

    session.restore();
    session.restore();

    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("tok-123"));
}

#[test]
fn logout_clears_state_and_storage() {
    let storage = MemoryCredentialStore::new();
    let session = SessionStore::new(&storage);
    session.login("tok-123".into(), analyst()).unwrap();

    session.logout();

    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
    assert!(session.auth_user().is_none());
    assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get(AUTH_USER_KEY).unwrap(), None);
}

#[test]
fn invalidate_behaves_like_logout() {
    let storage = MemoryCredentialStore::new();
    let session = SessionStore::new(&storage);
    session.login("tok-123".into(), analyst()).unwrap();

    session.invalidate();

    assert!(!session.is_authenticated());
    assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap(), None);
}

#[test]
fn file_store_round_trips_across_instances() {
    let dir = tempfile::tempdir().unwrap();

    let session = SessionStore::new(FileCredentialStore::new(dir.path()));
    session.login("tok-123".into(), analyst()).unwrap();

    let reopened = SessionStore::new(FileCredentialStore::new(dir.path()));
    reopened.restore();

    assert!(reopened.is_authenticated());
    assert_eq!(reopened.auth_user(), Some(analyst()));
}
