use pretty_assertions::assert_eq;
use std::sync::Arc;
use taskdeck::entities::Session;
use taskdeck::session::{FileSessionStore, MemorySessionStore, SessionContext, SessionError, SessionStore};
use tempfile::TempDir;

fn user() -> Session {
    Session::new(42, "abc", "ada@example.com").with_name("Ada")
}

#[test]
fn file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path());

    assert_eq!(store.get(), None);
    assert!(!store.is_authenticated());

    store.save(&user()).unwrap();
    assert_eq!(store.get(), Some(user()));
    assert!(store.is_authenticated());
    assert!(store.path().ends_with("auth-user.json"));

    store.clear().unwrap();
    assert_eq!(store.get(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn file_store_survives_a_new_instance() {
    let dir = TempDir::new().unwrap();
    FileSessionStore::new(dir.path()).save(&user()).unwrap();

    let reopened = FileSessionStore::new(dir.path());
    assert_eq!(reopened.get(), Some(user()));
}

#[test]
fn clearing_an_empty_store_is_fine() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().join("nested"));
    assert!(store.clear().is_ok());
}

#[test]
fn corrupt_file_reads_as_signed_out() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path());
    std::fs::write(store.path(), "{ not json").unwrap();

    assert_eq!(store.get(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn sessions_without_token_are_rejected() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path());

    let result = store.save(&Session::new(1, "  ", "a@b.c"));
    assert!(matches!(result, Err(SessionError::Incomplete)));
    assert!(!store.path().exists());

    let memory = MemorySessionStore::new();
    assert!(matches!(memory.save(&Session::new(1, "", "a@b.c")), Err(SessionError::Incomplete)));
}

#[test]
fn context_clones_share_one_slot() {
    let dir = TempDir::new().unwrap();
    let session = SessionContext::new(Arc::new(FileSessionStore::new(dir.path())));
    let other = session.clone();

    assert_eq!(session.init(), None);
    session.login(&user()).unwrap();
    assert!(other.is_authenticated());
    assert_eq!(other.token().as_deref(), Some("abc"));
    assert_eq!(other.current().map(|s| s.id), Some(42));

    other.logout().unwrap();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn memory_context_keeps_the_session_in_process() {
    let session = SessionContext::in_memory();
    assert_eq!(session.init(), None);
    session.login(&user()).unwrap();
    assert_eq!(session.init(), Some(user()));
}
