//! Persisted login session.
//!
//! The session lives in a single slot: one JSON file under the configured
//! session directory, overwritten on each login and removed on logout. API
//! clients never read the slot directly; they are handed a [`SessionContext`]
//! which owns the store for the lifetime of the application.

use crate::constants::SESSION_STORAGE_KEY;
use crate::entities::Session;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Refusing to store a session without a token")]
    Incomplete,
}

/// Storage slot for the current session.
pub trait SessionStore: Send + Sync {
    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Returns the stored session, or `None` when absent or unreadable.
    fn get(&self) -> Option<Session>;

    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }

    /// Drops the stored session. Clearing an empty slot is not an error.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Session slot backed by `<dir>/auth-user.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            path: directory.as_ref().join(format!("{}.json", SESSION_STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionError> {
        if !session.is_complete() {
            return Err(SessionError::Incomplete);
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write-then-rename so a reader never sees a half-written file.
        let content = serde_json::to_vec_pretty(session)?;
        let temp = self.temp_path();
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn get(&self) -> Option<Session> {
        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Could not read session file {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_slice::<Session>(&content) {
            Ok(session) if session.is_complete() => Some(session),
            Ok(_) => {
                log::warn!("Ignoring stored session without a token");
                None
            }
            Err(e) => {
                log::warn!("Ignoring corrupt session file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process session slot, used for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionError> {
        if !session.is_complete() {
            return Err(SessionError::Incomplete);
        }
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(session.clone());
        }
        Ok(())
    }

    fn get(&self) -> Option<Session> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
        Ok(())
    }
}

/// Owning handle on the session slot, shared by every API client.
///
/// Cloning is cheap; every clone observes the same slot.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    /// Called once at startup; reports whether a previous session was restored.
    pub fn init(&self) -> Option<Session> {
        let restored = self.store.get();
        match &restored {
            Some(session) => log::info!("Restored session for user {}", session.id),
            None => log::info!("No stored session, starting signed out"),
        }
        restored
    }

    pub fn login(&self, session: &Session) -> Result<(), SessionError> {
        self.store.save(session)?;
        log::info!("Signed in as user {}", session.id);
        Ok(())
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.clear()?;
        log::info!("Signed out");
        Ok(())
    }

    pub fn current(&self) -> Option<Session> {
        self.store.get()
    }

    /// Bearer token of the current session, read fresh from the slot.
    pub fn token(&self) -> Option<String> {
        self.store.get().map(|s| s.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }
}
