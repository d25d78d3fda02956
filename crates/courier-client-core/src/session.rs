//! Injectable session store.
//!
//! The console keeps exactly two durable values between requests: the auth
//! token and the currently selected namespace. Call sites never read ambient
//! storage; they go through a [`SessionStore`] handed to them at
//! construction, so the lifecycle (init, explicit setters, teardown on
//! logout) stays in one place.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session file read failed: {0}")]
    Read(std::io::Error),
    #[error("session file write failed: {0}")]
    Write(std::io::Error),
    #[error("session file is not valid JSON: {0}")]
    Corrupt(serde_json::Error),
}

pub trait SessionStore: Send + Sync {
    fn auth_token(&self) -> Option<String>;
    fn set_auth_token(&self, token: &str) -> Result<(), SessionError>;
    fn clear_auth_token(&self) -> Result<(), SessionError>;

    fn current_namespace(&self) -> Option<String>;
    fn set_current_namespace(&self, name: &str) -> Result<(), SessionError>;
    fn clear_current_namespace(&self) -> Result<(), SessionError>;

    /// Logout teardown: removes both the token and the namespace selection.
    fn clear(&self) -> Result<(), SessionError> {
        self.clear_auth_token()?;
        self.clear_current_namespace()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_namespace: Option<String>,
}

/// In-process store for tests and embedding hosts that manage their own
/// persistence.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    state: Mutex<SessionState>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn auth_token(&self) -> Option<String> {
        self.lock().auth_token.clone()
    }

    fn set_auth_token(&self, token: &str) -> Result<(), SessionError> {
        self.lock().auth_token = Some(token.to_string());
        Ok(())
    }

    fn clear_auth_token(&self) -> Result<(), SessionError> {
        self.lock().auth_token = None;
        Ok(())
    }

    fn current_namespace(&self) -> Option<String> {
        self.lock().current_namespace.clone()
    }

    fn set_current_namespace(&self, name: &str) -> Result<(), SessionError> {
        self.lock().current_namespace = Some(name.to_string());
        Ok(())
    }

    fn clear_current_namespace(&self) -> Result<(), SessionError> {
        self.lock().current_namespace = None;
        Ok(())
    }
}

/// JSON-file-backed store, the console's stand-in for browser local storage.
///
/// Values are plain strings with no client-side expiry; the server decides
/// when a token is stale by answering 401. A missing file reads as an empty
/// session.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    state: Mutex<SessionState>,
}

impl FileSessionStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let state = load_state(&path)?;
        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn mutate(
        &self,
        apply: impl FnOnce(&mut SessionState),
    ) -> Result<(), SessionError> {
        let mut state = self.lock();
        apply(&mut state);
        persist_state(&self.path, &state)
    }
}

impl SessionStore for FileSessionStore {
    fn auth_token(&self) -> Option<String> {
        self.lock().auth_token.clone()
    }

    fn set_auth_token(&self, token: &str) -> Result<(), SessionError> {
        self.mutate(|state| state.auth_token = Some(token.to_string()))
    }

    fn clear_auth_token(&self) -> Result<(), SessionError> {
        self.mutate(|state| state.auth_token = None)
    }

    fn current_namespace(&self) -> Option<String> {
        self.lock().current_namespace.clone()
    }

    fn set_current_namespace(&self, name: &str) -> Result<(), SessionError> {
        self.mutate(|state| state.current_namespace = Some(name.to_string()))
    }

    fn clear_current_namespace(&self) -> Result<(), SessionError> {
        self.mutate(|state| state.current_namespace = None)
    }
}

fn load_state(path: &Path) -> Result<SessionState, SessionError> {
    match fs::read(path) {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(SessionError::Corrupt),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            Ok(SessionState::default())
        }
        Err(error) => Err(SessionError::Read(error)),
    }
}

fn persist_state(path: &Path, state: &SessionState) -> Result<(), SessionError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(SessionError::Write)?;
    }
    let bytes = serde_json::to_vec_pretty(state).map_err(SessionError::Corrupt)?;
    fs::write(path, bytes).map_err(SessionError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemorySessionStore::new();
        assert_eq!(store.auth_token(), None);
        assert_eq!(store.current_namespace(), None);

        store.set_auth_token("tok_1").expect("set token");
        store.set_current_namespace("prod").expect("set namespace");
        assert_eq!(store.auth_token().as_deref(), Some("tok_1"));
        assert_eq!(store.current_namespace().as_deref(), Some("prod"));

        store.clear_auth_token().expect("clear token");
        assert_eq!(store.auth_token(), None);
        assert_eq!(store.current_namespace().as_deref(), Some("prod"));
    }

    #[test]
    fn clear_removes_token_and_namespace() {
        let store = MemorySessionStore::new();
        store.set_auth_token("tok_1").expect("set token");
        store.set_current_namespace("prod").expect("set namespace");

        store.clear().expect("clear session");
        assert_eq!(store.auth_token(), None);
        assert_eq!(store.current_namespace(), None);
    }

    #[test]
    fn file_store_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store =
            FileSessionStore::open(dir.path().join("session.json")).expect("open store");
        assert_eq!(store.auth_token(), None);
        assert_eq!(store.current_namespace(), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path).expect("open store");
        store.set_auth_token("tok_1").expect("set token");
        store.set_current_namespace("ns1").expect("set namespace");
        drop(store);

        let reopened = FileSessionStore::open(&path).expect("reopen store");
        assert_eq!(reopened.auth_token().as_deref(), Some("tok_1"));
        assert_eq!(reopened.current_namespace().as_deref(), Some("ns1"));
    }

    #[test]
    fn file_store_clear_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path).expect("open store");
        store.set_auth_token("tok_1").expect("set token");
        store.clear().expect("clear session");
        drop(store);

        let reopened = FileSessionStore::open(&path).expect("reopen store");
        assert_eq!(reopened.auth_token(), None);
        assert_eq!(reopened.current_namespace(), None);
    }

    #[test]
    fn file_store_rejects_corrupt_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not json").expect("write garbage");

        let result = FileSessionStore::open(&path);
        assert!(matches!(result, Err(SessionError::Corrupt(_))));
    }
}
