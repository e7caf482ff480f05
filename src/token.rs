//! Token storage for the HomeBox client
//!
//! The backend issues an opaque bearer token on login. This module owns how
//! that token is held between sessions: a [`TokenStore`] implementation is
//! injected into the client, so independent sessions (and tests) never share
//! ambient global state.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::Result;

/// Strip a leading `Bearer ` prefix, case-insensitively.
///
/// The backend hands the token out with the prefix already attached; stored
/// tokens are always the raw credential so the Authorization header never
/// ends up with a doubled prefix.
pub fn normalize_token(token: &str) -> String {
    let trimmed = token.trim_start();
    if let Some(prefix) = trimmed.get(..6) {
        if prefix.eq_ignore_ascii_case("bearer") {
            let rest = &trimmed[6..];
            if rest.starts_with(char::is_whitespace) {
                return rest.trim_start().to_string();
            }
        }
    }
    trimmed.to_string()
}

/// Persistent storage for the session token.
///
/// `load` returning `None` means unauthenticated.
pub trait TokenStore: Send + Sync {
    /// Read the currently persisted token, if any
    fn load(&self) -> Result<Option<String>>;

    /// Persist a token, replacing any previous one
    fn store(&self, token: &str) -> Result<()>;

    /// Remove the persisted token
    fn clear(&self) -> Result<()>;
}

/// In-memory token store, the default. Nothing survives the process.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.read().expect("token lock poisoned").clone())
    }

    fn store(&self, token: &str) -> Result<()> {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write().expect("token lock poisoned") = None;
        Ok(())
    }
}

/// File-backed token store: one file holding the raw token string.
///
/// Absence of the file means no session. This is the desktop analogue of
/// the single localStorage key the web client keeps.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim().to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token))
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_bearer_prefix() {
        assert_eq!(normalize_token("Bearer abc123"), "abc123");
        assert_eq!(normalize_token("bearer abc123"), "abc123");
        assert_eq!(normalize_token("BEARER  abc123"), "abc123");
        assert_eq!(normalize_token("abc123"), "abc123");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_token("Bearer abc123");
        assert_eq!(normalize_token(&once), once);
    }

    #[test]
    fn normalize_keeps_bearer_like_tokens() {
        // A token that merely starts with the letters "bearer" is not a prefix.
        assert_eq!(normalize_token("bearerish-token"), "bearerish-token");
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.store("tok").unwrap();
        assert_eq!(store.load().unwrap(), Some("tok".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("auth_token"));

        assert_eq!(store.load().unwrap(), None);

        store.store("tok").unwrap();
        assert_eq!(store.load().unwrap(), Some("tok".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // clearing an already absent token is not an error
        store.clear().unwrap();
    }
}
