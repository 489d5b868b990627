//! Authentication session and token storage.
//!
//! The bearer token lives in a [`Session`] that callers create and hand to
//! the client. Where the token is persisted between runs is decided by the
//! [`TokenStore`] the session is built with.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Persistent home for one bearer token.
pub trait TokenStore {
    /// The stored token, if any.
    fn load(&self) -> io::Result<Option<String>>;
    fn save(&mut self, token: &str) -> io::Result<()>;
    fn clear(&mut self) -> io::Result<()>;
}

/// Keeps the token in memory only. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.token.clone())
    }

    fn save(&mut self, token: &str) -> io::Result<()> {
        self.token = Some(token.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.token = None;
        Ok(())
    }
}

/// Stores the token as the sole contents of a file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&mut self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, token)
    }

    fn clear(&mut self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// The caller's authentication state: the current token plus its store.
#[derive(Debug)]
pub struct Session<S: TokenStore> {
    store: S,
    token: Option<String>,
}

impl<S: TokenStore> Session<S> {
    /// Start a session with whatever token the store already holds.
    pub fn restore(store: S) -> Result<Self> {
        let token = store.load()?;
        if token.is_some() {
            log::debug!("Restored stored bearer token");
        }
        Ok(Self { store, token })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Adopt a new token and persist it.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        self.store.save(&token)?;
        self.token = Some(token);
        Ok(())
    }

    /// Forget the token here and in the store.
    pub fn clear(&mut self) -> Result<()> {
        self.token = None;
        self.store.clear()?;
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl Session<MemoryTokenStore> {
    /// Unauthenticated in-memory session.
    pub fn anonymous() -> Self {
        Self {
            store: MemoryTokenStore::new(),
            token: None,
        }
    }
}
