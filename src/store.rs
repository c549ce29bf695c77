//! File-backed key/value storage standing in for browser `localStorage`.
//!
//! The file holds one JSON object of string keys to string values. The
//! session token lives under `token`, like the web client.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use auth::config::TOKEN_STORAGE_KEY;
use auth::{LoginError, SessionToken, TokenStore};

pub const DEFAULT_STORAGE_PATH: &str = ".umkm-admin/local-storage.json";

pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<BTreeMap<String, String>, LoginError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(storage(&self.path, e)),
        };
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&text).map_err(|e| storage(&self.path, e))
    }

    fn write_items(&self, items: &BTreeMap<String, String>) -> Result<(), LoginError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| storage(parent, e))?;
        }
        let json = serde_json::to_string_pretty(items).map_err(|e| storage(&self.path, e))?;
        std::fs::write(&self.path, json).map_err(|e| storage(&self.path, e))
    }
}

fn storage(path: &Path, e: impl std::fmt::Display) -> LoginError {
    LoginError::Storage(format!("{}: {e}", path.display()))
}

impl TokenStore for FileTokenStore {
    fn save(&self, token: &SessionToken) -> Result<(), LoginError> {
        let mut items = self.read_items()?;
        items.insert(TOKEN_STORAGE_KEY.to_owned(), token.as_str().to_owned());
        self.write_items(&items)?;
        tracing::debug!(path = %self.path.display(), "session token saved");
        Ok(())
    }

    fn load(&self) -> Option<SessionToken> {
        match self.read_items() {
            Ok(items) => items.get(TOKEN_STORAGE_KEY).cloned().map(SessionToken::new),
            Err(e) => {
                tracing::warn!(error = %e, "storage unreadable");
                None
            }
        }
    }

    fn clear(&self) -> Result<(), LoginError> {
        let mut items = self.read_items()?;
        if items.remove(TOKEN_STORAGE_KEY).is_some() {
            self.write_items(&items)?;
        }
        Ok(())
    }
}
