//! Local Storage
//!
//! A small string key/value store that survives restarts, plus typed helpers
//! for the two keys the app keeps: the session `token` and the `books` cache.
//!
//! `FileStorage` keeps the whole map in memory and rewrites its JSON file on
//! every change. Only the UI thread writes, so there is no locking.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::shared::book::Book;
use crate::shared::error::ClientError;

/// Key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Key holding the JSON array of created books
pub const BOOKS_KEY: &str = "books";

/// String key/value persistence
pub trait Storage: Send {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: String) -> Result<(), ClientError>;
    fn remove_item(&mut self, key: &str) -> Result<(), ClientError>;
}

/// In-memory store, used by tests and as a fallback when the file store
/// cannot be opened.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), ClientError> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ClientError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let path = path.into();
        let items = match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), keys = items.len(), "opened local storage");
        Ok(Self { path, items })
    }

    /// Open the store at `path`, moving an unreadable file aside to
    /// `<name>.corrupt` and starting empty instead of failing.
    pub fn open_or_recover(path: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let path = path.into();
        match Self::open(&path) {
            Err(ClientError::Serialization { message }) => {
                let aside = sibling(&path, "corrupt");
                tracing::warn!(path = %path.display(), error = %message, "local storage unreadable, moving it aside");
                std::fs::rename(&path, &aside)?;
                Ok(Self {
                    path,
                    items: BTreeMap::new(),
                })
            }
            other => other,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.items)?;
        let staging = sibling(&self.path, "tmp");
        std::fs::write(&staging, contents)?;
        std::fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), ClientError> {
        self.items.insert(key.to_string(), value);
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ClientError> {
        if self.items.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// `path` with `.suffix` appended to its file name
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

/// Stored token, if any. An empty value counts as no token.
pub fn load_token(storage: &dyn Storage) -> Option<String> {
    storage.get_item(TOKEN_KEY).filter(|token| !token.is_empty())
}

pub fn save_token(storage: &mut dyn Storage, token: &str) -> Result<(), ClientError> {
    storage.set_item(TOKEN_KEY, token.to_string())
}

pub fn clear_token(storage: &mut dyn Storage) -> Result<(), ClientError> {
    storage.remove_item(TOKEN_KEY)
}

/// Cached books in insertion order. An unreadable cache reads as empty.
pub fn load_books(storage: &dyn Storage) -> Vec<Book> {
    let Some(raw) = storage.get_item(BOOKS_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str::<Option<Vec<Book>>>(&raw) {
        Ok(books) => books.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable book cache");
            Vec::new()
        }
    }
}

/// Append one book to the cache
pub fn append_book(storage: &mut dyn Storage, book: &Book) -> Result<(), ClientError> {
    let mut books = load_books(storage);
    books.push(book.clone());
    storage.set_item(BOOKS_KEY, serde_json::to_string(&books)?)
}
