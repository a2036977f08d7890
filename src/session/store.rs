//! Found-word persistence
//!
//! A minimal key-value capability so the core stays testable without any
//! particular storage backend. Keys identify puzzles
//! (`"{center}:{sorted letters}:found"`), values are JSON arrays of found
//! words. A missing key is an empty set, never an error.

use rustc_hash::FxHashMap;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Pluggable key-value storage for found words
pub trait WordStore {
    /// Raw value for a key, if present
    fn get(&self, key: &str) -> Option<String>;

    /// Store a raw value under a key
    fn set(&mut self, key: &str, value: &str);
}

/// Decode a stored value into a found-word list
///
/// Absent or malformed values decode to an empty list.
#[must_use]
pub fn load_found(store: &dyn WordStore, key: &str) -> Vec<String> {
    store
        .get(key)
        .and_then(|value| serde_json::from_str(&value).ok())
        .unwrap_or_default()
}

/// Encode and store a found-word list
pub fn save_found(store: &mut dyn WordStore, key: &str, found: &[String]) {
    // Serializing a Vec<String> cannot fail
    let value = serde_json::to_string(found).unwrap_or_else(|_| "[]".to_string());
    store.set(key, &value);
}

/// In-memory store, used by tests and one-shot commands
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// File-backed store: one JSON object per file, key -> raw value
///
/// The whole map is loaded at open and rewritten on every `set`, which is
/// plenty for one entry per puzzle per day.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: FxHashMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`, creating an empty one if the file is missing
    ///
    /// # Errors
    /// Returns an I/O error if the file exists but cannot be read, or holds
    /// something other than a JSON object.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(content) => parse_entries(&content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => FxHashMap::default(),
            Err(e) => return Err(e),
        };

        Ok(Self { path, entries })
    }

    fn flush(&self) -> io::Result<()> {
        let map: serde_json::Map<String, Value> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();

        fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(map))?)
    }
}

fn parse_entries(content: &str) -> io::Result<FxHashMap<String, String>> {
    let value: Value = serde_json::from_str(content)?;

    let object = value
        .as_object()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "store file is not a JSON object"))?;

    Ok(object
        .iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect())
}

impl WordStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());

        if let Err(e) = self.flush() {
            eprintln!("warning: could not persist found words: {e}");
        }
    }
}
