//! Persistence capability behind the board store.
//!
//! # Responsibility
//! - Define the key-value blob contract the store persists through.
//! - Provide the JSON codec helpers with the tolerant-load policy.
//!
//! # Invariants
//! - `load_or` never propagates a failure; it logs and falls back to the
//!   caller-supplied default.
//! - `save_json` keeps the failure path type-visible; the caller decides
//!   whether to log-and-continue.

use crate::db::DbError;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Key under which the column collection is persisted.
pub const COLUMNS_KEY: &str = "kanban-columns";
/// Key under which the task collection is persisted.
pub const TASKS_KEY: &str = "kanban-tasks";

pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage adapters and the blob codec.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Codec(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "storage payload codec error: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// Key-value blob storage contract.
///
/// Adapters move opaque strings; JSON encoding lives in the helpers below
/// so every backend persists the same shape.
pub trait Storage {
    /// Returns the stored payload for `key`, or `None` when absent.
    fn load(&self, key: &str) -> StorageResult<Option<String>>;
    /// Stores `payload` under `key`, replacing any previous value.
    fn save(&self, key: &str, payload: &str) -> StorageResult<()>;
}

/// Loads and decodes the value under `key`, falling back to `default`.
///
/// Absent keys, backend failures, and malformed payloads all degrade to
/// the default with a logged warning; this mirrors the tolerant read
/// contract of the board's original storage layer.
pub fn load_or<T, S, F>(storage: &S, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    S: Storage + ?Sized,
    F: FnOnce() -> T,
{
    match storage.load(key) {
        Ok(Some(payload)) => match serde_json::from_str(&payload) {
            Ok(value) => value,
            Err(err) => {
                warn!("event=storage_load module=storage key={key} status=malformed error={err}");
                default()
            }
        },
        Ok(None) => default(),
        Err(err) => {
            warn!("event=storage_load module=storage key={key} status=error error={err}");
            default()
        }
    }
}

/// Encodes `value` as JSON and stores it under `key`.
pub fn save_json<T, S>(storage: &S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize,
    S: Storage + ?Sized,
{
    let payload = serde_json::to_string(value)?;
    storage.save(key, &payload)
}
