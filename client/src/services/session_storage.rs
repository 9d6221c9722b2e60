//! Session storage implementations
//!
//! File-backed storage for hosts with a durable session directory, an
//! in-memory map for tests and degraded operation, and a null backend
//! for hosts with no storage at all.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;

use crate::error::ClientResult;
use crate::traits::SessionStorage;

/// Durable storage keeping one file per slot under a base directory
pub struct FileSessionStorage {
    base_dir: PathBuf,
}

impl FileSessionStorage {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn read(&self, key: &str) -> ClientResult<Option<String>> {
        match fs::read_to_string(self.slot_path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: &str, value: &str) -> ClientResult<()> {
        fs::create_dir_all(&self.base_dir).await?;
        fs::write(self.slot_path(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> ClientResult<()> {
        match fs::remove_file(self.slot_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory storage with no durability
pub struct MemorySessionStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemorySessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn read(&self, key: &str) -> ClientResult<Option<String>> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> ClientResult<()> {
        self.slots
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> ClientResult<()> {
        self.slots.write().await.remove(key);
        Ok(())
    }
}

/// Storage backend for hosts without durable session storage
///
/// Reads nothing and persists nothing, so callers degrade to memory-only
/// operation without branching on the environment.
pub struct NullSessionStorage;

#[async_trait]
impl SessionStorage for NullSessionStorage {
    async fn read(&self, _key: &str) -> ClientResult<Option<String>> {
        Ok(None)
    }

    async fn write(&self, _key: &str, _value: &str) -> ClientResult<()> {
        Ok(())
    }

    async fn remove(&self, _key: &str) -> ClientResult<()> {
        Ok(())
    }
}
