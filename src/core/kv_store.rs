// src/core/kv_store.rs
//! String-keyed slots holding whole JSON values

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::error::AssistantResult;

/// Schema version written with every value. Bump when a stored shape
/// changes and teach `ProfileStore` to migrate the older one.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// A stored JSON value. Version 0 marks data written before versioning.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredValue {
    pub json: String,
    pub schema_version: u32,
    pub updated_at: DateTime<Utc>,
}

impl StoredValue {
    pub fn current(json: String) -> Self {
        Self {
            json,
            schema_version: CURRENT_SCHEMA_VERSION,
            updated_at: Utc::now(),
        }
    }
}

/// Whole-value read and overwrite. No merge, no compare-and-swap: the last
/// `put` for a key wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> AssistantResult<Option<StoredValue>>;

    async fn put(&self, key: &str, value: StoredValue) -> AssistantResult<()>;

    async fn delete(&self, key: &str) -> AssistantResult<bool>;
}

/// Process-local store, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, StoredValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> AssistantResult<Option<StoredValue>> {
        Ok(self.slots.lock().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: StoredValue) -> AssistantResult<()> {
        self.slots.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> AssistantResult<bool> {
        Ok(self.slots.lock().await.remove(key).is_some())
    }
}
