// src/core/mod.rs
//! Configuration, file system and storage plumbing

pub mod config_manager;
pub mod database;
pub mod fs_ops;
pub mod kv_store;

pub use config_manager::ConfigManager;
pub use database::{Database, SqliteKvStore};
pub use fs_ops::FsOps;
pub use kv_store::{KeyValueStore, MemoryStore, StoredValue, CURRENT_SCHEMA_VERSION};
