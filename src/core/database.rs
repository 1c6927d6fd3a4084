// src/core/database.rs
//! SQLite connection management and the key-value table behind the profile store

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{debug, info};

use crate::core::kv_store::{KeyValueStore, StoredValue};
use crate::core::FsOps;
use crate::error::AssistantResult;

// ===== Core Database Connection Management =====

#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database file and run migrations
    pub async fn new(database_path: &Path) -> Result<Self> {
        if let Some(parent) = database_path.parent() {
            FsOps::ensure_dir_exists(parent).await?;
        }

        let database_url = format!("sqlite:{}?mode=rwc", database_path.display());
        let pool = SqlitePool::connect(&database_url).await.with_context(|| {
            format!("Failed to connect to database: {}", database_path.display())
        })?;

        info!(
            "Database connection established: {}",
            database_path.display()
        );

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Private in-memory database. A single pooled connection keeps every
    /// query on the same memory image.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory database")?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                schema_version INTEGER NOT NULL DEFAULT 0,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create kv_store table")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS resumes (
                id TEXT PRIMARY KEY NOT NULL,
                template TEXT NOT NULL,
                content TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create resumes table")?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_resumes_created_at ON resumes(created_at);")
            .execute(&self.pool)
            .await?;

        info!("Database migrations completed");
        Ok(())
    }

    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database health check failed")?;
        Ok(())
    }

    pub fn kv_store(&self) -> SqliteKvStore {
        SqliteKvStore::new(self.pool.clone())
    }
}

// ===== Key-Value Table =====

#[derive(Debug, sqlx::FromRow)]
struct KvRow {
    value: String,
    schema_version: i64,
    updated_at: DateTime<Utc>,
}

/// Versions past `u32::MAX` still read as "newer than supported";
/// negative ones read as legacy.
fn stored_version(raw: i64) -> u32 {
    if raw < 0 {
        0
    } else {
        u32::try_from(raw).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone)]
pub struct SqliteKvStore {
    pool: SqlitePool,
}

impl SqliteKvStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for SqliteKvStore {
    async fn get(&self, key: &str) -> AssistantResult<Option<StoredValue>> {
        let row = sqlx::query_as::<_, KvRow>(
            "SELECT value, schema_version, updated_at FROM kv_store WHERE key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| StoredValue {
            json: row.value,
            schema_version: stored_version(row.schema_version),
            updated_at: row.updated_at,
        }))
    }

    async fn put(&self, key: &str, value: StoredValue) -> AssistantResult<()> {
        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, schema_version, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                schema_version = excluded.schema_version,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(&value.json)
        .bind(i64::from(value.schema_version))
        .bind(value.updated_at)
        .execute(&self.pool)
        .await?;

        debug!("Stored key {} ({} bytes)", key, value.json.len());
        Ok(())
    }

    async fn delete(&self, key: &str) -> AssistantResult<bool> {
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
