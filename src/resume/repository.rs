// src/resume/repository.rs
//! Persisted resume documents

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{AssistantError, AssistantResult};
use crate::types::resume::{ResumeContent, ResumeDocument, TemplateId};

#[derive(Debug, sqlx::FromRow)]
struct ResumeRow {
    id: String,
    template: String,
    content: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ResumeRow {
    fn into_document(self) -> AssistantResult<ResumeDocument> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| AssistantError::Internal(anyhow::anyhow!("Bad resume id {}: {}", self.id, e)))?;

        Ok(ResumeDocument {
            id,
            template: TemplateId::from_identifier(&self.template),
            content: parse_content(&self.id, self.content.as_deref()),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Absent, blank, `{}` or unreadable content all mean "not yet initialized".
fn parse_content(id: &str, raw: Option<&str>) -> Option<ResumeContent> {
    let raw = raw?.trim();
    if raw.is_empty() || raw == "{}" || raw == "null" {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!("Resume {} content is unreadable ({}), will reinitialize", id, e);
            None
        }
    }
}

pub struct ResumeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ResumeRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, template: TemplateId) -> AssistantResult<ResumeDocument> {
        let document = ResumeDocument::new(template);
        self.save(&document).await?;
        info!("Created resume {} with {} template", document.id, template);
        Ok(document)
    }

    pub async fn get(&self, id: Uuid) -> AssistantResult<Option<ResumeDocument>> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            SELECT id, template, content, created_at, updated_at
            FROM resumes
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool)
        .await?;

        row.map(ResumeRow::into_document).transpose()
    }

    pub async fn require(&self, id: Uuid) -> AssistantResult<ResumeDocument> {
        self.get(id)
            .await?
            .ok_or_else(|| AssistantError::NotFound(format!("resume {}", id)))
    }

    /// Insert or overwrite the whole document
    pub async fn save(&self, document: &ResumeDocument) -> AssistantResult<()> {
        let content = document
            .content
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(
            r#"
            INSERT INTO resumes (id, template, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                template = excluded.template,
                content = excluded.content,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(document.id.to_string())
        .bind(document.template.as_str())
        .bind(content)
        .bind(document.created_at)
        .bind(document.updated_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    pub async fn list(&self) -> AssistantResult<Vec<ResumeDocument>> {
        let rows = sqlx::query_as::<_, ResumeRow>(
            r#"
            SELECT id, template, content, created_at, updated_at
            FROM resumes
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(ResumeRow::into_document).collect()
    }

    pub async fn delete(&self, id: Uuid) -> AssistantResult<bool> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted resume {}", id);
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Database;

    #[tokio::test]
    async fn test_create_get_and_list() {
        let db = Database::in_memory().await.unwrap();
        let repo = ResumeRepository::new(db.pool());

        let first = repo.create(TemplateId::Modern).await.unwrap();
        let second = repo.create(TemplateId::Minimal).await.unwrap();

        let loaded = repo.require(first.id).await.unwrap();
        assert_eq!(loaded.template, TemplateId::Modern);
        assert!(loaded.content.is_none());

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|d| d.id == second.id));
    }

    #[tokio::test]
    async fn test_save_persists_content() {
        let db = Database::in_memory().await.unwrap();
        let repo = ResumeRepository::new(db.pool());

        let mut document = repo.create(TemplateId::Professional).await.unwrap();
        let mut content = ResumeContent::default();
        content.set_summary("Hello");
        document.content = Some(content);
        document.template = TemplateId::Creative;
        repo.save(&document).await.unwrap();

        let loaded = repo.require(document.id).await.unwrap();
        assert_eq!(loaded.template, TemplateId::Creative);
        assert_eq!(loaded.content.unwrap().personal.summary, "Hello");
    }

    #[tokio::test]
    async fn test_unknown_template_and_empty_content_in_storage() {
        let db = Database::in_memory().await.unwrap();
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO resumes (id, template, content, created_at, updated_at) VALUES (?, 'retro', '{}', ?, ?)",
        )
        .bind(id.to_string())
        .bind(Utc::now())
        .bind(Utc::now())
        .execute(db.pool())
        .await
        .unwrap();

        let loaded = ResumeRepository::new(db.pool()).require(id).await.unwrap();
        assert_eq!(loaded.template, TemplateId::Professional);
        assert!(loaded.content.is_none());
    }

    #[tokio::test]
    async fn test_delete_and_missing() {
        let db = Database::in_memory().await.unwrap();
        let repo = ResumeRepository::new(db.pool());
        let document = repo.create(TemplateId::Modern).await.unwrap();

        assert!(repo.delete(document.id).await.unwrap());
        assert!(!repo.delete(document.id).await.unwrap());
        let err = repo.require(document.id).await.unwrap_err();
        assert!(matches!(err, AssistantError::NotFound(_)));
    }
}
