// src/core/fs_ops.rs
//! File system helpers for config, database and resume export paths

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub struct FsOps;

impl FsOps {
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        if !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            info!("Created directory: {}", path.display());
        }
        Ok(())
    }

    pub async fn read_file_safe(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Write a file, creating its parent directory first
    pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent).await?;
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        info!("Written file: {}", path.display());
        Ok(())
    }

    pub fn normalize_path(base: &Path, relative: &Path) -> PathBuf {
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            base.join(relative)
        }
    }

    /// File name for an exported resume, e.g. `ada-lovelace_modern.html`
    pub fn export_file_name(full_name: &str, template: &str) -> String {
        let slug = Self::slugify(full_name);
        let slug = if slug.is_empty() { "resume".to_string() } else { slug };
        format!("{}_{}.html", slug, template)
    }

    pub fn slugify(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(FsOps::slugify("  Ada  Lovelace "), "ada-lovelace");
        assert_eq!(FsOps::slugify("Jean-Paul O'Neil"), "jean-paul-o-neil");
        assert_eq!(FsOps::slugify("!!!"), "");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            FsOps::export_file_name("Ada Lovelace", "modern"),
            "ada-lovelace_modern.html"
        );
        assert_eq!(FsOps::export_file_name("", "minimal"), "resume_minimal.html");
    }

    #[test]
    fn test_normalize_path() {
        let base = Path::new("/srv/jobdesk");
        assert_eq!(
            FsOps::normalize_path(base, Path::new("data/db.sqlite")),
            PathBuf::from("/srv/jobdesk/data/db.sqlite")
        );
        assert_eq!(
            FsOps::normalize_path(base, Path::new("/tmp/x")),
            PathBuf::from("/tmp/x")
        );
    }

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out").join("resume.html");
        FsOps::write_file_safe(&target, "<p>hi</p>").await.unwrap();
        assert_eq!(FsOps::read_file_safe(&target).await.unwrap(), "<p>hi</p>");
    }
}
