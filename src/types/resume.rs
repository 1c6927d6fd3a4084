// src/types/resume.rs
//! Resume documents and the content snapshot they render from

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::types::entry::EntryList;
use crate::types::profile::{EducationEntry, SkillSet, WorkEntry};

// ===== Template Identifier =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TemplateId {
    #[default]
    Professional,
    Modern,
    Creative,
    Minimal,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::Professional,
        TemplateId::Modern,
        TemplateId::Creative,
        TemplateId::Minimal,
    ];

    /// Resolve a stored or user-supplied identifier. Anything unrecognised
    /// resolves to `Professional`.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier.trim().to_lowercase().as_str() {
            "professional" => TemplateId::Professional,
            "modern" => TemplateId::Modern,
            "creative" => TemplateId::Creative,
            "minimal" => TemplateId::Minimal,
            _ => TemplateId::Professional,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Professional => "professional",
            TemplateId::Modern => "modern",
            TemplateId::Creative => "creative",
            TemplateId::Minimal => "minimal",
        }
    }

    /// Creative and minimal only render a placeholder for now.
    pub fn is_implemented(&self) -> bool {
        matches!(self, TemplateId::Professional | TemplateId::Modern)
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateId::Professional => "Single-column professional layout",
            TemplateId::Modern => "Sidebar and main column layout",
            TemplateId::Creative => "Creative layout (preview only)",
            TemplateId::Minimal => "Minimal layout (preview only)",
        }
    }
}

impl From<String> for TemplateId {
    fn from(identifier: String) -> Self {
        TemplateId::from_identifier(&identifier)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Resume Content =====

/// Personal block of a resume. Every field is a plain string; absent
/// profile values become "".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumePersonal {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub linkedin: String,
    pub website: String,
    pub summary: String,
}

impl ResumePersonal {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomSectionItem {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<CustomSectionItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeContent {
    pub personal: ResumePersonal,
    pub work_experience: EntryList<WorkEntry>,
    pub education: EntryList<EducationEntry>,
    pub skills: SkillSet,
    pub custom_sections: Vec<CustomSection>,
}

// ===== Resume Document =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub id: Uuid,
    pub template: TemplateId,
    /// `None` until first accessed through the builder.
    pub content: Option<ResumeContent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeDocument {
    pub fn new(template: TemplateId) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            template,
            content: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.content.is_some()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_identifier_falls_back_to_professional() {
        assert_eq!(TemplateId::from_identifier("modern"), TemplateId::Modern);
        assert_eq!(TemplateId::from_identifier(" Minimal "), TemplateId::Minimal);
        assert_eq!(TemplateId::from_identifier("fancy"), TemplateId::Professional);
        assert_eq!(TemplateId::from_identifier(""), TemplateId::Professional);
    }

    #[test]
    fn test_template_deserializes_with_fallback() {
        let t: TemplateId = serde_json::from_str("\"creative\"").unwrap();
        assert_eq!(t, TemplateId::Creative);
        let t: TemplateId = serde_json::from_str("\"retro\"").unwrap();
        assert_eq!(t, TemplateId::Professional);
        assert_eq!(serde_json::to_string(&TemplateId::Modern).unwrap(), "\"modern\"");
    }

    #[test]
    fn test_full_name_trims_missing_parts() {
        let personal = ResumePersonal {
            first_name: "Ada".to_string(),
            ..Default::default()
        };
        assert_eq!(personal.full_name(), "Ada");
    }

    #[test]
    fn test_new_document_is_uninitialized() {
        let doc = ResumeDocument::new(TemplateId::Modern);
        assert!(!doc.is_initialized());
        assert_eq!(doc.created_at, doc.updated_at);
    }
}
