// src/types/profile.rs
//! Profile records as they are persisted in the key-value store

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::types::entry::EntryList;

// ===== Personal Info =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
}

impl PersonalInfo {
    /// Overlay every field that is `Some` in `update`.
    pub fn merge(&mut self, update: PersonalInfo) {
        fn take(slot: &mut Option<String>, value: Option<String>) {
            if value.is_some() {
                *slot = value;
            }
        }

        take(&mut self.first_name, update.first_name);
        take(&mut self.last_name, update.last_name);
        take(&mut self.job_title, update.job_title);
        take(&mut self.email, update.email);
        take(&mut self.phone, update.phone);
        take(&mut self.address, update.address);
        take(&mut self.city, update.city);
        take(&mut self.state, update.state);
        take(&mut self.zip_code, update.zip_code);
        take(&mut self.linkedin, update.linkedin);
        take(&mut self.website, update.website);
        take(&mut self.summary, update.summary);
    }
}

// ===== Work & Education =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: String,
    /// Kept even when `current_job` is set; only display ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current_job: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub type WorkHistory = EntryList<WorkEntry>;
pub type EducationHistory = EntryList<EducationEntry>;

// ===== Skills =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Language,
    Tools,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Language,
        SkillCategory::Tools,
        SkillCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Language => "language",
            SkillCategory::Tools => "tools",
            SkillCategory::Other => "other",
        }
    }

    /// Label used in profile screens and the professional layout.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical Skills",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Language => "Languages",
            SkillCategory::Tools => "Tools & Software",
            SkillCategory::Other => "Other Skills",
        }
    }

    /// Shorter label for the modern layout's sidebar.
    pub fn short_label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Language => "Languages",
            SkillCategory::Tools => "Tools",
            SkillCategory::Other => "Other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown skill category: {}. Use one of technical, soft, language, tools, other",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
            Proficiency::Expert => "expert",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Proficiency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Proficiency::Beginner),
            "intermediate" => Ok(Proficiency::Intermediate),
            "advanced" => Ok(Proficiency::Advanced),
            "expert" => Ok(Proficiency::Expert),
            other => Err(format!(
                "Unknown proficiency: {}. Use beginner, intermediate, advanced or expert",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<Proficiency>,
}

/// Skills grouped by category. Always carries all five category keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    categories: BTreeMap<SkillCategory, Vec<Skill>>,
}

impl Default for SkillSet {
    fn default() -> Self {
        Self {
            categories: SkillCategory::ALL
                .into_iter()
                .map(|c| (c, Vec::new()))
                .collect(),
        }
    }
}

impl SkillSet {
    /// Re-insert any category key missing from stored data.
    pub fn fill_missing_categories(&mut self) {
        for category in SkillCategory::ALL {
            self.categories.entry(category).or_default();
        }
    }

    pub fn in_category(&self, category: SkillCategory) -> &[Skill] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Case-insensitive name match within one category only.
    pub fn contains(&self, category: SkillCategory, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.in_category(category)
            .iter()
            .any(|s| s.name.to_lowercase() == needle)
    }

    /// Append without checking for duplicates.
    pub fn push(&mut self, skill: Skill) {
        self.categories
            .entry(skill.category)
            .or_default()
            .push(skill);
    }

    /// Remove every skill with exactly this name from the category.
    pub fn remove(&mut self, category: SkillCategory, name: &str) -> bool {
        match self.categories.get_mut(&category) {
            Some(skills) => {
                let before = skills.len();
                skills.retain(|s| s.name != name);
                skills.len() != before
            }
            None => false,
        }
    }

    pub fn total(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-empty categories in fixed category order.
    pub fn non_empty(&self) -> impl Iterator<Item = (SkillCategory, &[Skill])> {
        self.categories
            .iter()
            .filter(|(_, skills)| !skills.is_empty())
            .map(|(category, skills)| (*category, skills.as_slice()))
    }
}
