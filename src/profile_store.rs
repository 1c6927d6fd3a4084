// src/profile_store.rs
//! Whole-collection persistence of the four profile kinds

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::kv_store::{KeyValueStore, StoredValue, CURRENT_SCHEMA_VERSION};
use crate::error::{AssistantError, AssistantResult};
use crate::types::entry::EntryId;
use crate::types::profile::{
    EducationEntry, EducationHistory, PersonalInfo, Skill, SkillCategory, SkillSet, WorkEntry,
    WorkHistory,
};
use crate::validation::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    PersonalInfo,
    WorkHistory,
    EducationHistory,
    Skills,
}

impl ProfileKind {
    /// Storage key of this kind's slot
    pub fn key(&self) -> &'static str {
        match self {
            ProfileKind::PersonalInfo => "personalInfo",
            ProfileKind::WorkHistory => "workHistory",
            ProfileKind::EducationHistory => "educationHistory",
            ProfileKind::Skills => "skills",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A value stored whole under one profile key.
pub trait ProfileCollection: Serialize + DeserializeOwned + Default {
    const KIND: ProfileKind;

    /// Repair a freshly parsed value (e.g. missing category keys).
    fn normalize(&mut self) {}
}

impl ProfileCollection for PersonalInfo {
    const KIND: ProfileKind = ProfileKind::PersonalInfo;
}

impl ProfileCollection for WorkHistory {
    const KIND: ProfileKind = ProfileKind::WorkHistory;
}

impl ProfileCollection for EducationHistory {
    const KIND: ProfileKind = ProfileKind::EducationHistory;
}

impl ProfileCollection for SkillSet {
    const KIND: ProfileKind = ProfileKind::Skills;

    fn normalize(&mut self) {
        self.fill_missing_categories();
    }
}

/// Owned copy of every profile collection at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSnapshot {
    pub personal: PersonalInfo,
    pub work_history: WorkHistory,
    pub education: EducationHistory,
    pub skills: SkillSet,
}

#[derive(Clone)]
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persisted value for `C`, or its empty default when the slot is
    /// absent, unparsable, or written by a newer schema.
    pub async fn load<C: ProfileCollection>(&self) -> AssistantResult<C> {
        let key = C::KIND.key();
        let Some(stored) = self.store.get(key).await? else {
            return Ok(C::default());
        };

        if stored.schema_version > CURRENT_SCHEMA_VERSION {
            warn!(
                "Stored {} has schema version {} (supported: {}), using empty default",
                key, stored.schema_version, CURRENT_SCHEMA_VERSION
            );
            return Ok(C::default());
        }

        let mut value: C = match serde_json::from_str(&stored.json) {
            Ok(value) => value,
            Err(e) => {
                warn!("Stored {} is unparsable ({}), using empty default", key, e);
                return Ok(C::default());
            }
        };
        value.normalize();

        if stored.schema_version < CURRENT_SCHEMA_VERSION {
            // Legacy values get ids assigned during parsing; persist them so
            // they stay stable.
            info!(
                "Migrating {} from schema version {} to {}",
                key, stored.schema_version, CURRENT_SCHEMA_VERSION
            );
            self.save(&value).await?;
        }

        Ok(value)
    }

    /// Overwrite the slot for `C` unconditionally.
    pub async fn save<C: ProfileCollection>(&self, value: &C) -> AssistantResult<()> {
        let json = serde_json::to_string(value)?;
        self.store
            .put(C::KIND.key(), StoredValue::current(json))
            .await
    }

    pub async fn snapshot(&self) -> AssistantResult<ProfileSnapshot> {
        Ok(ProfileSnapshot {
            personal: self.load().await?,
            work_history: self.load().await?,
            education: self.load().await?,
            skills: self.load().await?,
        })
    }

    // ===== Personal Info =====

    pub async fn update_personal_info(&self, update: PersonalInfo) -> AssistantResult<PersonalInfo> {
        let mut info: PersonalInfo = self.load().await?;
        info.merge(update);
        self.save(&info).await?;
        Ok(info)
    }

    // ===== Work History =====

    pub async fn add_work_entry(&self, entry: WorkEntry) -> AssistantResult<EntryId> {
        entry.validate()?;
        let mut history: WorkHistory = self.load().await?;
        let id = history.push(entry);
        self.save(&history).await?;
        info!("Added work entry {} ({} total)", id, history.len());
        Ok(id)
    }

    pub async fn update_work_entry(&self, id: EntryId, entry: WorkEntry) -> AssistantResult<()> {
        entry.validate()?;
        let mut history: WorkHistory = self.load().await?;
        if !history.replace(id, entry) {
            return Err(AssistantError::NotFound(format!("work entry {}", id)));
        }
        self.save(&history).await
    }

    pub async fn remove_work_entry(&self, id: EntryId) -> AssistantResult<WorkEntry> {
        let mut history: WorkHistory = self.load().await?;
        let removed = history
            .remove(id)
            .ok_or_else(|| AssistantError::NotFound(format!("work entry {}", id)))?;
        self.save(&history).await?;
        Ok(removed)
    }

    // ===== Education =====

    pub async fn add_education_entry(&self, entry: EducationEntry) -> AssistantResult<EntryId> {
        entry.validate()?;
        let mut history: EducationHistory = self.load().await?;
        let id = history.push(entry);
        self.save(&history).await?;
        info!("Added education entry {} ({} total)", id, history.len());
        Ok(id)
    }

    pub async fn update_education_entry(
        &self,
        id: EntryId,
        entry: EducationEntry,
    ) -> AssistantResult<()> {
        entry.validate()?;
        let mut history: EducationHistory = self.load().await?;
        if !history.replace(id, entry) {
            return Err(AssistantError::NotFound(format!("education entry {}", id)));
        }
        self.save(&history).await
    }

    pub async fn remove_education_entry(&self, id: EntryId) -> AssistantResult<EducationEntry> {
        let mut history: EducationHistory = self.load().await?;
        let removed = history
            .remove(id)
            .ok_or_else(|| AssistantError::NotFound(format!("education entry {}", id)))?;
        self.save(&history).await?;
        Ok(removed)
    }

    // ===== Skills =====

    /// Add a skill unless its name already exists (case-insensitively) in
    /// the same category. A rejected skill leaves the store untouched.
    pub async fn add_skill(&self, skill: Skill) -> AssistantResult<()> {
        skill.validate()?;
        let mut skills: SkillSet = self.load().await?;
        if skills.contains(skill.category, &skill.name) {
            return Err(AssistantError::DuplicateSkill {
                name: skill.name,
                category: skill.category,
            });
        }
        info!("Adding skill {} to {}", skill.name, skill.category);
        skills.push(skill);
        self.save(&skills).await
    }

    pub async fn remove_skill(&self, category: SkillCategory, name: &str) -> AssistantResult<()> {
        let mut skills: SkillSet = self.load().await?;
        if !skills.remove(category, name) {
            return Err(AssistantError::NotFound(format!(
                "skill \"{}\" in {}",
                name,
                category.label()
            )));
        }
        self.save(&skills).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kv_store::MemoryStore;
    use crate::types::profile::Proficiency;

    fn store() -> (Arc<MemoryStore>, ProfileStore) {
        let kv = Arc::new(MemoryStore::new());
        let profile = ProfileStore::new(kv.clone());
        (kv, profile)
    }

    fn job(title: &str) -> WorkEntry {
        WorkEntry {
            title: title.to_string(),
            company: "Acme".to_string(),
            start_date: "Jan 2020".to_string(),
            ..Default::default()
        }
    }

    fn skill(name: &str, category: SkillCategory) -> Skill {
        Skill {
            name: name.to_string(),
            category,
            proficiency: Some(Proficiency::Intermediate),
        }
    }

    #[tokio::test]
    async fn test_absent_keys_load_empty_defaults() {
        let (_, profile) = store();
        let work: WorkHistory = profile.load().await.unwrap();
        let skills: SkillSet = profile.load().await.unwrap();
        assert!(work.is_empty());
        assert_eq!(skills, SkillSet::default());
    }

    #[tokio::test]
    async fn test_unparsable_value_loads_default() {
        let (kv, profile) = store();
        kv.put("workHistory", StoredValue::current("not json".to_string()))
            .await
            .unwrap();
        let work: WorkHistory = profile.load().await.unwrap();
        assert!(work.is_empty());
    }

    #[tokio::test]
    async fn test_newer_schema_version_loads_default() {
        let (kv, profile) = store();
        let mut value = StoredValue::current(r#"{"firstName":"Ada"}"#.to_string());
        value.schema_version = CURRENT_SCHEMA_VERSION + 1;
        kv.put("personalInfo", value).await.unwrap();

        let info: PersonalInfo = profile.load().await.unwrap();
        assert_eq!(info, PersonalInfo::default());
    }

    #[tokio::test]
    async fn test_legacy_entries_get_stable_ids() {
        let (kv, profile) = store();
        let mut legacy = StoredValue::current(
            r#"[{"title":"Engineer","company":"Acme","startDate":"2020","currentJob":false}]"#
                .to_string(),
        );
        legacy.schema_version = 0;
        kv.put("workHistory", legacy).await.unwrap();

        let first: WorkHistory = profile.load().await.unwrap();
        let second: WorkHistory = profile.load().await.unwrap();
        assert_eq!(first.ids(), second.ids());
        let stored = kv.get("workHistory").await.unwrap().unwrap();
        assert_eq!(stored.schema_version, CURRENT_SCHEMA_VERSION);
    }

    #[tokio::test]
    async fn test_partial_skill_map_is_filled() {
        let (kv, profile) = store();
        kv.put(
            "skills",
            StoredValue::current(r#"{"technical":[{"name":"Rust","category":"technical"}]}"#.to_string()),
        )
        .await
        .unwrap();
        let skills: SkillSet = profile.load().await.unwrap();
        assert_eq!(skills.total(), 1);
        assert!(skills.in_category(SkillCategory::Other).is_empty());
        let json = serde_json::to_value(&skills).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_duplicate_skill_is_rejected_without_change() {
        let (kv, profile) = store();
        profile
            .add_skill(skill("TypeScript", SkillCategory::Technical))
            .await
            .unwrap();
        let before = kv.get("skills").await.unwrap().unwrap().json;

        let err = profile
            .add_skill(skill("typescript", SkillCategory::Technical))
            .await
            .unwrap_err();
        assert!(matches!(err, AssistantError::DuplicateSkill { .. }));
        assert_eq!(
            err.to_string(),
            "\"typescript\" already exists in Technical Skills"
        );

        let after = kv.get("skills").await.unwrap().unwrap().json;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_same_skill_in_other_category_is_allowed() {
        let (_, profile) = store();
        profile
            .add_skill(skill("Excel", SkillCategory::Tools))
            .await
            .unwrap();
        profile
            .add_skill(skill("excel", SkillCategory::Technical))
            .await
            .unwrap();
        let skills: SkillSet = profile.load().await.unwrap();
        assert_eq!(skills.total(), 2);
    }

    #[tokio::test]
    async fn test_invalid_entry_is_not_stored() {
        let (kv, profile) = store();
        let err = profile.add_work_entry(WorkEntry::default()).await.unwrap_err();
        assert!(matches!(err, AssistantError::Validation(_)));
        assert!(kv.get("workHistory").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_keeps_order_of_remaining_entries() {
        let (_, profile) = store();
        let mut ids = Vec::new();
        for title in ["One", "Two", "Three", "Four"] {
            ids.push(profile.add_work_entry(job(title)).await.unwrap());
        }

        let removed = profile.remove_work_entry(ids[1]).await.unwrap();
        assert_eq!(removed.title, "Two");

        let work: WorkHistory = profile.load().await.unwrap();
        let titles: Vec<&str> = work.entries().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Three", "Four"]);
        assert_eq!(work.get(ids[3]).map(|e| e.title.as_str()), Some("Four"));
    }

    #[tokio::test]
    async fn test_update_unknown_entry_is_not_found() {
        let (_, profile) = store();
        let err = profile
            .update_work_entry(EntryId::generate(), job("Ghost"))
            .await
            .unwrap_err();
        assert!(matches!(err, AssistantError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_current_job_keeps_end_date() {
        let (_, profile) = store();
        let mut entry = job("Engineer");
        entry.end_date = Some("Dec 2021".to_string());
        entry.current_job = true;
        let id = profile.add_work_entry(entry).await.unwrap();

        let work: WorkHistory = profile.load().await.unwrap();
        assert_eq!(work.get(id).unwrap().end_date.as_deref(), Some("Dec 2021"));
    }

    #[tokio::test]
    async fn test_education_round_trip() {
        let (_, profile) = store();
        let id = profile
            .add_education_entry(EducationEntry {
                school: "MIT".to_string(),
                degree: "BSc".to_string(),
                start_date: "2012".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        profile
            .update_education_entry(
                id,
                EducationEntry {
                    school: "MIT".to_string(),
                    degree: "MSc".to_string(),
                    start_date: "2016".to_string(),
                    current: true,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let snapshot = profile.snapshot().await.unwrap();
        assert_eq!(snapshot.education.get(id).unwrap().degree, "MSc");

        profile.remove_education_entry(id).await.unwrap();
        let education: EducationHistory = profile.load().await.unwrap();
        assert!(education.is_empty());
    }

    #[tokio::test]
    async fn test_remove_missing_skill_is_not_found() {
        let (_, profile) = store();
        let err = profile
            .remove_skill(SkillCategory::Soft, "Patience")
            .await
            .unwrap_err();
        assert!(matches!(err, AssistantError::NotFound(_)));
    }
}
