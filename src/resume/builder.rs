// src/resume/builder.rs
//! Edits applied to a resume's own content

use std::str::FromStr;
use uuid::Uuid;

use crate::error::{AssistantError, AssistantResult};
use crate::types::entry::EntryId;
use crate::types::profile::SkillCategory;
use crate::types::resume::{CustomSection, CustomSectionItem, ResumeContent};

pub const NEW_SECTION_TITLE: &str = "New Section";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FirstName,
    LastName,
    JobTitle,
    Email,
    Phone,
    Address,
    City,
    State,
    ZipCode,
    Linkedin,
    Website,
}

impl FromStr for PersonalField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "firstname" => Ok(PersonalField::FirstName),
            "lastname" => Ok(PersonalField::LastName),
            "jobtitle" => Ok(PersonalField::JobTitle),
            "email" => Ok(PersonalField::Email),
            "phone" => Ok(PersonalField::Phone),
            "address" => Ok(PersonalField::Address),
            "city" => Ok(PersonalField::City),
            "state" => Ok(PersonalField::State),
            "zipcode" => Ok(PersonalField::ZipCode),
            "linkedin" => Ok(PersonalField::Linkedin),
            "website" => Ok(PersonalField::Website),
            _ => Err(format!("Unknown personal field: {}", s)),
        }
    }
}

impl ResumeContent {
    pub fn set_personal_field(&mut self, field: PersonalField, value: impl Into<String>) {
        let p = &mut self.personal;
        let slot = match field {
            PersonalField::FirstName => &mut p.first_name,
            PersonalField::LastName => &mut p.last_name,
            PersonalField::JobTitle => &mut p.job_title,
            PersonalField::Email => &mut p.email,
            PersonalField::Phone => &mut p.phone,
            PersonalField::Address => &mut p.address,
            PersonalField::City => &mut p.city,
            PersonalField::State => &mut p.state,
            PersonalField::ZipCode => &mut p.zip_code,
            PersonalField::Linkedin => &mut p.linkedin,
            PersonalField::Website => &mut p.website,
        };
        *slot = value.into();
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.personal.summary = summary.into();
    }

    /// Append an empty "New Section" and return its id
    pub fn add_custom_section(&mut self) -> String {
        let id = format!("section-{}", Uuid::new_v4().simple());
        self.custom_sections.push(CustomSection {
            id: id.clone(),
            title: NEW_SECTION_TITLE.to_string(),
            items: Vec::new(),
        });
        id
    }

    fn section_mut(&mut self, section_id: &str) -> AssistantResult<&mut CustomSection> {
        self.custom_sections
            .iter_mut()
            .find(|s| s.id == section_id)
            .ok_or_else(|| AssistantError::NotFound(format!("section {}", section_id)))
    }

    pub fn rename_custom_section(
        &mut self,
        section_id: &str,
        title: impl Into<String>,
    ) -> AssistantResult<()> {
        self.section_mut(section_id)?.title = title.into();
        Ok(())
    }

    pub fn add_section_item(
        &mut self,
        section_id: &str,
        content: impl Into<String>,
    ) -> AssistantResult<()> {
        self.section_mut(section_id)?
            .items
            .push(CustomSectionItem {
                content: content.into(),
            });
        Ok(())
    }

    pub fn remove_custom_section(&mut self, section_id: &str) -> AssistantResult<CustomSection> {
        let index = self
            .custom_sections
            .iter()
            .position(|s| s.id == section_id)
            .ok_or_else(|| AssistantError::NotFound(format!("section {}", section_id)))?;
        Ok(self.custom_sections.remove(index))
    }

    pub fn remove_work_entry(&mut self, id: EntryId) -> AssistantResult<()> {
        self.work_experience
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AssistantError::NotFound(format!("work entry {}", id)))
    }

    pub fn remove_education_entry(&mut self, id: EntryId) -> AssistantResult<()> {
        self.education
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AssistantError::NotFound(format!("education entry {}", id)))
    }

    pub fn remove_skill(&mut self, category: SkillCategory, name: &str) -> AssistantResult<()> {
        if self.skills.remove(category, name) {
            Ok(())
        } else {
            Err(AssistantError::NotFound(format!(
                "skill \"{}\" in {}",
                name,
                category.label()
            )))
        }
    }
}
