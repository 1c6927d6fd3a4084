// src/types/mod.rs
//! Persisted record shapes

pub mod entry;
pub mod profile;
pub mod resume;

pub use entry::{EntryId, EntryList, Keyed};
pub use profile::{
    EducationEntry, EducationHistory, PersonalInfo, Proficiency, Skill, SkillCategory, SkillSet,
    WorkEntry, WorkHistory,
};
pub use resume::{
    CustomSection, CustomSectionItem, ResumeContent, ResumeDocument, ResumePersonal, TemplateId,
};
