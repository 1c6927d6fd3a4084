// src/resume/initializer.rs
//! One-time copy of profile data into a resume's own content

use tracing::info;

use crate::error::AssistantResult;
use crate::profile_store::{ProfileSnapshot, ProfileStore};
use crate::types::profile::PersonalInfo;
use crate::types::resume::{ResumeContent, ResumeDocument, ResumePersonal};

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl ResumePersonal {
    /// Contact fields are copied; the summary starts blank because it is
    /// written per resume in the builder.
    pub fn from_profile(info: &PersonalInfo) -> Self {
        Self {
            first_name: text(&info.first_name),
            last_name: text(&info.last_name),
            job_title: text(&info.job_title),
            email: text(&info.email),
            phone: text(&info.phone),
            address: text(&info.address),
            city: text(&info.city),
            state: text(&info.state),
            zip_code: text(&info.zip_code),
            linkedin: text(&info.linkedin),
            website: text(&info.website),
            summary: String::new(),
        }
    }
}

impl ResumeContent {
    /// Build content from a snapshot the caller owns. Nothing in the
    /// result refers back to the profile store.
    pub fn from_snapshot(snapshot: ProfileSnapshot) -> Self {
        let mut skills = snapshot.skills;
        skills.fill_missing_categories();

        Self {
            personal: ResumePersonal::from_profile(&snapshot.personal),
            work_experience: snapshot.work_history,
            education: snapshot.education,
            skills,
            custom_sections: Vec::new(),
        }
    }
}

/// Read all four profile collections and return an independent content copy.
pub async fn materialize(profile: &ProfileStore) -> AssistantResult<ResumeContent> {
    let snapshot = profile.snapshot().await?;
    Ok(ResumeContent::from_snapshot(snapshot))
}

/// Populate the document's content on first access. Already initialized
/// content is returned untouched, whatever the profile holds now.
pub async fn ensure_content<'a>(
    document: &'a mut ResumeDocument,
    profile: &ProfileStore,
) -> AssistantResult<&'a mut ResumeContent> {
    if document.content.is_none() {
        let content = materialize(profile).await?;
        info!(
            "Initialized resume {} from profile ({} jobs, {} education, {} skills)",
            document.id,
            content.work_experience.len(),
            content.education.len(),
            content.skills.total()
        );
        document.content = Some(content);
        document.touch();
    }

    Ok(document.content.get_or_insert_with(ResumeContent::default))
}
