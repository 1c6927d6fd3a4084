// src/render/mod.rs
//! Pure mapping from (template, resume content) to HTML markup

pub mod html;
mod modern;
mod placeholder;
mod professional;

use crate::types::profile::{EducationEntry, WorkEntry};
use crate::types::resume::{ResumeContent, ResumeDocument, TemplateId};

pub use html::{escape_html, standalone_page};

pub const PRESENT: &str = "Present";
pub const LOADING_PREVIEW: &str = "Loading preview...";
pub const EMPTY_SECTION_TEXT: &str = "No items added to this section yet.";

/// Render content with the given layout. Exhaustive over every template.
pub fn render(template: TemplateId, content: &ResumeContent) -> String {
    match template {
        TemplateId::Professional => professional::render(content),
        TemplateId::Modern => modern::render(content),
        TemplateId::Creative => placeholder::render(template, content),
        TemplateId::Minimal => placeholder::render(template, content),
    }
}

/// Render by raw identifier; unknown identifiers use the professional layout.
pub fn render_identifier(identifier: &str, content: &ResumeContent) -> String {
    render(TemplateId::from_identifier(identifier), content)
}

/// Render a document, or the loading placeholder if its content has not
/// been initialized yet.
pub fn render_document(document: &ResumeDocument) -> String {
    match &document.content {
        Some(content) => render(document.template, content),
        None => {
            let mut out = html::Html::new();
            out.element("div", "resume loading", LOADING_PREVIEW);
            out.finish()
        }
    }
}

// ===== Shared formatting =====

/// "{start} - Present" for current entries, otherwise "{start} - {end}".
/// A stored end date on a current entry is ignored, not cleared.
pub fn date_range(start: &str, end: Option<&str>, current: bool) -> String {
    let end = if current { PRESENT } else { end.unwrap_or("") };
    format!("{} - {}", start, end)
}

pub fn work_date_range(job: &WorkEntry) -> String {
    date_range(&job.start_date, job.end_date.as_deref(), job.current_job)
}

pub fn education_date_range(edu: &EducationEntry) -> String {
    date_range(&edu.start_date, edu.end_date.as_deref(), edu.current)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// "Company, Location"
pub fn work_subtitle(job: &WorkEntry) -> String {
    match present(&job.location) {
        Some(location) => format!("{}, {}", job.company, location),
        None => job.company.clone(),
    }
}

/// "School, Field • GPA: x"
pub fn education_subtitle(edu: &EducationEntry) -> String {
    let mut line = edu.school.clone();
    if let Some(field) = present(&edu.field_of_study) {
        line.push_str(&format!(", {}", field));
    }
    if let Some(gpa) = present(&edu.gpa) {
        line.push_str(&format!(" • GPA: {}", gpa));
    }
    line
}

pub fn linkedin_display(url: &str) -> &str {
    url.strip_prefix("https://linkedin.com/in/").unwrap_or(url)
}

pub fn website_display(url: &str) -> &str {
    url.strip_prefix("https://").unwrap_or(url)
}

/// Non-empty contact lines in display order
fn contact_lines(content: &ResumeContent) -> Vec<&str> {
    let p = &content.personal;
    [
        p.email.as_str(),
        p.phone.as_str(),
        linkedin_display(&p.linkedin),
        website_display(&p.website),
    ]
    .into_iter()
    .filter(|line| !line.is_empty())
    .collect()
}
