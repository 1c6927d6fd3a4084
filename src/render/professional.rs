// src/render/professional.rs
//! Single-column layout

use super::html::Html;
use super::{
    contact_lines, education_date_range, education_subtitle, work_date_range, work_subtitle,
    EMPTY_SECTION_TEXT,
};
use crate::types::resume::ResumeContent;

pub(super) fn render(content: &ResumeContent) -> String {
    let personal = &content.personal;
    let mut html = Html::new();

    html.open("div", "resume professional");

    html.open("header", "header");
    html.element("h1", "name", &personal.full_name());
    let contacts = contact_lines(content);
    if !contacts.is_empty() {
        html.open("div", "contact");
        for line in contacts {
            html.element("span", "", line);
        }
        html.close("div");
    }
    html.close("header");

    if !personal.summary.is_empty() {
        html.open("section", "summary");
        html.element("h2", "", "Professional Summary");
        html.element("p", "", &personal.summary);
        html.close("section");
    }

    if !content.work_experience.is_empty() {
        html.open("section", "work");
        html.element("h2", "", "Work Experience");
        for job in content.work_experience.entries() {
            html.open("div", "entry");
            html.open("div", "entry-header");
            html.open("div", "");
            html.element("h3", "", &job.title);
            html.element("p", "subtitle", &work_subtitle(job));
            html.close("div");
            html.element("p", "date-range", &work_date_range(job));
            html.close("div");
            if let Some(description) = job.description.as_deref().filter(|d| !d.is_empty()) {
                html.element("p", "description", description);
            }
            html.close("div");
        }
        html.close("section");
    }

    if !content.education.is_empty() {
        html.open("section", "education");
        html.element("h2", "", "Education");
        for edu in content.education.entries() {
            html.open("div", "entry");
            html.open("div", "entry-header");
            html.open("div", "");
            html.element("h3", "", &edu.degree);
            html.element("p", "subtitle", &education_subtitle(edu));
            html.close("div");
            html.element("p", "date-range", &education_date_range(edu));
            html.close("div");
            if let Some(description) = edu.description.as_deref().filter(|d| !d.is_empty()) {
                html.element("p", "description", description);
            }
            html.close("div");
        }
        html.close("section");
    }

    if !content.skills.is_empty() {
        html.open("section", "skills");
        html.element("h2", "", "Skills");
        for (category, skills) in content.skills.non_empty() {
            let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
            html.open("div", "skill-group");
            html.element("h3", "", &format!("{}:", category.label()));
            html.element("p", "", &names.join(", "));
            html.close("div");
        }
        html.close("section");
    }

    for section in &content.custom_sections {
        html.open("section", "custom");
        html.element("h2", "", &section.title);
        if section.items.is_empty() {
            html.element("p", "empty", EMPTY_SECTION_TEXT);
        } else {
            for item in &section.items {
                html.element("p", "", &item.content);
            }
        }
        html.close("section");
    }

    html.close("div");
    html.finish()
}
