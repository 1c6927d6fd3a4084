// src/render/modern.rs
//! Sidebar + main column layout

use super::html::Html;
use super::{
    contact_lines, education_date_range, education_subtitle, work_date_range, work_subtitle,
    EMPTY_SECTION_TEXT,
};
use crate::types::resume::ResumeContent;

pub(super) fn render(content: &ResumeContent) -> String {
    let mut html = Html::new();
    html.open("div", "resume modern");
    sidebar(&mut html, content);
    main_column(&mut html, content);
    html.close("div");
    html.finish()
}

fn sidebar(html: &mut Html, content: &ResumeContent) {
    let personal = &content.personal;

    html.open("aside", "sidebar");
    html.open("div", "identity");
    html.element_lines("h1", "name", &[&personal.first_name, &personal.last_name]);
    if !personal.job_title.is_empty() {
        html.element("p", "job-title", &personal.job_title);
    }
    html.close("div");

    // Contact heading is shown even with no contact details.
    html.open("section", "contact");
    html.element("h2", "", "Contact");
    for line in contact_lines(content) {
        html.element("div", "contact-line", line);
    }
    html.close("section");

    if !content.skills.is_empty() {
        html.open("section", "skills");
        html.element("h2", "", "Skills");
        for (category, skills) in content.skills.non_empty() {
            html.open("div", "skill-group");
            html.element("h3", "", category.short_label());
            html.open("div", "tags");
            for skill in skills {
                html.element("span", "tag", &skill.name);
            }
            html.close("div");
            html.close("div");
        }
        html.close("section");
    }
    html.close("aside");
}

fn main_column(html: &mut Html, content: &ResumeContent) {
    html.open("main", "main");

    if !content.personal.summary.is_empty() {
        html.open("section", "summary");
        html.element("h2", "", "Profile");
        html.element("p", "", &content.personal.summary);
        html.close("section");
    }

    if !content.work_experience.is_empty() {
        html.open("section", "work");
        html.element("h2", "", "Experience");
        for job in content.work_experience.entries() {
            html.open("div", "entry");
            html.open("div", "entry-header");
            html.element("h3", "", &job.title);
            html.element("p", "date-range", &work_date_range(job));
            html.close("div");
            html.element("p", "subtitle", &work_subtitle(job));
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
            html.element("h3", "", &edu.degree);
            html.element("p", "date-range", &education_date_range(edu));
            html.close("div");
            html.element("p", "subtitle", &education_subtitle(edu));
            if let Some(description) = edu.description.as_deref().filter(|d| !d.is_empty()) {
                html.element("p", "description", description);
            }
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

    html.close("main");
}
