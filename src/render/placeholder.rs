// src/render/placeholder.rs
//! Creative and minimal layouts are not built yet; they show the name and
//! a notice.

use super::html::Html;
use crate::types::resume::{ResumeContent, TemplateId};

pub(super) fn render(template: TemplateId, content: &ResumeContent) -> String {
    let id = template.as_str();
    let mut chars = id.chars();
    let label: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    let mut html = Html::new();
    html.open("div", &format!("resume {} placeholder", template.as_str()));
    html.element("h1", "name", &content.personal.full_name());
    html.open("div", "notice");
    html.element("p", "", &format!("{} Template Preview", label));
    html.element("p", "", "Full implementation coming soon");
    html.close("div");
    html.close("div");
    html.finish()
}
