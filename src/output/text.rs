//! Plain-text document assembler.
//!
//! Produces a compact, unescaped text version of the résumé. Unlike the LaTeX
//! document, a section heading only appears when the section has entries.

use crate::data::Resume;
use crate::utils::{DEFAULT_NAME, city_region, degree_label, join_keywords, present, text_or};

/// Renders the plain-text résumé.
///
/// # Returns
/// * `String` - The document, trimmed and terminated by exactly one newline
pub fn render(resume: &Resume) -> String {
    let basics = resume.basics();
    let mut lines: Vec<String> = Vec::new();

    lines.push(text_or(&basics.name, DEFAULT_NAME).to_string());
    if let Some(label) = present(&basics.label) {
        lines.push(label.to_string());
    }

    let location = basics.location.as_ref();
    let contact: Vec<String> = [
        location.and_then(|l| present(&l.address)).map(str::to_string),
        location.and_then(city_region),
        present(&basics.phone).map(str::to_string),
        present(&basics.email).map(str::to_string),
        present(&basics.url).map(str::to_string),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !contact.is_empty() {
        lines.push(contact.join(" | "));
    }
    lines.push(String::new());

    if let Some(summary) = present(&basics.summary) {
        lines.push("SUMMARY".to_string());
        lines.push(summary.to_string());
        lines.push(String::new());
    }

    if !resume.work.is_empty() {
        lines.push("EXPERIENCE".to_string());
        for role in &resume.work {
            lines.push(format!(
                "{} — {}",
                text_or(&role.position, "Role"),
                text_or(&role.name, "")
            ));
            lines.push(text_or(&role.summary, "").to_string());
            lines.push(String::new());
        }
    }

    if !resume.education.is_empty() {
        lines.push("EDUCATION".to_string());
        for school in &resume.education {
            lines.push(format!(
                "{} — {}",
                degree_label(&school.study_type, &school.area),
                text_or(&school.institution, "")
            ));
            if let Some(summary) = present(&school.summary) {
                lines.push(summary.to_string());
            }
            lines.push(String::new());
        }
    }

    if !resume.skills.is_empty() {
        lines.push("SKILLS".to_string());
        for skill in &resume.skills {
            lines.push(format!(
                "{}: {}",
                text_or(&skill.name, ""),
                join_keywords(&skill.keywords)
            ));
        }
        lines.push(String::new());
    }

    if !resume.publications.is_empty() {
        lines.push("PUBLICATIONS".to_string());
        for publication in &resume.publications {
            lines.push(format!(
                "{} ({})",
                text_or(&publication.name, "Untitled"),
                text_or(&publication.publisher, "")
            ));
            if let Some(summary) = present(&publication.summary) {
                lines.push(summary.to_string());
            }
            if let Some(url) = present(&publication.url) {
                lines.push(url.to_string());
            }
            lines.push(String::new());
        }
    }

    let mut text = lines.join("\n").trim_end().to_string();
    text.push('\n');
    text
}
