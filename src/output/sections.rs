//! Section renderers for the LaTeX (moderncv) document.
//!
//! Each renderer maps one résumé section to a block of LaTeX. The set of
//! sections is fixed and modeled by [`Section`]; the document assembler walks
//! [`Section::ORDER`] and concatenates the blocks each section yields.
//!
//! Experience, Education and Skills always emit their heading, even when the
//! list is empty. Every other section disappears entirely without data.

use crate::data::{Basics, Education, Interest, Language, Publication, Resume, Skill, Volunteer, Work};
use crate::dates::{NO_DATE, date_range, format_date};
use crate::escape::{latex_escape, latex_escape_opt};
use crate::utils::{degree_label, join_keywords, present, text_or};

/// The sections of the typeset document, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
    Volunteer,
    Languages,
    Interests,
    Publications,
}

impl Section {
    /// Sections in the order they appear in the document body.
    pub const ORDER: [Section; 8] = [
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Volunteer,
        Section::Languages,
        Section::Interests,
        Section::Publications,
    ];

    /// The `\section{..}` title.
    pub fn title(self) -> &'static str {
        match self {
            Section::Summary => "Professional Summary",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Volunteer => "Volunteer",
            Section::Languages => "Languages",
            Section::Interests => "Interests",
            Section::Publications => "Publications",
        }
    }

    /// Whether the heading is emitted even when the section has no entries.
    pub fn is_mandatory(self) -> bool {
        matches!(
            self,
            Section::Experience | Section::Education | Section::Skills
        )
    }

    /// Renders this section into document blocks.
    ///
    /// Mandatory sections yield the heading and the entries as separate blocks
    /// (the entries may be empty). Optional sections yield a single block that
    /// carries its own heading and is empty when there is nothing to show.
    pub fn blocks(self, resume: &Resume) -> Vec<String> {
        let content = self.content(resume);
        if self.is_mandatory() {
            vec![heading(self.title()), content]
        } else {
            vec![content]
        }
    }

    fn content(self, resume: &Resume) -> String {
        match self {
            Section::Summary => render_summary(resume.basics()),
            Section::Experience => render_work(&resume.work),
            Section::Education => render_education(&resume.education),
            Section::Skills => render_skills(&resume.skills),
            Section::Volunteer => list_section(self.title(), &resume.volunteer, volunteer_entry),
            Section::Languages => list_section(self.title(), &resume.languages, language_entry),
            Section::Interests => list_section(self.title(), &resume.interests, interest_entry),
            Section::Publications => render_publications(&resume.publications),
        }
    }
}

fn heading(title: &str) -> String {
    format!(r"\section{{{title}}}")
}

/// Renders a titled section with one line per item, or nothing for no items.
pub fn list_section<T>(title: &str, items: &[T], format: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return String::new();
    }
    let lines: Vec<String> = items.iter().map(format).collect();
    format!("{}\n{}", heading(title), lines.join("\n"))
}

/// Renders the professional summary, if the résumé has one.
pub fn render_summary(basics: &Basics) -> String {
    match present(&basics.summary) {
        Some(summary) => format!(
            "{}\n\\cvitem{{}}{{{}}}",
            heading(Section::Summary.title()),
            latex_escape(summary)
        ),
        None => String::new(),
    }
}

/// Renders one `\cventry` per role, in input order.
pub fn render_work(work: &[Work]) -> String {
    work.iter().map(work_entry).collect::<Vec<_>>().join("\n")
}

fn work_entry(role: &Work) -> String {
    let when = if present(&role.start_date).is_some() || present(&role.end_date).is_some() {
        date_range(role.start_date.as_deref(), role.end_date.as_deref())
    } else {
        "Current".to_string()
    };
    format!(
        r"\cventry{{{when}}}{{{}}}{{{}}}{{{}}}{{}}{{{}}}",
        latex_escape(text_or(&role.position, "Role")),
        latex_escape(text_or(&role.name, "")),
        latex_escape(text_or(&role.location, "Remote")),
        latex_escape(text_or(&role.summary, "")),
    )
}

/// Renders one `\cventry` per school, in input order.
pub fn render_education(schools: &[Education]) -> String {
    schools
        .iter()
        .map(|school| {
            format!(
                r"\cventry{{{}}}{{{}}}{{{}}}{{}}{{}}{{{}}}",
                date_range(school.start_date.as_deref(), school.end_date.as_deref()),
                latex_escape(&degree_label(&school.study_type, &school.area)),
                latex_escape(text_or(&school.institution, "")),
                latex_escape(text_or(&school.summary, "")),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one `\cvitem` per skill with its keywords.
pub fn render_skills(skills: &[Skill]) -> String {
    skills
        .iter()
        .map(|skill| {
            format!(
                r"\cvitem{{{}}}{{{}}}",
                latex_escape_opt(skill.name.as_deref()),
                latex_escape(&join_keywords(&skill.keywords)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn volunteer_entry(entry: &Volunteer) -> String {
    let organization = text_or(&entry.organization, "");
    let body = match present(&entry.summary) {
        Some(summary) => format!("{organization}: {summary}"),
        None => organization.to_string(),
    };
    format!(
        r"\cvitem{{{}}}{{{}}}",
        latex_escape(text_or(&entry.position, "Role")),
        latex_escape(&body),
    )
}

fn language_entry(entry: &Language) -> String {
    format!(
        r"\cvitemwithcomment{{{}}}{{{}}}{{}}",
        latex_escape_opt(entry.language.as_deref()),
        latex_escape_opt(entry.fluency.as_deref()),
    )
}

fn interest_entry(entry: &Interest) -> String {
    format!(
        r"\cvitem{{{}}}{{{}}}",
        latex_escape(text_or(&entry.name, "")),
        latex_escape(&join_keywords(&entry.keywords)),
    )
}

/// Renders the publications as an itemized list, or nothing for no entries.
pub fn render_publications(publications: &[Publication]) -> String {
    if publications.is_empty() {
        return String::new();
    }
    let items: Vec<String> = publications.iter().map(publication_item).collect();
    format!(
        "{}\n\\begin{{itemize}}\n{}\n\\end{{itemize}}",
        heading(Section::Publications.title()),
        items.join("\n")
    )
}

fn publication_item(publication: &Publication) -> String {
    let released = match present(&publication.release_date) {
        Some(date) => format!(", {}", format_date(Some(date), NO_DATE)),
        None => String::new(),
    };
    let link = match present(&publication.url) {
        Some(url) => {
            let url = latex_escape(url);
            format!(r"\newline\href{{{url}}}{{{url}}}")
        }
        None => String::new(),
    };
    format!(
        r"\item {} ({}{released}). {}{link}",
        latex_escape(text_or(&publication.name, "Untitled")),
        latex_escape(text_or(&publication.publisher, "")),
        latex_escape(text_or(&publication.summary, "")),
    )
}
