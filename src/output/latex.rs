//! LaTeX (moderncv) document assembler.
//!
//! This module builds the complete typeset document: the fixed preamble, the
//! header and contact block derived from `basics`, and the body sections
//! produced by [`super::sections`]. Blocks are separated by a blank line and
//! empty blocks are dropped before joining.

use crate::cli::{ThemeColor, ThemeStyle};
use crate::data::{Basics, Location, Profile, Resume};
use crate::escape::latex_escape;
use crate::output::sections::Section;
use crate::utils::{present, split_name, text_or};

/// Visual configuration of the typeset document.
///
/// Styling only; it never changes which data is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexTheme {
    pub color: ThemeColor,
    pub style: ThemeStyle,
}

impl Default for TexTheme {
    fn default() -> Self {
        Self {
            color: ThemeColor::Blue,
            style: ThemeStyle::Classic,
        }
    }
}

/// Renders the complete LaTeX document for `resume`.
///
/// # Arguments
/// * `resume` - The résumé record to render
/// * `theme` - moderncv color and style
///
/// # Returns
/// * `String` - The document source, without a trailing newline
pub fn render(resume: &Resume, theme: &TexTheme) -> String {
    let mut blocks: Vec<String> = vec![
        "% Generated by cvgen from a JSON Resume document".to_string(),
        r"\documentclass[11pt,a4paper,sans]{moderncv}".to_string(),
        format!(r"\moderncvcolor{{{}}}", theme.color.as_str()),
        format!(r"\moderncvstyle{{{}}}", theme.style.as_str()),
        r"\usepackage[scale=0.75]{geometry}".to_string(),
        r"\usepackage[english]{babel}".to_string(),
    ];
    blocks.extend(header_blocks(resume.basics()));
    blocks.push(r"\begin{document}".to_string());
    blocks.push(r"\microtypesetup{expansion=false}".to_string());
    blocks.push(r"\makecvtitle".to_string());
    for section in Section::ORDER {
        blocks.extend(section.blocks(resume));
    }
    blocks.push(r"\end{document}".to_string());

    blocks.retain(|block| !block.is_empty());
    blocks.join("\n\n")
}

/// Renders the moderncv header: name, title, address and contact commands.
///
/// Optional commands are returned as empty strings when their field is absent.
pub fn header_blocks(basics: &Basics) -> Vec<String> {
    let (given, family) = split_name(basics.name.as_deref());
    vec![
        format!(
            r"\name{{{}}}{{{}}}",
            latex_escape(&given),
            latex_escape(&family)
        ),
        optional_command(r"\title", &basics.label),
        basics.location.as_ref().map(address).unwrap_or_default(),
        optional_command(r"\phone[mobile]", &basics.phone),
        optional_command(r"\email", &basics.email),
        optional_command(r"\homepage", &basics.url),
        social_commands(&basics.profiles),
    ]
}

fn optional_command(command: &str, field: &Option<String>) -> String {
    present(field)
        .map(|value| format!("{command}{{{}}}", latex_escape(value)))
        .unwrap_or_default()
}

fn address(location: &Location) -> String {
    let locality = format!(
        "{}, {} {}",
        text_or(&location.city, ""),
        text_or(&location.region, ""),
        text_or(&location.postal_code, "")
    );
    format!(
        r"\address{{{}}}{{{}}}{{{}}}",
        latex_escape(text_or(&location.address, "Virtual")),
        latex_escape(locality.trim()),
        latex_escape(text_or(&location.country_code, "")),
    )
}

/// Maps a profile network to its moderncv `\social` identifier.
///
/// Only LinkedIn, GitHub and ORCID are supported; other networks yield `None`.
pub fn social_network(network: &str) -> Option<&'static str> {
    match network {
        "LinkedIn" => Some("linkedin"),
        "GitHub" => Some("github"),
        "ORCID" => Some("orcid"),
        _ => None,
    }
}

fn social_commands(profiles: &[Profile]) -> String {
    profiles
        .iter()
        .filter_map(|profile| {
            let network = social_network(profile.network.as_deref()?)?;
            let handle = present(&profile.username)
                .or_else(|| present(&profile.url))
                .unwrap_or("");
            Some(format!(r"\social[{network}]{{{}}}", latex_escape(handle)))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
