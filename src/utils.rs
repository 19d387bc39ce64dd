//! Field helpers shared by the renderers.
//!
//! This module provides:
//! - Non-empty access to optional text fields ([`present`], [`text_or`])
//! - Keyword joining for skills and interests
//! - Splitting a full name into given and family names
//! - The "city, region" contact fragment
//!
//! A field counts as present only when it exists and is not the empty string.

use crate::data::Location;

/// Name used when the résumé has no `basics.name`.
pub const DEFAULT_NAME: &str = "Adam DJ Brett";
const DEFAULT_GIVEN_NAMES: &str = "Adam DJ";
const DEFAULT_FAMILY_NAME: &str = "Brett";

/// Returns the field's text if it is present and non-empty.
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Returns the field's text, or `default` when absent or empty.
pub fn text_or<'a>(field: &'a Option<String>, default: &'a str) -> &'a str {
    present(field).unwrap_or(default)
}

/// Joins keywords with `", "`.
pub fn join_keywords(keywords: &[String]) -> String {
    keywords.join(", ")
}

/// Builds the `"<studyType> in <area>"` degree label, trimmed.
pub fn degree_label(study_type: &Option<String>, area: &Option<String>) -> String {
    format!("{} in {}", text_or(study_type, ""), text_or(area, ""))
        .trim()
        .to_string()
}

/// Splits a full name into `(given names, family name)`.
///
/// The last whitespace-separated token is the family name; everything before
/// it forms the given names. Missing parts fall back to the default name's.
///
/// # Examples
///
/// ```rust
/// use cvgen::utils::split_name;
///
/// assert_eq!(split_name(Some("Jane Q Public")), ("Jane Q".to_string(), "Public".to_string()));
/// assert_eq!(split_name(None), ("Adam DJ".to_string(), "Brett".to_string()));
/// ```
pub fn split_name(name: Option<&str>) -> (String, String) {
    let full = name.filter(|n| !n.is_empty()).unwrap_or(DEFAULT_NAME);
    let mut tokens: Vec<&str> = full.split_whitespace().collect();

    let family = tokens.pop().unwrap_or(DEFAULT_FAMILY_NAME).to_string();
    let given = if tokens.is_empty() {
        DEFAULT_GIVEN_NAMES.to_string()
    } else {
        tokens.join(" ")
    };
    (given, family)
}

/// Joins the present parts of city and region with `", "`.
pub fn city_region(location: &Location) -> Option<String> {
    let parts: Vec<&str> = [present(&location.city), present(&location.region)]
        .into_iter()
        .flatten()
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_present_treats_empty_as_absent() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&s("")), None);
        assert_eq!(present(&s("x")), Some("x"));
        assert_eq!(text_or(&s(""), "Role"), "Role");
        assert_eq!(text_or(&s("Lead"), "Role"), "Lead");
    }

    #[test]
    fn test_degree_label() {
        assert_eq!(degree_label(&s("BSc"), &s("Physics")), "BSc in Physics");
        assert_eq!(degree_label(&None, &s("Computer Science")), "in Computer Science");
        assert_eq!(degree_label(&s("Bachelor's"), &None), "Bachelor's in");
        assert_eq!(degree_label(&None, &None), "in");
    }

    #[test]
    fn test_split_name() {
        assert_eq!(split_name(Some("Jane Doe")), ("Jane".into(), "Doe".into()));
        assert_eq!(split_name(Some("  Mary  Ann   Lee ")), ("Mary Ann".into(), "Lee".into()));
        assert_eq!(split_name(Some("Cher")), ("Adam DJ".into(), "Cher".into()));
        assert_eq!(split_name(Some("   ")), ("Adam DJ".into(), "Brett".into()));
        assert_eq!(split_name(Some("")), ("Adam DJ".into(), "Brett".into()));
        assert_eq!(split_name(None), ("Adam DJ".into(), "Brett".into()));
    }

    #[test]
    fn test_city_region() {
        let mut location = Location::default();
        assert_eq!(city_region(&location), None);
        location.city = s("Sydney");
        assert_eq!(city_region(&location).as_deref(), Some("Sydney"));
        location.region = s("NSW");
        assert_eq!(city_region(&location).as_deref(), Some("Sydney, NSW"));
        location.city = None;
        assert_eq!(city_region(&location).as_deref(), Some("NSW"));
    }

    #[test]
    fn test_join_keywords() {
        assert_eq!(join_keywords(&[]), "");
        assert_eq!(join_keywords(&["Rust".into(), "Go".into()]), "Rust, Go");
    }
}
