//! Data structures for representing a JSON Resume document.
//!
//! This module defines the résumé record consumed by the renderers. The
//! record is deserialized once from the input file and then only borrowed.
//!
//! Every field is optional. List fields tolerate both absence and `null`
//! and come back as empty vectors, so renderers never have to distinguish
//! "missing" from "empty".

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A complete résumé record (the subset of the JSON Resume schema we render).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub basics: Option<Basics>,
    #[serde(deserialize_with = "nullable_list")]
    pub work: Vec<Work>,
    #[serde(deserialize_with = "nullable_list")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "nullable_list")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "nullable_list")]
    pub volunteer: Vec<Volunteer>,
    #[serde(deserialize_with = "nullable_list")]
    pub languages: Vec<Language>,
    #[serde(deserialize_with = "nullable_list")]
    pub interests: Vec<Interest>,
    #[serde(deserialize_with = "nullable_list")]
    pub publications: Vec<Publication>,
}

impl Resume {
    /// Returns the `basics` block, or an empty one when it is absent.
    pub fn basics(&self) -> &Basics {
        static EMPTY: Basics = Basics::EMPTY;
        self.basics.as_ref().unwrap_or(&EMPTY)
    }
}

/// Personal details and contact information.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Basics {
    pub name: Option<String>,
    pub label: Option<String>,
    pub summary: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
    pub location: Option<Location>,
    #[serde(deserialize_with = "nullable_list")]
    pub profiles: Vec<Profile>,
}

impl Basics {
    const EMPTY: Basics = Basics {
        name: None,
        label: None,
        summary: None,
        email: None,
        phone: None,
        url: None,
        location: None,
        profiles: Vec::new(),
    };
}

/// Postal location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
}

/// An online profile, e.g. GitHub or LinkedIn.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub network: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
}

/// One role in the work history.
///
/// `name` is the employer, following the JSON Resume schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Work {
    pub position: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub end_date: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub institution: Option<String>,
    pub study_type: Option<String>,
    pub area: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub end_date: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: Option<String>,
    #[serde(deserialize_with = "nullable_list")]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Volunteer {
    pub position: Option<String>,
    pub organization: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Language {
    pub language: Option<String>,
    pub fluency: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Interest {
    pub name: Option<String>,
    #[serde(deserialize_with = "nullable_list")]
    pub keywords: Vec<String>,
}

/// A published work. `name` is the title.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Publication {
    pub name: Option<String>,
    pub publisher: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub release_date: Option<String>,
    pub summary: Option<String>,
    pub url: Option<String>,
}

/// Deserializes a list that may be missing or `null` into a `Vec`.
fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes a scalar into text regardless of its JSON type.
///
/// Used for date fields so that a number such as `2020` (or `0`) reaches the
/// date normalizer as text instead of aborting the whole document.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    })
}
