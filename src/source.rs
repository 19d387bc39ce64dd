//! Loading the résumé record from disk.

use crate::data::Resume;
use crate::error::{CvError, Result};
use std::fs;
use std::path::Path;

/// Parses a résumé from JSON text.
pub fn parse_resume(json: &str) -> serde_json::Result<Resume> {
    serde_json::from_str(json)
}

/// Reads and parses the résumé at `path`.
///
/// # Errors
/// * [`CvError::Read`] if the file cannot be read
/// * [`CvError::Parse`] if the contents are not a JSON object of the expected shape
pub fn load_resume(path: &Path) -> Result<Resume> {
    let raw = fs::read_to_string(path).map_err(|source| CvError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "read résumé source");

    let resume = parse_resume(&raw).map_err(|source| CvError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        work = resume.work.len(),
        education = resume.education.len(),
        skills = resume.skills.len(),
        publications = resume.publications.len(),
        "parsed résumé"
    );
    Ok(resume)
}
