//! Output system for the `cvgen` application.
//!
//! This module renders a résumé into its two documents and writes them out.
//!
//! # Available Formatters
//!
//! - **LaTeX**: a moderncv document source, ready for `latexmk`/`xelatex`
//! - **Text**: an unformatted text version of the same résumé
//!
//! # Usage
//!
//! Both formatters take a borrowed [`Resume`](crate::data::Resume) and return
//! a `String`. They are pure and stateless; writing is done separately by
//! [`write_document`].

pub mod latex;
pub mod sections;
pub mod text;

use crate::error::{CvError, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// LaTeX output renderer function.
///
/// See [`latex::render`] for full documentation.
pub use latex::render as render_tex;

/// Plain-text output renderer function.
///
/// See [`text::render`] for full documentation.
pub use text::render as render_text;

pub use latex::TexTheme;
pub use sections::Section;

/// Writes a rendered document to `path`, or to stdout when `path` is `None`.
///
/// # Returns
/// * `Ok(bytes)` - Number of bytes written
/// * `Err(CvError::Write)` - If the destination could not be created or written
pub fn write_document(contents: &str, path: Option<&Path>) -> Result<usize> {
    let label = path.unwrap_or(Path::new("<stdout>"));
    let wrap = |source: io::Error| CvError::Write {
        path: label.to_path_buf(),
        source,
    };

    let mut writer: Box<dyn Write> = match path {
        Some(path) => Box::new(File::create(path).map_err(wrap)?),
        None => Box::new(io::stdout().lock()),
    };
    writer.write_all(contents.as_bytes()).map_err(wrap)?;
    writer.flush().map_err(wrap)?;

    Ok(contents.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_document_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cv.text");

        let written = write_document("Jane Doe\n", Some(&path)).unwrap();
        assert_eq!(written, 9);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Jane Doe\n");
    }

    #[test]
    fn test_write_document_to_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("cv.tex");

        let err = write_document("x", Some(&path)).unwrap_err();
        assert!(matches!(err, CvError::Write { .. }));
    }
}
