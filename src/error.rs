//! Error types for loading résumés and writing rendered artifacts.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library.
///
/// Only I/O at the program boundary and malformed input can fail. Unparseable
/// dates and missing fields are handled by fallbacks, never reported here.
#[derive(Debug, Error)]
pub enum CvError {
    #[error("failed to read résumé from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("résumé at {} is not valid JSON Resume data", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CvError>;
