//! Library crate for cvgen
//!
//! Renders a [JSON Resume](https://jsonresume.org) document into two
//! documents: a LaTeX source for the `moderncv` class and a plain-text CV.
//!
//! # Features
//!
//! - **Tolerant input**: every field is optional and falls back to a default
//! - **LaTeX escaping**: all résumé text is escaped before it is typeset
//! - **Two formatters**: [`render_tex`] and [`render_text`] are pure functions
//!   of the record, so they are trivial to test and to embed elsewhere
//!
//! # Modules
//!
//! - [`data`]: The résumé record (`Resume` and its sections)
//! - [`cli`]: Command-line interface definitions
//! - [`escape`]: LaTeX escaping
//! - [`dates`]: Reducing dates to display years
//! - [`output`]: Section renderers and the two document assemblers
//! - [`source`]: Loading the record from disk
//! - [`metrics`]: Optional phase timing
//!
//! # Example
//!
//! ```rust
//! use cvgen::{parse_resume, render_tex, render_text, TexTheme};
//!
//! let resume = parse_resume(r#"{"basics": {"name": "Jane Doe", "email": "j@x.com"}}"#).unwrap();
//! assert!(render_tex(&resume, &TexTheme::default()).contains(r"\name{Jane}{Doe}"));
//! assert_eq!(render_text(&resume), "Jane Doe\nj@x.com\n");
//! ```

pub mod cli;
pub mod data;
pub mod dates;
pub mod error;
pub mod escape;
pub mod metrics;
pub mod output;
pub mod source;
pub mod utils;

pub use cli::Args;
pub use data::Resume;
pub use error::CvError;
pub use output::{TexTheme, render_tex, render_text};
pub use source::{load_resume, parse_resume};
