//! CLI interface definitions for the `cvgen` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`OutputFormat`]: which artifacts to produce
//! - [`ThemeColor`] and [`ThemeStyle`]: moderncv styling choices
//!
//! # Example
//!
//! ```bash
//! cvgen cv.json --tex build/cv.tex --text build/cv.text --color green
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for `cvgen`.
///
/// # Examples
///
/// ```rust
/// use cvgen::Args;
/// use clap::Parser;
///
/// let args = Args::parse_from(["cvgen", "resume.json", "--format", "tex"]);
/// assert!(args.format.includes_tex());
/// assert!(!args.format.includes_text());
/// ```
#[derive(Parser, Debug)]
#[command(name = "cvgen", author = "Adam DJ Brett", version, about)]
pub struct Args {
    /// JSON Resume document to render
    #[arg(default_value = "cv.json")]
    pub input: PathBuf,

    /// Where to write the LaTeX document
    #[arg(long, value_name = "FILE", default_value = "cv.tex")]
    pub tex: PathBuf,

    /// Where to write the plain-text document
    #[arg(long, value_name = "FILE", default_value = "cv.text")]
    pub text: PathBuf,

    /// Which documents to produce
    #[arg(long, value_enum, default_value_t = OutputFormat::Both)]
    pub format: OutputFormat,

    /// Write the documents to stdout instead of files
    #[arg(long, default_value_t = false)]
    pub stdout: bool,

    /// moderncv color scheme
    #[arg(long, value_enum, default_value_t = ThemeColor::Blue)]
    pub color: ThemeColor,

    /// moderncv style
    #[arg(long, value_enum, default_value_t = ThemeStyle::Classic)]
    pub style: ThemeStyle,

    /// Show a timing summary for each phase
    #[arg(long, default_value_t = false)]
    pub profile: bool,
}

/// Which rendered documents to produce.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum OutputFormat {
    Both,
    Tex,
    Text,
}

impl OutputFormat {
    pub fn includes_tex(self) -> bool {
        matches!(self, OutputFormat::Both | OutputFormat::Tex)
    }

    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Both | OutputFormat::Text)
    }
}

/// Color schemes shipped with moderncv.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum ThemeColor {
    Black,
    Blue,
    Burgundy,
    Green,
    Grey,
    Orange,
    Purple,
    Red,
}

impl ThemeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeColor::Black => "black",
            ThemeColor::Blue => "blue",
            ThemeColor::Burgundy => "burgundy",
            ThemeColor::Green => "green",
            ThemeColor::Grey => "grey",
            ThemeColor::Orange => "orange",
            ThemeColor::Purple => "purple",
            ThemeColor::Red => "red",
        }
    }
}

/// Layout styles shipped with moderncv.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum ThemeStyle {
    Banking,
    Casual,
    Classic,
    Fancy,
    Oldstyle,
}

impl ThemeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeStyle::Banking => "banking",
            ThemeStyle::Casual => "casual",
            ThemeStyle::Classic => "classic",
            ThemeStyle::Fancy => "fancy",
            ThemeStyle::Oldstyle => "oldstyle",
        }
    }
}
