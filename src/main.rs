//! Main entry point for the `cvgen` CLI application.
//!
//! `cvgen` turns a JSON Resume document into a moderncv LaTeX source and a
//! plain-text CV.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Loads the résumé with [`load_resume`]
//! - Renders both documents before anything is written, so a bad input never
//!   leaves a half-updated pair of files behind
//! - Writes the selected documents to files or stdout
//!
//! # Flags of Interest
//! - `--format both|tex|text`: Choose which documents to produce
//! - `--stdout`: Print instead of writing files
//! - `--color`, `--style`: moderncv theme
//! - `--profile`: Show per-phase timings
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use cvgen::cli::Args;
use cvgen::metrics::{PhaseTimer, ProfileData, print_profile_summary};
use cvgen::output::write_document;
use cvgen::{TexTheme, load_resume, render_tex, render_text};
use humansize::{DECIMAL, format_size};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Writes one rendered document and reports where it went.
fn emit(kind: &str, contents: &str, path: &Path, args: &Args) -> Result<usize> {
    let destination = (!args.stdout).then_some(path);
    let written = write_document(contents, destination)
        .with_context(|| format!("Failed to write {kind} document"))?;

    if let Some(path) = destination {
        info!(
            "Generated {} ({})",
            path.display(),
            format_size(written as u64, DECIMAL)
        );
    }
    Ok(written)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut profile = ProfileData::new();

    // Load → render both → write. Nothing touches disk until rendering is done.
    let timer = PhaseTimer::new("Load");
    let resume = load_resume(&args.input)
        .with_context(|| format!("Could not load résumé from {}", args.input.display()))?;
    profile.add_phase(timer.finish());

    let tex = if args.format.includes_tex() {
        let timer = PhaseTimer::new("Render typeset");
        let theme = TexTheme {
            color: args.color,
            style: args.style,
        };
        let tex = render_tex(&resume, &theme);
        profile.add_phase(timer.finish());
        Some(tex)
    } else {
        None
    };

    let text = if args.format.includes_text() {
        let timer = PhaseTimer::new("Render text");
        let text = render_text(&resume);
        profile.add_phase(timer.finish());
        Some(text)
    } else {
        None
    };

    let timer = PhaseTimer::new("Write");
    if let Some(tex) = &tex {
        let size = emit("LaTeX", tex, &args.tex, &args)?;
        profile.add_metadata("LaTeX size", &format_size(size as u64, DECIMAL));
    }
    if let Some(text) = &text {
        if tex.is_some() && args.stdout {
            println!();
        }
        let size = emit("plain-text", text, &args.text, &args)?;
        profile.add_metadata("Text size", &format_size(size as u64, DECIMAL));
    }
    profile.add_phase(timer.finish());

    if args.profile {
        print_profile_summary(&profile);
    }

    Ok(())
}
