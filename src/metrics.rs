//! Phase timing for `cvgen --profile`.
//!
//! This module provides:
//! - [`PhaseTimer`] - A wrapper around `Instant` for timing one phase
//! - [`ProfileData`] - The collected phase results plus free-form metadata
//! - [`print_profile_summary`] - Terminal output for profiling results
//!
//! # Usage
//!
//! ```rust
//! use cvgen::metrics::{PhaseTimer, ProfileData};
//!
//! let mut profile = ProfileData::new();
//! let timer = PhaseTimer::new("Load");
//!
//! // ... do work ...
//!
//! profile.add_phase(timer.finish());
//! assert_eq!(profile.phases.len(), 1);
//! ```

use std::fmt::Write as _;
use std::time::{Duration, Instant};

/// A timer for measuring the duration of a specific phase.
#[derive(Debug, Clone)]
pub struct PhaseTimer {
    /// The name of the phase being timed
    pub name: String,
    /// The start time of the phase
    pub start: Instant,
}

impl PhaseTimer {
    /// Creates a new timer and starts timing the specified phase.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            start: Instant::now(),
        }
    }

    /// Finishes timing the phase and returns the elapsed duration.
    pub fn finish(self) -> PhaseResult {
        PhaseResult {
            name: self.name,
            duration: self.start.elapsed(),
        }
    }
}

/// The result of a completed phase timing operation.
#[derive(Debug, Clone)]
pub struct PhaseResult {
    pub name: String,
    pub duration: Duration,
}

/// Profiling data for one run.
#[derive(Debug, Clone, Default)]
pub struct ProfileData {
    /// Timing results for each phase, in the order they ran
    pub phases: Vec<PhaseResult>,
    /// Additional facts about the run, printed after the timings
    pub metadata: Vec<(String, String)>,
}

impl ProfileData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_phase(&mut self, phase: PhaseResult) {
        self.phases.push(phase);
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.push((key.to_string(), value.to_string()));
    }

    /// Gets the total duration of all phases combined.
    pub fn total_duration(&self) -> Duration {
        self.phases.iter().map(|p| p.duration).sum()
    }
}

/// Formats the profile as a small table.
///
/// # Example Output
/// ```text
/// Phase timings
///   Load               0.412 ms
///   Render typeset     0.051 ms
///   Total              0.463 ms
/// ```
pub fn format_profile_summary(profile: &ProfileData) -> String {
    let mut out = String::from("Phase timings\n");
    for phase in &profile.phases {
        let _ = writeln!(out, "  {:<16} {:>9.3} ms", phase.name, millis(phase.duration));
    }
    let _ = writeln!(
        out,
        "  {:<16} {:>9.3} ms",
        "Total",
        millis(profile.total_duration())
    );
    for (key, value) in &profile.metadata {
        let _ = writeln!(out, "  {:<16} {}", key, value);
    }
    out
}

/// Prints the profile summary to stderr, keeping stdout free for documents.
pub fn print_profile_summary(profile: &ProfileData) {
    eprint!("\n{}", format_profile_summary(profile));
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
