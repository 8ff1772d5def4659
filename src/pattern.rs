//! Line patterns for the benchmark log grammar.
//!
//! Every log line looks like
//!
//! ```text
//! [INFO] [2024-01-31 12:00:00] [ src/trace_runner.c:42 ] [errno 0: Success] <payload>
//! ```
//!
//! and the builders here produce a regex for a given severity and payload.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{AnalyzeError, Result};

/// Emitter and algorithm paths. Spaces and control characters are not supported.
pub const PATH_PATTERN: &str = r"[a-zA-Z0-9_./\\-]+";

/// Decimal numbers as the benchmark prints them. ASCII digits only, so every
/// match parses as `f64`.
pub const FLOAT_PATTERN: &str = r"[0-9]+[.][0-9]+";

/// Log severity levels emitted by the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Verbose,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    pub const ALL: [Severity; 7] = [
        Severity::Verbose,
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// The tag as it appears between brackets in a log line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Verbose => "VERBOSE",
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = AnalyzeError;

    fn from_str(s: &str) -> Result<Self> {
        Severity::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| AnalyzeError::InvalidSeverity(s.to_string()))
    }
}

/// Build the full line pattern for `severity` followed by `payload`.
///
/// The result is anchored at both ends, so a payload that should tolerate
/// trailing text has to include it explicitly. The payload is grouped, so an
/// alternation in it stays between the prefix and the end anchor.
pub fn build_pattern(severity: Severity, payload: &str) -> Result<Regex> {
    let pattern = format!(
        r"^\[{level}\] \[\d+-\d+-\d+ \d+:\d+:\d+\] \[ {path}:\d+ \] \[errno \d+: [^\]]*\] (?:{payload})$",
        level = severity.as_str(),
        path = PATH_PATTERN,
        payload = payload,
    );
    Ok(Regex::new(&pattern)?)
}

/// Like [`build_pattern`], for a severity given by name.
pub fn build_pattern_for_level(level: &str, payload: &str) -> Result<Regex> {
    build_pattern(level.parse()?, payload)
}
