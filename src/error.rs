//! Error types for log analysis.
//!
//! Everything here is fatal for the run. Missing records are not errors; they
//! are reported as [`Diagnostic`](crate::extract::Diagnostic)s instead.

use std::fmt;
use std::path::PathBuf;

/// The kinds of record the extractor knows how to find in a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    TraceReadTime,
    ComputeTime,
    Accuracy,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::TraceReadTime => "trace read time",
            RecordKind::ComputeTime => "compute time",
            RecordKind::Accuracy => "accuracy",
        };
        f.write_str(name)
    }
}

/// Errors that abort an analysis run.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Invalid severity '{0}' (expected one of VERBOSE, TRACE, DEBUG, INFO, WARN, ERROR, FATAL)")]
    InvalidSeverity(String),

    #[error("Invalid payload pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("log {source_id} has multiple {kind} records ({count} found)")]
    AmbiguousRecord {
        source_id: String,
        kind: RecordKind,
        count: usize,
    },

    #[error("log {source_id} has a malformed number '{text}' in its {kind} record")]
    MalformedNumber {
        source_id: String,
        kind: RecordKind,
        text: String,
    },

    #[error("Output path {path:?} is requested more than once")]
    DuplicateOutputPath { path: PathBuf },

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render chart to {path:?}: {message}")]
    Render { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
