//! Non-fatal findings raised while scanning logs.

use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::RecordKind;

/// Something worth telling the user that does not stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A log had no record of the given kind; a default value was used.
    NoMatchFound { source_id: String, kind: RecordKind },
    /// An input path did not exist.
    MissingInput { path: PathBuf },
    /// Part of an input directory could not be read and was skipped.
    UnreadableEntry { path: PathBuf, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoMatchFound { source_id, kind } => {
                write!(f, "log {} has no {}", source_id, kind)
            }
            Diagnostic::MissingInput { path } => {
                write!(f, "input {} does not exist", path.display())
            }
            Diagnostic::UnreadableEntry { path, reason } => {
                write!(f, "skipped {}: {}", path.display(), reason)
            }
        }
    }
}

/// Receives diagnostics from the extractor and aggregator.
///
/// Sinks are shared across worker threads.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Logs every diagnostic as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
    }
}

/// Keeps diagnostics in memory, optionally forwarding them to another sink.
#[derive(Default)]
pub struct CollectingSink<'a> {
    seen: Mutex<Vec<Diagnostic>>,
    forward: Option<&'a dyn DiagnosticSink>,
}

impl<'a> CollectingSink<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect and also pass each diagnostic on to `sink`.
    pub fn forwarding_to(sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
            forward: Some(sink),
        }
    }

    /// Everything reported so far, in arrival order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self.seen.lock() {
            Ok(seen) => seen.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.diagnostics().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink<'_> {
    fn report(&self, diagnostic: Diagnostic) {
        if let Some(sink) = self.forward {
            sink.report(diagnostic.clone());
        }
        match self.seen.lock() {
            Ok(mut seen) => seen.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}
