//! Record extraction from whole-file log text.
//!
//! Three record kinds are recognized, all logged at `INFO`:
//!
//! - **trace read time**: `Trace Read Time: 2.500 sec`, at most one per log
//! - **compute time**: `<algo> -- Histogram Time: .. | Post-Process Time: .. | MRC Time: .. | Total Time: ..`
//! - **accuracy**: `<algo> -- Mean Absolute Error (MAE): .. | Mean Squared Error (MSE): ..`
//!
//! Compute time and accuracy records appear once per algorithm. A log without
//! a record is reported to the [`DiagnosticSink`] and a default is returned.

mod diagnostics;
mod record;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use record::{scan, LogRecord};

use std::collections::BTreeMap;

use regex::Regex;

use crate::error::{AnalyzeError, RecordKind, Result};
use crate::pattern::{build_pattern, Severity, FLOAT_PATTERN, PATH_PATTERN};

/// Algorithm name to total compute seconds for one log.
pub type PerFileTimings = BTreeMap<String, f64>;

/// Algorithm name to (mean absolute error, mean squared error) for one log.
pub type PerFileAccuracy = BTreeMap<String, (f64, f64)>;

fn trace_read_time_payload() -> String {
    format!(r"Trace Read Time: ({f}) sec", f = FLOAT_PATTERN)
}

fn compute_time_payload() -> String {
    format!(
        r"({p}) -- Histogram Time: ({f}) [|] Post-Process Time: ({f}) [|] MRC Time: ({f}) [|] Total Time: ({f})",
        p = PATH_PATTERN,
        f = FLOAT_PATTERN,
    )
}

// Accuracy lines were never constrained at the end, so anything may follow.
fn accuracy_payload() -> String {
    format!(
        r"({p}) -- Mean Absolute Error \(MAE\): ({f}) [|] Mean Squared Error \(MSE\): ({f}).*",
        p = PATH_PATTERN,
        f = FLOAT_PATTERN,
    )
}

/// Compiled patterns for every record kind.
///
/// Build once and share; extraction borrows immutably.
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    trace_read_time: Regex,
    compute_time: Regex,
    accuracy: Regex,
}

impl RecordExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            trace_read_time: build_pattern(Severity::Info, &trace_read_time_payload())?,
            compute_time: build_pattern(Severity::Info, &compute_time_payload())?,
            accuracy: build_pattern(Severity::Info, &accuracy_payload())?,
        })
    }

    /// The single trace read time in `text`, in seconds.
    ///
    /// Returns 0.0 (and reports a diagnostic) if there is none. More than one
    /// is an [`AnalyzeError::AmbiguousRecord`].
    pub fn extract_trace_read_time(
        &self,
        text: &str,
        source_id: &str,
        sink: &dyn DiagnosticSink,
    ) -> Result<f64> {
        let kind = RecordKind::TraceReadTime;
        let records = scan(&self.trace_read_time, text);
        match records.as_slice() {
            [] => {
                sink.report(no_match(source_id, kind));
                Ok(0.0)
            }
            [record] => record.float(0, source_id, kind),
            _ => Err(AnalyzeError::AmbiguousRecord {
                source_id: source_id.to_string(),
                kind,
                count: records.len(),
            }),
        }
    }

    /// Total compute time per algorithm.
    ///
    /// A repeated algorithm keeps its last value in scan order.
    pub fn extract_compute_times(
        &self,
        text: &str,
        source_id: &str,
        sink: &dyn DiagnosticSink,
    ) -> Result<PerFileTimings> {
        let kind = RecordKind::ComputeTime;
        let records = scan(&self.compute_time, text);
        if records.is_empty() {
            // Unfinished runs never print their timing block.
            sink.report(no_match(source_id, kind));
            return Ok(PerFileTimings::new());
        }

        let mut timings = PerFileTimings::new();
        for record in &records {
            let total = record.float(4, source_id, kind)?;
            timings.insert(record.text(0).to_string(), total);
        }
        Ok(timings)
    }

    /// Mean absolute and mean squared error per algorithm.
    pub fn extract_accuracies(
        &self,
        text: &str,
        source_id: &str,
        sink: &dyn DiagnosticSink,
    ) -> Result<PerFileAccuracy> {
        let kind = RecordKind::Accuracy;
        let records = scan(&self.accuracy, text);
        if records.is_empty() {
            sink.report(no_match(source_id, kind));
            return Ok(PerFileAccuracy::new());
        }

        let mut accuracies = PerFileAccuracy::new();
        for record in &records {
            let mae = record.float(1, source_id, kind)?;
            let mse = record.float(2, source_id, kind)?;
            accuracies.insert(record.text(0).to_string(), (mae, mse));
        }
        Ok(accuracies)
    }
}

fn no_match(source_id: &str, kind: RecordKind) -> Diagnostic {
    Diagnostic::NoMatchFound {
        source_id: source_id.to_string(),
        kind,
    }
}
