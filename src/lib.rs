//! mrclog library
//!
//! Extracts timing and accuracy records from MRC trace-run logs, aggregates
//! them per algorithm and trace, and charts the result.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod label;
pub mod pattern;
pub mod report;

pub use aggregate::{AggregateSeries, Aggregator, TimingTable, ACCURACY_ALGORITHMS};
pub use config::Config;
pub use error::{AnalyzeError, RecordKind};
pub use extract::{CollectingSink, Diagnostic, DiagnosticSink, RecordExtractor, TracingSink};
pub use label::reduce_to_common_label;
pub use pattern::{build_pattern, Severity};
pub use report::{ChartKind, ChartRequest, ChartSpec, OutputTargets, Reporter, SvgReporter};
