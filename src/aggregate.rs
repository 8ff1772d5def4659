//! Cross-file aggregation of extracted records.
//!
//! Inputs are expanded into log files, each file is parsed on the rayon pool,
//! and the values of allow-listed algorithms are bucketed by file path. The
//! per-algorithm maps are ordered by path string, whatever order the files
//! were found or parsed in.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{AnalyzeError, Result};
use crate::extract::{
    Diagnostic, DiagnosticSink, PerFileAccuracy, PerFileTimings, RecordExtractor,
};
use crate::label::{file_stem, group_label};

/// Algorithms compared by the accuracy chart.
pub const ACCURACY_ALGORITHMS: [&str; 2] = ["Evicting-Map", "Fixed-Size-SHARDS"];

/// One algorithm's values, keyed and ordered by file path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    pub algorithm: String,
    pub points: BTreeMap<String, f64>,
}

/// Per-algorithm series, in allow-list order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateSeries {
    series: Vec<Series>,
}

impl AggregateSeries {
    /// An empty series for each distinct algorithm, keeping first-seen order.
    pub fn with_algorithms<S: AsRef<str>>(algorithms: &[S]) -> Self {
        let mut series: Vec<Series> = Vec::new();
        for algo in algorithms {
            let algo = algo.as_ref();
            if !series.iter().any(|s| s.algorithm == algo) {
                series.push(Series {
                    algorithm: algo.to_string(),
                    points: BTreeMap::new(),
                });
            }
        }
        Self { series }
    }

    /// Record `value` for `path` under `algorithm`.
    ///
    /// Returns false (and stores nothing) if `algorithm` is not tracked.
    pub fn insert(&mut self, algorithm: &str, path: &str, value: f64) -> bool {
        match self.series.iter_mut().find(|s| s.algorithm == algorithm) {
            Some(series) => {
                series.points.insert(path.to_string(), value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, algorithm: &str) -> Option<&BTreeMap<String, f64>> {
        self.series
            .iter()
            .find(|s| s.algorithm == algorithm)
            .map(|s| &s.points)
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn algorithms(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.algorithm.as_str())
    }

    /// True when no algorithm has any value.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }

    /// One x-axis label per position.
    ///
    /// The n-th file stem of every series forms a group that is reduced to its
    /// common substring. Stops at the shortest series.
    pub fn axis_labels(&self) -> Vec<String> {
        let stems: Vec<Vec<String>> = self
            .series
            .iter()
            .map(|s| s.points.keys().map(|path| file_stem(path)).collect())
            .collect();
        let len = stems.iter().map(Vec::len).min().unwrap_or(0);

        (0..len)
            .map(|i| {
                let group: Vec<&str> = stems.iter().map(|s| s[i].as_str()).collect();
                group_label(&group)
            })
            .collect()
    }
}

/// Expand files and directories into a flat list of regular files.
///
/// Files are kept as given. Directories are walked recursively and their
/// files are returned rooted at the directory path. Missing inputs and
/// directory entries that cannot be read are reported to `sink` and skipped.
pub fn expand_inputs(inputs: &[PathBuf], sink: &dyn DiagnosticSink) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
            continue;
        }
        if !input.exists() {
            sink.report(Diagnostic::MissingInput {
                path: input.clone(),
            });
            continue;
        }
        for entry in WalkDir::new(input) {
            match entry {
                Ok(entry) if entry.path().is_file() => files.push(entry.into_path()),
                Ok(_) => {}
                Err(err) => sink.report(unreadable_entry(input, &err)),
            }
        }
    }
    files
}

fn unreadable_entry(root: &Path, err: &walkdir::Error) -> Diagnostic {
    let path = err.path().unwrap_or(root).to_path_buf();
    let reason = match err.io_error() {
        Some(io) => io.to_string(),
        None => err.to_string(),
    };
    Diagnostic::UnreadableEntry { path, reason }
}

/// Whether `path` ends in one of `extensions` (given as `.log` or `log`).
pub fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|allowed| allowed.as_ref().trim_start_matches('.') == ext)
}

/// Read a whole log. The file is closed before this returns.
fn read_log(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| AnalyzeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn source_id(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Compute times of every parsed log, before allow-list filtering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingTable {
    per_file: Vec<(String, PerFileTimings)>,
}

impl TimingTable {
    /// Number of logs parsed.
    pub fn len(&self) -> usize {
        self.per_file.len()
    }

    pub fn is_empty(&self) -> bool {
        self.per_file.is_empty()
    }

    /// Bucket the allow-listed algorithms' totals by file path.
    pub fn series<S: AsRef<str>>(&self, algorithm_allowlist: &[S]) -> AggregateSeries {
        let mut aggregate = AggregateSeries::with_algorithms(algorithm_allowlist);
        for (source, times) in &self.per_file {
            for (algo, total) in times {
                aggregate.insert(algo, source, *total);
            }
        }
        aggregate
    }
}

/// Parses log files and buckets their values by algorithm.
pub struct Aggregator<'a> {
    extractor: RecordExtractor,
    extensions: Vec<String>,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Aggregator<'a> {
    pub fn new<S: AsRef<str>>(extensions: &[S], sink: &'a dyn DiagnosticSink) -> Result<Self> {
        Ok(Self {
            extractor: RecordExtractor::new()?,
            extensions: extensions.iter().map(|e| e.as_ref().to_string()).collect(),
            sink,
        })
    }

    /// Every input file with an accepted extension.
    pub fn collect_files(&self, inputs: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = expand_inputs(inputs, self.sink);
        files.retain(|f| has_extension(f, &self.extensions));
        debug!("{} log file(s) selected", files.len());
        files
    }

    /// Parse every timing log once.
    ///
    /// Each log's trace read time is extracted too, so a log with more than
    /// one fails the run.
    pub fn collect_timings(&self, inputs: &[PathBuf]) -> Result<TimingTable> {
        let files = self.collect_files(inputs);

        let per_file = files
            .par_iter()
            .map(|path| -> Result<(String, PerFileTimings)> {
                let source = source_id(path);
                let text = read_log(path)?;
                let read_time =
                    self.extractor
                        .extract_trace_read_time(&text, &source, self.sink)?;
                let times = self
                    .extractor
                    .extract_compute_times(&text, &source, self.sink)?;
                for (algo, total) in &times {
                    info!(
                        "Times for {}:{} -- Trace read: {} | Total compute: {}",
                        source, algo, read_time, total
                    );
                }
                Ok((source, times))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TimingTable { per_file })
    }

    /// Total compute time per allow-listed algorithm and file.
    pub fn aggregate<S: AsRef<str>>(
        &self,
        inputs: &[PathBuf],
        algorithm_allowlist: &[S],
    ) -> Result<AggregateSeries> {
        Ok(self.collect_timings(inputs)?.series(algorithm_allowlist))
    }

    /// Mean absolute error per file for the [`ACCURACY_ALGORITHMS`].
    pub fn aggregate_accuracies(&self, inputs: &[PathBuf]) -> Result<AggregateSeries> {
        let files = self.collect_files(inputs);

        let per_file = files
            .par_iter()
            .map(|path| -> Result<(String, PerFileAccuracy)> {
                let source = source_id(path);
                let text = read_log(path)?;
                let accuracies = self
                    .extractor
                    .extract_accuracies(&text, &source, self.sink)?;
                for (algo, (mae, mse)) in &accuracies {
                    info!(
                        "Accuracies for {}:{} -- MAE: {} | MSE: {}",
                        source, algo, mae, mse
                    );
                }
                Ok((source, accuracies))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut aggregate = AggregateSeries::with_algorithms(&ACCURACY_ALGORITHMS);
        for (source, accuracies) in per_file {
            for (algo, (mae, _mse)) in accuracies {
                aggregate.insert(&algo, &source, mae);
            }
        }
        Ok(aggregate)
    }
}
