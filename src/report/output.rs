//! Which charts to draw and where to write them.

use std::collections::HashSet;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{AnalyzeError, Result};

/// The charts this tool can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Runtime of the sampling algorithms.
    Runtime,
    /// Runtime of the exact Olken algorithm.
    OlkenRuntime,
    /// Mean absolute error of the sampling algorithms.
    Accuracy,
}

impl ChartKind {
    pub fn default_output(&self) -> &'static str {
        match self {
            ChartKind::Runtime => "time.svg",
            ChartKind::OlkenRuntime => "olken-time.svg",
            ChartKind::Accuracy => "accuracy.svg",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Runtime => "runtime",
            ChartKind::OlkenRuntime => "olken runtime",
            ChartKind::Accuracy => "accuracy",
        };
        f.write_str(name)
    }
}

/// Where a chart goes: the paths the user named, or the chart's default file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTargets {
    Explicit(Vec<PathBuf>),
    Default(PathBuf),
}

impl OutputTargets {
    /// Targets for a chart flag: `None` means the chart was not requested,
    /// an empty list means "use the default".
    pub fn from_flag(kind: ChartKind, paths: Option<Vec<PathBuf>>) -> Option<Self> {
        match paths {
            None => None,
            Some(paths) if paths.is_empty() => {
                Some(OutputTargets::Default(PathBuf::from(kind.default_output())))
            }
            Some(paths) => Some(OutputTargets::Explicit(paths)),
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        match self {
            OutputTargets::Explicit(paths) => paths,
            OutputTargets::Default(path) => std::slice::from_ref(path),
        }
    }
}

/// A requested chart and its targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub targets: OutputTargets,
}

impl ChartRequest {
    pub fn new(kind: ChartKind, targets: OutputTargets) -> Self {
        Self { kind, targets }
    }
}

/// Drop `.` components, so `./out.svg` and `out.svg` compare equal.
fn lexical_key(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Fail if any output path is requested twice, within or across charts.
///
/// Paths are compared lexically; symlinks and `..` are not resolved.
pub fn validate_outputs(requests: &[ChartRequest]) -> Result<()> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    for request in requests {
        for path in request.targets.paths() {
            if !seen.insert(lexical_key(path)) {
                return Err(AnalyzeError::DuplicateOutputPath { path: path.clone() });
            }
        }
    }
    Ok(())
}
