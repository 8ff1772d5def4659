//! CLI definitions for mrclog
//!
//! Kept out of main.rs so tests can build and inspect the parser.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use std::path::PathBuf;

use crate::report::{ChartKind, ChartRequest, OutputTargets};

/// Build clap styles.
///
/// - Green: headers, usage, literals
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "mrclog")]
#[command(about = "Chart runtime and accuracy from MRC trace-run logs")]
#[command(
    long_about = "mrclog - Chart runtime and accuracy from MRC trace-run logs.

Scans benchmark logs for 'Trace Read Time', per-algorithm compute time and
per-algorithm accuracy (MAE/MSE) records, groups them by algorithm and trace
file, and draws one line chart per requested kind. X-axis labels are the
common part of the trace file names.

A chart is drawn only when its flag is given. A flag without paths writes the
default file (time.svg, olken-time.svg, accuracy.svg).

EXAMPLES:
    mrclog -i logs/ --time                      Runtime chart to time.svg
    mrclog -i logs/ --olken-time olken.svg      Olken runtime to olken.svg
    mrclog -i a.log b.log --accuracy --time     Both charts, default names
    mrclog -i logs/ --time --json               Also print the data as JSON"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Log files and/or directories to scan
    #[arg(long, short, num_args = 1.., required = true, value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// Extensions to process (e.g. '--extensions .log .txt')
    #[arg(long, num_args = 1.., value_name = "EXT")]
    pub extensions: Option<Vec<String>>,

    /// Draw the runtime chart [default file: time.svg]
    #[arg(long, num_args = 0.., value_name = "OUTPUT")]
    pub time: Option<Vec<PathBuf>>,

    /// Draw the Olken runtime chart [default file: olken-time.svg]
    #[arg(long, num_args = 0.., value_name = "OUTPUT")]
    pub olken_time: Option<Vec<PathBuf>>,

    /// Draw the accuracy chart [default file: accuracy.svg]
    #[arg(long, num_args = 0.., value_name = "OUTPUT")]
    pub accuracy: Option<Vec<PathBuf>>,

    /// Print each aggregate as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Config file (default: ~/.config/mrclog/config.toml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Worker threads for parsing logs (default: one per CPU)
    #[arg(long, short, value_name = "N")]
    pub jobs: Option<usize>,

    /// More output (-v info, -vv debug); RUST_LOG overrides
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The charts requested on the command line, in drawing order.
    pub fn chart_requests(&self) -> Vec<ChartRequest> {
        [
            (ChartKind::Runtime, &self.time),
            (ChartKind::OlkenRuntime, &self.olken_time),
            (ChartKind::Accuracy, &self.accuracy),
        ]
        .into_iter()
        .filter_map(|(kind, flag)| {
            OutputTargets::from_flag(kind, flag.clone()).map(|t| ChartRequest::new(kind, t))
        })
        .collect()
    }
}
