//! Chart command handler
//!
//! 1. Load config and resolve chart requests
//! 2. Reject clashing output paths before touching any log
//! 3. Parse the logs once per record kind
//! 4. Aggregate and render every chart to each of its targets

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use mrclog::cli::Cli;
use mrclog::report::validate_outputs;
use mrclog::{
    Aggregator, ChartKind, ChartRequest, ChartSpec, CollectingSink, Config, Reporter,
    SvgReporter, TimingTable, TracingSink,
};

/// Aggregate the inputs and draw every requested chart.
#[cfg(not(tarpaulin_include))]
pub fn handle(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let requests = cli.chart_requests();
    if requests.is_empty() {
        bail!("Nothing to do: pass at least one of --time, --olken-time or --accuracy");
    }
    validate_outputs(&requests)?;

    if let Some(jobs) = cli.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .thread_name(|i| format!("mrclog-{}", i))
            .build_global()
            .context("Failed to create worker pool")?;
    }

    let extensions = cli
        .extensions
        .clone()
        .unwrap_or_else(|| config.input.extensions.clone());
    let tracing_sink = TracingSink;
    let sink = CollectingSink::forwarding_to(&tracing_sink);
    let aggregator = Aggregator::new(&extensions, &sink)?;
    let reporter = SvgReporter::new(config.charts.width, config.charts.height);

    // Both runtime charts read the same records.
    let timings = if requests
        .iter()
        .any(|r| matches!(r.kind, ChartKind::Runtime | ChartKind::OlkenRuntime))
    {
        Some(
            aggregator
                .collect_timings(&cli.inputs)
                .context("Failed to collect timing data")?,
        )
    } else {
        None
    };

    for request in &requests {
        let chart = build_chart(request, cli, &config, &aggregator, timings.as_ref())?;
        reporter
            .render_all(&chart, &request.targets)
            .with_context(|| format!("Failed to draw the {} chart", request.kind))?;
    }

    if !sink.is_empty() {
        info!("{} warning(s) while reading logs", sink.len());
    }
    Ok(())
}

fn build_chart(
    request: &ChartRequest,
    cli: &Cli,
    config: &Config,
    aggregator: &Aggregator<'_>,
    timings: Option<&TimingTable>,
) -> Result<ChartSpec> {
    let aggregate = match (request.kind, timings) {
        (ChartKind::Runtime, Some(t)) => t.series(&config.charts.runtime_algorithms),
        (ChartKind::OlkenRuntime, Some(t)) => t.series(&config.charts.olken_algorithms),
        (ChartKind::Runtime, None) => {
            aggregator.aggregate(&cli.inputs, &config.charts.runtime_algorithms)?
        }
        (ChartKind::OlkenRuntime, None) => {
            aggregator.aggregate(&cli.inputs, &config.charts.olken_algorithms)?
        }
        (ChartKind::Accuracy, _) => aggregator
            .aggregate_accuracies(&cli.inputs)
            .with_context(|| format!("Failed to collect data for the {} chart", request.kind))?,
    };

    if aggregate.is_empty() {
        warn!("No data found for the {} chart", request.kind);
    }
    if cli.json {
        let doc = serde_json::json!({
            "chart": request.kind.to_string(),
            "series": aggregate.series(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }

    Ok(match request.kind {
        ChartKind::Runtime | ChartKind::OlkenRuntime => ChartSpec::runtime(&aggregate),
        ChartKind::Accuracy => ChartSpec::accuracy(&aggregate),
    })
}
