//! Command handlers for the mrclog CLI.

pub mod plot;

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Send `tracing` output to stderr.
///
/// `RUST_LOG` takes precedence; otherwise warnings only, `info` with `-v`
/// and `debug` with `-vv`.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mrclog={}", default_level)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
