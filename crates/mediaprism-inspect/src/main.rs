//! mediaprism-inspect
//!
//! Decode media envelope files and print one report line per file.
//! - Usage: `mediaprism-inspect [--config <path>] <file>...`
//! - Logging via `RUST_LOG` (e.g. `RUST_LOG=mediaprism_core=trace`)

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use mediaprism_inspect::cli::Cli;
use mediaprism_inspect::{config, report};

fn main() -> ExitCode {
    // usage errors exit with status 2 inside `parse`
    let cli = Cli::parse();

    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cfg = match cli.config.as_deref().map(config::load_from_file) {
        Some(Ok(cfg)) => cfg,
        Some(Err(e)) => {
            tracing::error!(error = %e, "config load failed");
            return ExitCode::from(2);
        }
        None => config::InspectConfig::default(),
    };
    let limits = cfg.decoder.limits();
    tracing::info!(?limits, files = cli.files.len(), "mediaprism-inspect starting");

    let mut all_ok = true;
    for file in &cli.files {
        let r = match std::fs::read(file) {
            Ok(bytes) => report::inspect_bytes(file, &bytes, &limits),
            Err(e) => {
                tracing::warn!(file = %file, error = %e, "read failed");
                report::unreadable(file)
            }
        };
        all_ok &= r.ok;
        println!("{}", report::render(&r, cfg.output.format));
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
