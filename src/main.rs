// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: enumerate every reachable position and print one
//! report per depth.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ballsort_census::config::{EnumerationConfig, DEFAULT_PARALLEL_THRESHOLD};
use ballsort_census::enumerate::{
    Counters, DepthObserver, LevelEnumerator, MemorySnapshot, ReportPrinter,
};

/// Count ball sort puzzle positions by distance from the solved state.
#[derive(Parser)]
#[command(name = "ballsort", about = "Enumerate ball sort puzzle positions by depth")]
struct Cli {
    /// Number of colors
    #[arg(long, default_value_t = 4)]
    colors: usize,

    /// Number of spare tubes
    #[arg(long, default_value_t = 2)]
    spares: usize,

    /// Number of parallel workers to use
    #[arg(long, default_value_t = 2)]
    workers: usize,

    /// Frontier size below which a depth runs on one worker
    #[arg(long, default_value_t = DEFAULT_PARALLEL_THRESHOLD)]
    threshold: usize,

    /// Write a memory snapshot to `<PREFIX>.<depth>` after every depth
    #[arg(long, value_name = "PREFIX")]
    memprofile: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = EnumerationConfig::new(cli.colors, cli.spares, cli.workers)
        .with_parallel_threshold(cli.threshold);
    let mut enumerator = LevelEnumerator::new(config).context("invalid run parameters")?;

    let mut printer = ReportPrinter::new(io::stdout().lock());
    let mut snapshot = cli.memprofile.map(MemorySnapshot::new);

    let mut observers: Vec<&mut dyn DepthObserver> = vec![&mut printer];
    if let Some(snapshot) = snapshot.as_mut() {
        observers.push(snapshot);
    }

    let reports = enumerator.run(&mut observers);

    let stats = enumerator.statistics();
    tracing::info!(
        depths = reports.len(),
        positions = enumerator.visited_len(),
        starts = reports.iter().map(|r| r.starts).sum::<usize>(),
        predecessors = stats.get(Counters::PredecessorsGenerated),
        mappings = stats.get(Counters::MappingsExpanded),
        "done"
    );
    tracing::debug!("statistics:\n{}", stats);
    Ok(())
}
