/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info, warn};

use clave::board::sim::SimBoard;
use clave::config::BenchConfig;
use clave::dispatcher::Dispatcher;
use clave::roster::standard_roster;
use clave::tick::{Clock, MonotonicClock, TickDriver, TICK_INTERVAL};

// ── CLI argument definition ───────────────────────────────────────────────────

/// Clave bench runner (simulated board).
///
/// Example:
///   clave -c demos/bench.yaml -r 10000
#[derive(Debug, Parser)]
#[command(
    name = "clave",
    about = "Clave millisecond-tick dispatcher – simulated bench runner",
    long_about = None,
)]
struct Cli {
    /// Path to the YAML bench configuration file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// How long to run the bench, in milliseconds.
    /// Defaults to three hyperperiods of the task table.
    #[arg(short = 'r', long = "run-for")]
    run_for_ms: Option<u64>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialise structured logging.
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    info!("Clave bench starting up...");

    // ── Parse CLI arguments ───────────────────────────────────────────────────
    let cli = Cli::parse();

    info!(
        config     = ?cli.config,
        run_for_ms = ?cli.run_for_ms,
        "Configuration"
    );

    // ── Load bench configuration ──────────────────────────────────────────────
    let config = match &cli.config {
        Some(path) => {
            info!("Loading bench configuration from: {}", path.display());
            match BenchConfig::load_from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    error!("Failed to load bench configuration: {:#}", e);
                    process::exit(1);
                }
            }
        }
        None => {
            warn!("No configuration file provided, using stock task settings");
            BenchConfig::default()
        }
    };

    // ── Build the task table ──────────────────────────────────────────────────
    let tasks = standard_roster(&config, SimBoard::new());

    info!("Task table ({} task(s)):", tasks.len());
    for task in &tasks {
        info!(
            "  [{name}]  period={period}ms  priority={priority}  enabled={enabled}",
            name = task.name(),
            period = task.period_ms(),
            priority = task.priority(),
            enabled = task.is_enabled(),
        );
    }

    let mut dispatcher = match Dispatcher::new(tasks) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            error!("Invalid task table: {e}");
            process::exit(1);
        }
    };

    let hyperperiod = dispatcher.hyperperiod_ms();
    match hyperperiod {
        Some(ms) => info!(hyperperiod_ms = ms, "due-pattern repeats every hyperperiod"),
        None => warn!("hyperperiod overflows u64, defaulting the run window"),
    }
    let run_for_ms = cli
        .run_for_ms
        .unwrap_or_else(|| hyperperiod.map(|h| h.saturating_mul(3)).unwrap_or(6_000));

    // ── Run ───────────────────────────────────────────────────────────────────
    let clock = MonotonicClock::new();
    let driver = TickDriver::start(dispatcher.signal(), TICK_INTERVAL);
    info!(run_for_ms, "bench running");

    while clock.now_ms() < run_for_ms {
        if dispatcher.poll_tick(&clock).is_none() {
            std::hint::spin_loop();
        }
    }

    driver.stop();

    // ── Summary ───────────────────────────────────────────────────────────────
    let stats = dispatcher.stats();
    info!(
        passes     = stats.passes,
        dispatched = stats.dispatched,
        "bench finished"
    );
    for idx in 0..dispatcher.task_count() {
        if let (Some(name), Some(runs)) = (dispatcher.task_name(idx), dispatcher.runs(idx)) {
            info!("  [{name}]  runs={runs}");
        }
    }
}
