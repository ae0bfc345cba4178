//! The stock task roster for the simulated bench.
//!
//! [`standard_roster`] wires the three bench tasks to the board's
//! peripherals in a fixed order — range-watch, climate, blink.  The order
//! is part of the scheduling contract: equal priorities resolve to the
//! earlier table entry, so this module is the one place that decides who
//! wins such a tie.  Configuration tunes the tasks; it never reorders
//! them.

pub mod blink;
pub mod climate;
pub mod range_watch;

pub use blink::BlinkTask;
pub use climate::ClimateTask;
pub use range_watch::RangeWatchTask;

use crate::board::sim::SimBoard;
use crate::config::BenchConfig;
use crate::task::Task;

/// Build the stock table from a configuration and a bench board.
pub fn standard_roster(config: &BenchConfig, board: SimBoard) -> Vec<Task> {
    let SimBoard {
        probe,
        range_led,
        climate,
        heartbeat_led,
        blink_led,
    } = board;

    vec![
        Task::new(
            "range-watch",
            config.range_watch.period_ms,
            config.range_watch.priority,
            RangeWatchTask::new(
                probe,
                range_led,
                config.range_watch.threshold_cm,
                config.range_watch.echo_timeout_us,
            ),
        )
        .enabled(config.range_watch.enabled),
        Task::new(
            "climate",
            config.climate.period_ms,
            config.climate.priority,
            ClimateTask::new(climate, heartbeat_led),
        )
        .enabled(config.climate.enabled),
        Task::new(
            "blink",
            config.blink.period_ms,
            config.blink.priority,
            BlinkTask::new(blink_led),
        )
        .enabled(config.blink.enabled),
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
