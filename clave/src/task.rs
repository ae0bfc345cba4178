/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core task data structures for the Clave dispatcher.
//!
//! ```text
//! BenchConfig ──(tuning)──►  Task  ──(moved into)──►  Dispatcher ──► TaskAction::run()
//!                             ↑ fixed descriptor           ↑ sole owner after init
//! ```
//!
//! # Ownership model
//! A [`Task`] carries its full fixed configuration plus the boxed action
//! body.  The caller moves `Vec<Task>` into `Dispatcher::new()`; from that
//! point on the table belongs to the dispatcher and nothing outside it can
//! touch a descriptor.  Period and priority have no setters at all — the
//! table is immutable after construction except for the run bookkeeping the
//! dispatcher itself maintains.

use std::fmt;

// ── TaskAction ────────────────────────────────────────────────────────────────

/// A zero-argument unit of work: the body of one schedulable task.
///
/// The dispatcher only ever calls [`run`](Self::run) — it neither knows nor
/// cares what the body does, how long ago it ran, or whether its peripheral
/// I/O succeeded.  Bodies must be well behaved: bounded execution time and
/// no re-entry into the scheduler.
///
/// Implemented by the stock roster structs (`RangeWatchTask`, `ClimateTask`,
/// `BlinkTask`) and, via the blanket impl below, by any `FnMut()` closure —
/// which is what the dispatcher tests use.
pub trait TaskAction: Send {
    /// Execute the task body to completion.
    fn run(&mut self);
}

/// Every `FnMut()` closure is a valid task body.
impl<F: FnMut() + Send> TaskAction for F {
    fn run(&mut self) {
        self()
    }
}

// ── Task ──────────────────────────────────────────────────────────────────────

/// One schedulable unit of work: the (name, period, priority, enabled,
/// action) tuple handed to the dispatcher at initialisation.
///
/// * `period_ms` must be > 0 — the dispatcher rejects the table otherwise.
/// * `priority` is a rank, **lower value = higher priority**.  Priorities
///   should be unique; when they are not, the task earlier in the table wins
///   every tie (documented rule, flagged at init).
/// * `enabled` is a static gate fixed at construction.  A disabled task
///   stays in the table but is never selected — it is not a runtime
///   suspend/resume switch.
pub struct Task {
    pub(crate) name: String,
    pub(crate) period_ms: u64,
    pub(crate) priority: u8,
    pub(crate) enabled: bool,
    pub(crate) action: Box<dyn TaskAction>,
}

impl Task {
    /// Create an enabled task from its fixed configuration and body.
    pub fn new(
        name: impl Into<String>,
        period_ms: u64,
        priority: u8,
        action: impl TaskAction + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            period_ms,
            priority,
            enabled: true,
            action: Box::new(action),
        }
    }

    /// Set the enabled gate (consuming, for construction chains).
    ///
    /// The gate cannot be changed after the task enters the dispatcher.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Diagnostic label.  No functional effect on scheduling.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scheduling period in milliseconds.
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Priority rank — lower value wins selection.
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Whether the task participates in selection at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("period_ms", &self.period_ms)
            .field("priority", &self.priority)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn new_task_is_enabled_by_default() {
        let t = Task::new("blink", 1_000, 2, || {});
        assert!(t.is_enabled());
        assert_eq!(t.name(), "blink");
        assert_eq!(t.period_ms(), 1_000);
        assert_eq!(t.priority(), 2);
    }

    #[test]
    fn enabled_modifier_sets_the_gate() {
        let t = Task::new("parked", 500, 7, || {}).enabled(false);
        assert!(!t.is_enabled());
    }

    #[test]
    fn closures_are_valid_task_bodies() {
        let count = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&count);
        let mut t = Task::new("counter", 100, 0, move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        t.action.run();
        t.action.run();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn struct_bodies_are_valid_task_bodies() {
        struct Pulse {
            count: Arc<AtomicU32>,
        }
        impl TaskAction for Pulse {
            fn run(&mut self) {
                self.count.fetch_add(1, Ordering::SeqCst);
            }
        }

        let count = Arc::new(AtomicU32::new(0));
        let mut t = Task::new(
            "pulse",
            200,
            1,
            Pulse {
                count: Arc::clone(&count),
            },
        );
        t.action.run();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn debug_output_omits_the_action() {
        let t = Task::new("quiet", 100, 3, || {});
        let dbg = format!("{t:?}");
        assert!(dbg.contains("quiet"));
        assert!(dbg.contains("period_ms"));
    }
}
