//! Fixed-priority, period-driven task dispatch.
//!
//! [`Dispatcher`] owns the static task table and the tick signal.  Each
//! scheduling pass takes one time snapshot, scans the table for due tasks,
//! and runs exactly one of them — the due task with the numerically
//! smallest priority — synchronously to completion.  The driving loop
//! ([`poll_tick`](Dispatcher::poll_tick)) converts each observed tick into
//! exactly one pass.
//!
//! # Scheduling guarantees
//!
//! | Property | Guarantee |
//! |---|---|
//! | Per pass | at most one task body runs, to completion |
//! | Selection | smallest priority value among due tasks; earlier table index on ties |
//! | Never-run tasks | immediately due, so the table starts up staggered by priority |
//! | `last_run_ms` | mutated only here, immediately before the body is invoked |
//! | Preemption | none — a running body is never interrupted |
//! | No-candidate pass | a silent no-op, not an error |
//! | Starvation | possible by design: a tight high-priority period can shut out lower priorities for as long as it keeps coming due |
//!
//! The tick context never touches the table.  It holds only an
//! `Arc<TickSignal>` obtained from [`signal`](Dispatcher::signal), so the
//! single-writer invariant on the table is enforced by ownership, not by
//! convention.
//!
//! # Example
//! ```rust,ignore
//! let mut dispatcher = Dispatcher::new(tasks)?;
//! let driver = TickDriver::start(dispatcher.signal(), TICK_INTERVAL);
//! let clock = MonotonicClock::new();
//! loop {
//!     if dispatcher.poll_tick(&clock).is_none() {
//!         std::hint::spin_loop();
//!     }
//! }
//! ```

pub mod error;

pub use error::TableError;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::task::Task;
use crate::tick::{Clock, TickSignal};
use crate::timing;

// ── Internal state types ──────────────────────────────────────────────────────

/// One table entry: the fixed descriptor plus the dispatcher's bookkeeping.
#[derive(Debug)]
struct TaskSlot {
    task: Task,

    /// Time of the most recent dispatch.  `None` until the first one — a
    /// task that has never run is immediately due, whatever its period.
    last_run_ms: Option<u64>,

    /// How many times this slot has been dispatched.
    runs: u64,
}

impl TaskSlot {
    /// Due-check against a single pass snapshot.  `saturating_sub` keeps a
    /// non-monotonic `now` (caller misuse) at "nothing due" instead of
    /// wrapping into "everything due".
    fn is_due(&self, now_ms: u64) -> bool {
        match self.last_run_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.task.period_ms,
        }
    }
}

/// Whole-run counters, exposed via [`Dispatcher::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Scheduling passes executed, including no-op passes.
    pub passes: u64,

    /// Passes that dispatched a task.  Always ≤ `passes`.
    pub dispatched: u64,
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

/// The Clave dispatcher.
///
/// Owns the task table for the process lifetime and is the sole mutator of
/// per-task run state.  Creates its own [`TickSignal`]; the tick source
/// registers by taking a handle from [`signal`](Self::signal).
#[derive(Debug)]
pub struct Dispatcher {
    slots: Vec<TaskSlot>,
    signal: Arc<TickSignal>,
    last_dispatched: Option<usize>,
    stats: DispatchStats,
}

impl Dispatcher {
    /// Build a dispatcher from a fixed, ordered task table.
    ///
    /// Table order matters: it is the documented tie-break for equal
    /// priorities, and indices returned by the pass refer to it.
    ///
    /// # Errors
    /// * [`TableError::Empty`] — no tasks.
    /// * [`TableError::ZeroPeriod`] — a task with `period_ms == 0`.
    ///
    /// Duplicate priorities are accepted but flagged with a warning; the
    /// earlier table entry wins every tie.  They are never renumbered.
    pub fn new(tasks: Vec<Task>) -> Result<Self, TableError> {
        if tasks.is_empty() {
            return Err(TableError::Empty);
        }
        for task in &tasks {
            if task.period_ms == 0 {
                return Err(TableError::ZeroPeriod {
                    task: task.name.clone(),
                });
            }
        }

        for (idx, task) in tasks.iter().enumerate() {
            if let Some(first) = tasks[..idx].iter().find(|t| t.priority == task.priority) {
                warn!(
                    priority = task.priority,
                    first = %first.name,
                    second = %task.name,
                    "duplicate priority — the earlier table entry wins ties"
                );
            }
        }

        for task in &tasks {
            debug!(
                task = %task.name,
                period_ms = task.period_ms,
                priority = task.priority,
                enabled = task.enabled,
                "task registered"
            );
        }

        let slots = tasks
            .into_iter()
            .map(|task| TaskSlot {
                task,
                last_run_ms: None,
                runs: 0,
            })
            .collect();

        Ok(Self {
            slots,
            signal: Arc::new(TickSignal::new()),
            last_dispatched: None,
            stats: DispatchStats::default(),
        })
    }

    /// Shared handle to the scheduling signal, for wiring up a tick source.
    ///
    /// This is all the tick context ever gets — it cannot reach the table.
    pub fn signal(&self) -> Arc<TickSignal> {
        Arc::clone(&self.signal)
    }

    // ── Scheduling pass ───────────────────────────────────────────────────────

    /// Run one scheduling pass at time `now_ms`.
    ///
    /// `now_ms` is read once by the caller and used for every due-check in
    /// the pass, so the candidate set is consistent even while the clock
    /// keeps moving underneath.
    ///
    /// Selects the due task with the smallest priority value (earlier table
    /// index on ties), stamps its `last_run_ms`, and runs its body to
    /// completion.  Returns the dispatched task's table index, or `None`
    /// for a no-op pass.
    pub fn run_scheduling_pass(&mut self, now_ms: u64) -> Option<usize> {
        self.stats.passes += 1;

        // Strict `<` on priority keeps the earliest index on ties.
        let mut best: Option<(usize, u8)> = None;
        for (idx, slot) in self.slots.iter().enumerate() {
            if !slot.task.enabled || !slot.is_due(now_ms) {
                continue;
            }
            match best {
                Some((_, priority)) if slot.task.priority >= priority => {}
                _ => best = Some((idx, slot.task.priority)),
            }
        }

        let (idx, _) = best?;

        self.last_dispatched = Some(idx);
        self.stats.dispatched += 1;

        let slot = &mut self.slots[idx];
        slot.last_run_ms = Some(now_ms);
        slot.runs += 1;
        info!(now_ms, task = %slot.task.name, "running task");
        slot.task.action.run();

        Some(idx)
    }

    /// Drive one iteration of the main loop: if a tick is pending, clear it
    /// and run exactly one scheduling pass at the clock's current time.
    ///
    /// Check-and-clear is a single atomic swap on the signal, so a tick
    /// raised while a pass runs is kept for the next poll — at most one
    /// tick of delay, never accumulated loss.  Returns `None` both when no
    /// tick was pending and when the pass itself was a no-op.
    pub fn poll_tick(&mut self, clock: &dyn Clock) -> Option<usize> {
        if !self.signal.take() {
            return None;
        }
        self.run_scheduling_pass(clock.now_ms())
    }

    // ── Introspection ─────────────────────────────────────────────────────────

    /// Number of tasks in the table.
    pub fn task_count(&self) -> usize {
        self.slots.len()
    }

    /// Diagnostic name of the task at `idx`.
    pub fn task_name(&self, idx: usize) -> Option<&str> {
        self.slots.get(idx).map(|s| s.task.name.as_str())
    }

    /// How many times the task at `idx` has been dispatched.
    pub fn runs(&self, idx: usize) -> Option<u64> {
        self.slots.get(idx).map(|s| s.runs)
    }

    /// Most recent dispatch time for `idx`.  `None` if the index is out of
    /// range **or** the task has never run.
    pub fn last_run_ms(&self, idx: usize) -> Option<u64> {
        self.slots.get(idx).and_then(|s| s.last_run_ms)
    }

    /// Table index of the most recently dispatched task, across all passes.
    pub fn last_dispatched(&self) -> Option<usize> {
        self.last_dispatched
    }

    /// Whole-run pass and dispatch counters.
    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// LCM of all table periods — the window after which the due-pattern
    /// repeats.  The table is validated non-empty with nonzero periods, so
    /// `None` here means the LCM overflowed `u64`.
    pub fn hyperperiod_ms(&self) -> Option<u64> {
        timing::hyperperiod_ms(self.slots.iter().map(|s| s.task.period_ms))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
