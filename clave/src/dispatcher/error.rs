/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error type for task-table validation.
//!
//! [`TableError`] covers the only failures this system models: a table the
//! dispatcher refuses at construction.  Scheduling itself has no error
//! conditions — a pass with no candidate is a normal, silent outcome — so
//! there is deliberately no "runtime" variant here.
//!
//! | Variant | When | Binary behavior |
//! |---|---|---|
//! | `Empty` | zero tasks handed to `Dispatcher::new` | log + exit nonzero |
//! | `ZeroPeriod` | a task with `period_ms == 0` | log + exit nonzero |
//!
//! Duplicate priorities are a *warning*, not an error — the lowest-index
//! tie-break rule keeps selection deterministic, and the table is accepted.
//!
//! **Do not** replace this with `anyhow::Error` — callers match on the
//! variants in tests, and the structured task name is part of the message
//! contract.

use thiserror::Error;

/// Why `Dispatcher::new` rejected a task table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The table was empty.  A dispatcher with nothing to dispatch would
    /// poll forever doing nothing; refusing it surfaces the wiring bug at
    /// startup.
    #[error("no tasks provided — the task table is empty")]
    Empty,

    /// A task was configured with a zero period.  The elapsed-time check
    /// would mark it due on every pass, monopolising the dispatcher.
    #[error("task '{task}' has period 0 ms — periods must be at least one tick")]
    ZeroPeriod { task: String },
}
