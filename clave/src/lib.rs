/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Clave – a millisecond-tick, fixed-priority cooperative dispatcher.
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── task/        – task descriptors and the TaskAction body trait
//! ├── tick/        – tick signal, clocks, and the 1 ms tick driver
//! ├── dispatcher/  – the scheduling pass over the fixed task table
//! ├── timing/      – GCD / LCM / hyperperiod helpers
//! ├── config/      – YAML bench configuration
//! ├── board/       – peripheral traits + the simulated bench
//! └── roster/      – the stock range-watch / climate / blink tasks
//! ```

pub mod board;
pub mod config;
pub mod dispatcher;
pub mod roster;
pub mod task;
pub mod tick;
pub mod timing;
