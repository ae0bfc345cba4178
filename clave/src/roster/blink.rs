/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! The blink task: the lowest-priority liveness LED.
//!
//! If this LED keeps blinking, the dispatcher is alive and the table is
//! not saturated by higher-priority work.

use tracing::info;

use crate::board::OutputPin;
use crate::task::TaskAction;

/// Toggles an LED once per run and logs the new level.
pub struct BlinkTask<L> {
    led: L,
}

impl<L> BlinkTask<L> {
    pub fn new(led: L) -> Self {
        Self { led }
    }
}

impl<L> TaskAction for BlinkTask<L>
where
    L: OutputPin + Send,
{
    fn run(&mut self) {
        let led_on = self.led.toggle();
        info!(led_on, "blink");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
