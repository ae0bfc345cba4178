/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! The climate task: periodic temperature/humidity sampling with a
//! heartbeat LED.
//!
//! The heartbeat toggles only on a successful read, so a steady LED means
//! the sensor has stopped answering — visible at a glance on the bench.

use tracing::{info, warn};

use crate::board::{ClimateSensor, OutputPin};
use crate::task::TaskAction;

/// Climate sampler over a sensor and a heartbeat LED.
pub struct ClimateTask<S, L> {
    sensor: S,
    heartbeat: L,
}

impl<S, L> ClimateTask<S, L> {
    pub fn new(sensor: S, heartbeat: L) -> Self {
        Self { sensor, heartbeat }
    }
}

impl<S, L> TaskAction for ClimateTask<S, L>
where
    S: ClimateSensor + Send,
    L: OutputPin + Send,
{
    fn run(&mut self) {
        match self.sensor.sample() {
            Some(reading) => {
                info!(
                    temperature_c = reading.temperature_c,
                    humidity_pct = reading.humidity_pct,
                    "climate sample"
                );
                self.heartbeat.toggle();
            }
            None => warn!("climate sensor read failed"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
