/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Simulated bench peripherals.
//!
//! Sensors replay a fixed pattern of readings, wrapping around forever, so
//! a bench run exercises every task branch — near and far targets, echo
//! timeouts, failed climate transfers — without any hardware attached.
//! Pins just remember their level and trace transitions.

use tracing::trace;

use super::{ClimateReading, ClimateSensor, DistanceProbe, OutputPin, US_ROUND_TRIP_PER_CM};

// ── Pins ──────────────────────────────────────────────────────────────────────

/// A labelled output line that remembers its commanded level.
#[derive(Debug)]
pub struct SimPin {
    label: &'static str,
    on: bool,
}

impl SimPin {
    pub fn new(label: &'static str) -> Self {
        Self { label, on: false }
    }
}

impl OutputPin for SimPin {
    fn set(&mut self, on: bool) {
        if self.on != on {
            trace!(pin = self.label, on, "pin transition");
        }
        self.on = on;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

// ── Distance probe ────────────────────────────────────────────────────────────

/// Replays a cyclic pattern of echo times.  `None` entries simulate a ping
/// with no echo at all; long entries are dropped by the timeout like a
/// real probe would drop them.
#[derive(Debug)]
pub struct SimDistanceProbe {
    pattern: Vec<Option<u32>>,
    cursor: usize,
}

impl SimDistanceProbe {
    pub fn from_pulses(pattern: Vec<Option<u32>>) -> Self {
        Self { pattern, cursor: 0 }
    }

    /// A target walking in from 90 cm to 4 cm and back out, with one
    /// missed echo per cycle.
    pub fn approach_and_retreat() -> Self {
        let distances_cm: [u32; 10] = [90, 60, 35, 18, 9, 4, 9, 18, 35, 60];
        let mut pattern: Vec<Option<u32>> = distances_cm
            .iter()
            .map(|cm| Some(cm * US_ROUND_TRIP_PER_CM))
            .collect();
        pattern.push(None);
        Self::from_pulses(pattern)
    }
}

impl DistanceProbe for SimDistanceProbe {
    fn measure_echo_us(&mut self, timeout_us: u32) -> Option<u32> {
        if self.pattern.is_empty() {
            return None;
        }
        let entry = self.pattern[self.cursor];
        self.cursor = (self.cursor + 1) % self.pattern.len();
        entry.filter(|&us| us <= timeout_us)
    }
}

// ── Climate sensor ────────────────────────────────────────────────────────────

/// Replays a cyclic pattern of climate readings, `None` standing in for a
/// failed transfer.
#[derive(Debug)]
pub struct SimClimateSensor {
    pattern: Vec<Option<ClimateReading>>,
    cursor: usize,
}

impl SimClimateSensor {
    pub fn from_readings(pattern: Vec<Option<ClimateReading>>) -> Self {
        Self { pattern, cursor: 0 }
    }

    /// A slowly warming room with one failed transfer per cycle.
    pub fn steady_room() -> Self {
        Self::from_readings(vec![
            Some(ClimateReading {
                temperature_c: 21.4,
                humidity_pct: 48.0,
            }),
            Some(ClimateReading {
                temperature_c: 21.6,
                humidity_pct: 47.5,
            }),
            Some(ClimateReading {
                temperature_c: 21.9,
                humidity_pct: 47.0,
            }),
            None,
            Some(ClimateReading {
                temperature_c: 22.1,
                humidity_pct: 46.5,
            }),
        ])
    }
}

impl ClimateSensor for SimClimateSensor {
    fn sample(&mut self) -> Option<ClimateReading> {
        if self.pattern.is_empty() {
            return None;
        }
        let entry = self.pattern[self.cursor];
        self.cursor = (self.cursor + 1) % self.pattern.len();
        entry
    }
}

// ── Bench ─────────────────────────────────────────────────────────────────────

/// The full simulated bench: every peripheral the stock roster wires up.
#[derive(Debug)]
pub struct SimBoard {
    pub probe: SimDistanceProbe,
    pub range_led: SimPin,
    pub climate: SimClimateSensor,
    pub heartbeat_led: SimPin,
    pub blink_led: SimPin,
}

impl SimBoard {
    pub fn new() -> Self {
        Self {
            probe: SimDistanceProbe::approach_and_retreat(),
            range_led: SimPin::new("range-led"),
            climate: SimClimateSensor::steady_room(),
            heartbeat_led: SimPin::new("heartbeat-led"),
            blink_led: SimPin::new("blink-led"),
        }
    }
}

impl Default for SimBoard {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
