/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! The range-watch task: ultrasonic proximity detection with an alarm LED.
//!
//! Each run fires one ping, converts the echo time to centimetres, and
//! drives the LED from the result.  A missed echo reads as zero distance,
//! and zero is deliberately on the "clear" side of the branch — no echo
//! means no detected object, not an object at the sensor face.

use tracing::info;

use crate::board::{DistanceProbe, OutputPin, US_ROUND_TRIP_PER_CM};
use crate::task::TaskAction;

/// Proximity watcher over a distance probe and an alarm LED.
///
/// An object strictly closer than `threshold_cm` (and at non-zero
/// distance) lights the LED; anything else clears it.
pub struct RangeWatchTask<P, L> {
    probe: P,
    led: L,
    threshold_cm: u32,
    echo_timeout_us: u32,
}

impl<P, L> RangeWatchTask<P, L> {
    pub fn new(probe: P, led: L, threshold_cm: u32, echo_timeout_us: u32) -> Self {
        Self {
            probe,
            led,
            threshold_cm,
            echo_timeout_us,
        }
    }
}

impl<P, L> TaskAction for RangeWatchTask<P, L>
where
    P: DistanceProbe + Send,
    L: OutputPin + Send,
{
    fn run(&mut self) {
        let distance_cm = self
            .probe
            .measure_echo_us(self.echo_timeout_us)
            .map(|us| us / US_ROUND_TRIP_PER_CM)
            .unwrap_or(0);

        if distance_cm > 0 && distance_cm < self.threshold_cm {
            self.led.set(true);
            info!(distance_cm, "object detected");
        } else {
            self.led.set(false);
            info!(distance_cm, "clear");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
