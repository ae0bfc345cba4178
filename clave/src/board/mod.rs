/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Board abstraction: the peripheral traits the roster tasks are written
//! against.
//!
//! Task bodies never touch hardware directly — they hold trait objects or
//! generic peripherals, so the same task logic drives the simulated bench
//! in [`sim`] today and a real GPIO/sensor backend later.  Readings that
//! can fail at the physical layer (no echo, checksum failure on the
//! sensor bus) come back as `None` rather than an error type: a missed
//! sample is an expected, recoverable part of every duty cycle.

pub mod sim;

/// One temperature/humidity sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateReading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

/// A single digital output line (LED, relay, …).
pub trait OutputPin {
    /// Drive the line high (`true`) or low (`false`).
    fn set(&mut self, on: bool);

    /// Current commanded level.
    fn is_on(&self) -> bool;

    /// Invert the line and return the new level.
    fn toggle(&mut self) -> bool {
        let next = !self.is_on();
        self.set(next);
        next
    }
}

/// Round-trip echo time per centimetre of target distance.
///
/// Sound covers one centimetre in roughly 29 µs, and the echo travels the
/// distance twice.
pub const US_ROUND_TRIP_PER_CM: u32 = 58;

/// An ultrasonic (or similar time-of-flight) distance probe.
pub trait DistanceProbe {
    /// Fire one ping and wait up to `timeout_us` for the echo.
    ///
    /// Returns the round-trip echo time in microseconds, or `None` when no
    /// echo arrived inside the timeout.
    fn measure_echo_us(&mut self, timeout_us: u32) -> Option<u32>;
}

/// A combined temperature/humidity sensor.
pub trait ClimateSensor {
    /// Take one reading.  `None` means the transfer failed (bus glitch,
    /// bad checksum) and the caller should simply try again next period.
    fn sample(&mut self) -> Option<ClimateReading>;
}
