/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Time base: the 1 ms tick, the scheduling-due signal, and the clocks.
//!
//! The tick context and the dispatcher loop share exactly one value — the
//! one-bit [`TickSignal`].  The tick side only ever raises it; the
//! dispatcher side only ever takes it.  Nothing else crosses that boundary,
//! which is the system's core race-avoidance invariant: the task table is
//! reachable from the main context alone.
//!
//! ```text
//! TickDriver (thread) ──raise()──►  TickSignal  ◄──take()── Dispatcher::poll_tick
//! ```
//!
//! On a bare board the raise would live in a timer interrupt handler; on the
//! host it lives in [`TickDriver`], a thread that steps absolute 1 ms
//! deadlines.  Either way the contract is the same: one raise per elapsed
//! millisecond, nothing else done in that context, cumulative drift bounded
//! by the clock source.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

/// The fixed scheduling quantum.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1);

// ── TickSignal ────────────────────────────────────────────────────────────────

/// One-bit "scheduling due" flag between the tick context and the main loop.
///
/// Single-writer / single-reader discipline: the tick source calls
/// [`raise`](Self::raise), the dispatcher loop calls [`take`](Self::take).
/// `take` is an atomic swap, so observe-and-clear is one step — a tick
/// landing while a pass is being dispatched is kept for the next poll, and a
/// tick landing mid-pass costs at most one tick of delay (the next tick
/// re-raises).  Raises between two polls coalesce; the signal is
/// level-triggered, not a counter.
#[derive(Debug)]
pub struct TickSignal {
    raised: AtomicBool,
}

impl TickSignal {
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Mark a tick as due.  The only operation the tick context performs.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Atomically observe and clear the flag.  Returns `true` if a tick was
    /// pending.
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::Acquire)
    }

    /// Peek without clearing.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}

impl Default for TickSignal {
    fn default() -> Self {
        Self::new()
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Monotonic millisecond counter readable by the dispatcher loop and task
/// bodies.
pub trait Clock {
    /// Milliseconds since system start.  Must never decrease.
    fn now_ms(&self) -> u64;
}

/// Wall-clock-independent host clock, counting from its construction.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Manually-driven clock for deterministic tests and lockstep bench runs.
///
/// Callers are responsible for keeping it monotonic; the dispatcher treats a
/// backwards jump as "nothing due" rather than panicking.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            now_ms: AtomicU64::new(now_ms),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, now_ms: u64) {
        self.now_ms.store(now_ms, Ordering::Relaxed);
    }

    /// Step forward by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.now_ms.fetch_add(delta_ms, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::Relaxed)
    }
}

// ── TickDriver ────────────────────────────────────────────────────────────────

/// Host stand-in for the hardware timer: a thread raising the signal once
/// per interval.
///
/// Deadlines are stepped absolutely (`next += interval`) and never realigned
/// after an oversleep, so cumulative drift stays bounded by the host clock —
/// a late wake produces a quick burst of raises that coalesces in the
/// level-triggered signal rather than ticks silently going missing.
///
/// The thread holds nothing but its `Arc<TickSignal>` and the stop flag; it
/// cannot reach the task table at all.  Dropping the driver stops and joins
/// the thread.
#[derive(Debug)]
pub struct TickDriver {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TickDriver {
    /// Spawn the tick thread.  `signal` is the dispatcher's signal handle;
    /// `interval` is normally [`TICK_INTERVAL`].
    pub fn start(signal: Arc<TickSignal>, interval: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        debug!(interval_us = interval.as_micros() as u64, "tick driver starting");

        let handle = thread::spawn(move || {
            let mut next = Instant::now() + interval;
            while !stop_flag.load(Ordering::Relaxed) {
                let now = Instant::now();
                if next > now {
                    thread::sleep(next - now);
                }
                signal.raise();
                next += interval;
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the tick thread and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            debug!("tick driver stopped");
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── TickSignal ────────────────────────────────────────────────────────────

    #[test]
    fn signal_starts_lowered() {
        let s = TickSignal::new();
        assert!(!s.is_raised());
        assert!(!s.take());
    }

    #[test]
    fn take_observes_then_clears() {
        let s = TickSignal::new();
        s.raise();
        assert!(s.is_raised());
        assert!(s.take(), "first take observes the raise");
        assert!(!s.take(), "second take finds the flag cleared");
    }

    #[test]
    fn raises_between_polls_coalesce() {
        let s = TickSignal::new();
        s.raise();
        s.raise();
        s.raise();
        assert!(s.take(), "one pending tick however many raises arrived");
        assert!(!s.take());
    }

    #[test]
    fn peek_does_not_clear() {
        let s = TickSignal::new();
        s.raise();
        assert!(s.is_raised());
        assert!(s.is_raised(), "peeking must not consume the flag");
        assert!(s.take());
    }

    // ── Clocks ────────────────────────────────────────────────────────────────

    #[test]
    fn monotonic_clock_never_decreases() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn manual_clock_set_and_advance() {
        let clock = ManualClock::new();
        assert_eq!(clock.now_ms(), 0);
        clock.set(1_000);
        assert_eq!(clock.now_ms(), 1_000);
        clock.advance(5);
        assert_eq!(clock.now_ms(), 1_005);
    }

    #[test]
    fn manual_clock_starting_at() {
        let clock = ManualClock::starting_at(42);
        assert_eq!(clock.now_ms(), 42);
    }

    // ── TickDriver ────────────────────────────────────────────────────────────

    #[test]
    fn driver_raises_and_re_raises() {
        let signal = Arc::new(TickSignal::new());
        let driver = TickDriver::start(Arc::clone(&signal), Duration::from_millis(1));

        let mut observed = 0;
        let deadline = Instant::now() + Duration::from_millis(500);
        while observed < 2 && Instant::now() < deadline {
            if signal.take() {
                observed += 1;
            } else {
                thread::yield_now();
            }
        }
        driver.stop();

        assert!(
            observed >= 2,
            "expected at least two ticks within 500 ms, saw {observed}"
        );
    }

    #[test]
    fn no_raises_after_stop() {
        let signal = Arc::new(TickSignal::new());
        let driver = TickDriver::start(Arc::clone(&signal), Duration::from_millis(1));
        thread::sleep(Duration::from_millis(20));
        driver.stop();

        // stop() joins the thread, so once the residue is drained nothing
        // can raise again.
        signal.take();
        thread::sleep(Duration::from_millis(10));
        assert!(!signal.is_raised());
    }

    #[test]
    fn dropping_the_driver_joins_the_thread() {
        let signal = Arc::new(TickSignal::new());
        {
            let _driver = TickDriver::start(Arc::clone(&signal), Duration::from_millis(1));
            thread::sleep(Duration::from_millis(5));
        }
        // Same guarantee as stop(): the scope end joined the thread.
        signal.take();
        thread::sleep(Duration::from_millis(10));
        assert!(!signal.is_raised());
    }
}
