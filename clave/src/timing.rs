/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Period arithmetic: checked LCM and the table hyperperiod.
//!
//! The hyperperiod of a task table is the least common multiple of all its
//! periods — the smallest window after which the due-pattern repeats.
//! Clave uses it for startup diagnostics and as the default bench run
//! horizon; it never gates scheduling.  Anything that keeps a meaningful
//! hyperperiod from existing (empty input, a zero period, `u64` overflow)
//! therefore reports `None` instead of an error.

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Checked least common multiple of two periods.
///
/// `None` when either input is zero — a zero period is rejected before it
/// can reach this module, and "repeats every 0 ms" is not a window — or
/// when the result would overflow `u64`.  Dividing by the GCD before the
/// multiply keeps intermediate values as small as possible; the multiply
/// itself is still checked.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return None;
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Hyperperiod of a sequence of periods.
///
/// `None` for an empty sequence (no table, no pattern), for any zero
/// period, and on overflow.
pub fn hyperperiod_ms(periods: impl IntoIterator<Item = u64>) -> Option<u64> {
    let mut acc: Option<u64> = None;
    for period in periods {
        acc = Some(match acc {
            None => period,
            Some(so_far) => lcm(so_far, period)?,
        });
    }
    acc
}

// ── Tests ─────────────────────────────────────────────────────────────────────
