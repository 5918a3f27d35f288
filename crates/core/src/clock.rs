// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use std::sync::{Arc, Mutex};

/// Seconds since the Unix epoch for 2026-03-01T00:00:00Z, the default fake time.
const FAKE_CLOCK_START_SECS: i64 = 1_772_323_200;

/// A clock that provides the current wall-clock time
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Real system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone, Debug)]
pub struct FakeClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::at(DateTime::from_timestamp(FAKE_CLOCK_START_SECS, 0).unwrap_or_default())
    }

    /// Create a fake clock frozen at the given instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            current: Arc::new(Mutex::new(instant)),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: TimeDelta) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += duration;
    }

    /// Set the clock to a specific instant
    pub fn set(&self, instant: DateTime<Utc>) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = instant;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Timestamp for a write to a record last touched at `previous`.
///
/// Stored timestamps have microsecond precision. The result is always
/// strictly after `previous`, even when the clock has not moved or has
/// gone backwards.
pub fn stamp_after(clock: &impl Clock, previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = clock.now().trunc_subsecs(6);
    if now > previous {
        now
    } else {
        previous + TimeDelta::microseconds(1)
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
