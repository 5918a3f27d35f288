// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_returns_increasing_time() {
    let clock = SystemClock;
    let t1 = clock.now();
    std::thread::sleep(std::time::Duration::from_millis(1));
    let t2 = clock.now();
    assert!(t2 > t1);
}

#[test]
fn fake_clock_starts_at_fixed_instant() {
    let clock = FakeClock::new();
    assert_eq!(clock.now().to_rfc3339(), "2026-03-01T00:00:00+00:00");
}

#[test]
fn fake_clock_can_be_advanced() {
    let clock = FakeClock::new();
    let t1 = clock.now();
    clock.advance(TimeDelta::seconds(60));
    let t2 = clock.now();
    assert_eq!(t2 - t1, TimeDelta::seconds(60));
}

#[test]
fn fake_clock_is_cloneable_and_shared() {
    let clock1 = FakeClock::new();
    let clock2 = clock1.clone();
    let t1 = clock1.now();
    clock2.advance(TimeDelta::seconds(30));
    assert_eq!(clock1.now() - t1, TimeDelta::seconds(30));
}

#[test]
fn stamp_after_uses_clock_when_it_moved_forward() {
    let clock = FakeClock::new();
    let previous = clock.now() - TimeDelta::hours(1);
    assert_eq!(stamp_after(&clock, previous), clock.now());
}

#[test]
fn stamp_after_bumps_when_clock_is_frozen() {
    let clock = FakeClock::new();
    let previous = clock.now();
    let next = stamp_after(&clock, previous);
    assert_eq!(next - previous, TimeDelta::microseconds(1));

    let after = stamp_after(&clock, next);
    assert!(after > next);
}

#[test]
fn stamp_after_bumps_when_clock_went_backwards() {
    let clock = FakeClock::new();
    let previous = clock.now() + TimeDelta::days(2);
    assert!(stamp_after(&clock, previous) > previous);
}

#[test]
fn stamp_after_truncates_to_microseconds() {
    let clock = FakeClock::at(
        DateTime::from_timestamp(FAKE_CLOCK_START_SECS, 123_456_789).unwrap(),
    );
    let stamped = stamp_after(&clock, DateTime::<Utc>::default());
    assert_eq!(stamped.timestamp_subsec_nanos(), 123_456_000);
}
