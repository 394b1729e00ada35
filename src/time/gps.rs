//! GPS week counter and time of week.
//!
//! GPS dates are expressed in weeks since 1980-01-06T00:00:00 UTC,
//! plus seconds within that week. Legacy receivers only transmit 10 bits
//! of the week counter, which therefore rolls over every 1024 weeks
//! (first rollover: 1999-08-22, second rollover: 2019-04-07).
//! Other receivers transmit an extended, non wrapping, week counter.
//!
//! Leap seconds are not accounted for: GPS time is treated as UTC.
use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{GPS_EPOCH_UNIX_S, GPS_ROLLOVER_S, GPS_ROLLOVER_WEEKS, SECONDS_PER_WEEK},
    time::timestamp,
};

/// [Clock] provides the reference instant used to resolve
/// truncated (10-bit) week counters.
pub trait Clock {
    /// Current time, in Unix seconds
    fn now(&self) -> f64;
}

/// [SystemClock] reads the system wall clock.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock {}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        timestamp()
    }
}

/// Returns the most recent rollover instant at or before `reference` (Unix seconds).
/// Non finite or unrepresentable references anchor on the GPS epoch.
fn last_rollover(reference: f64) -> i64 {
    if !reference.is_finite() {
        warn!("invalid reference time {}: anchoring on GPS epoch", reference);
        return GPS_EPOCH_UNIX_S;
    }

    let elapsed = (reference.floor() as i64).saturating_sub(GPS_EPOCH_UNIX_S);

    elapsed
        .div_euclid(GPS_ROLLOVER_S)
        .checked_mul(GPS_ROLLOVER_S)
        .and_then(|dt| dt.checked_add(GPS_EPOCH_UNIX_S))
        .unwrap_or_else(|| {
            warn!("reference time {} out of range: anchoring on GPS epoch", reference);
            GPS_EPOCH_UNIX_S
        })
}

/// GPS week counter and time of week
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsTime {
    /// Week counter, either 10-bit truncated (< 1024) or extended.
    pub week: i32,
    /// Time of week in seconds, within [0, 604800[
    pub tow: f64,
}

impl GpsTime {
    /// Builds a new [GpsTime] from week counter and time of week (s)
    pub fn new(week: i32, tow: f64) -> Self {
        Self { week, tow }
    }

    /// Returns true if this week counter is (or may be) a truncated 10-bit counter.
    /// Week counters past 1023 are unambiguous.
    pub fn is_truncated(&self) -> bool {
        self.week < GPS_ROLLOVER_WEEKS
    }

    /// Copies and returns [GpsTime] with a 10-bit truncated week counter,
    /// as legacy receivers would transmit it.
    pub fn truncated(&self) -> Self {
        Self {
            week: self.week.rem_euclid(GPS_ROLLOVER_WEEKS),
            tow: self.tow,
        }
    }

    /// Seconds since the GPS epoch, assuming the week counter is complete.
    fn gps_seconds(&self) -> f64 {
        self.week as f64 * SECONDS_PER_WEEK as f64 + self.tow
    }

    /// Converts to Unix seconds. Truncated week counters are anchored on the
    /// most recent rollover at or before the system clock.
    ///
    /// This assumes the week counter did not roll over with respect
    /// to the system clock: if it did, the returned timestamp is one rollover
    /// period (1024 weeks) too early. Use [Self::to_unix_at] when a better
    /// reference than the system clock is available.
    pub fn to_unix(&self) -> f64 {
        self.to_unix_with(&SystemClock::default())
    }

    /// Converts to Unix seconds, reading the reference instant from
    /// [Clock], when the week counter is truncated.
    pub fn to_unix_with<C: Clock>(&self, clock: &C) -> f64 {
        if self.is_truncated() {
            self.to_unix_at(clock.now())
        } else {
            GPS_EPOCH_UNIX_S as f64 + self.gps_seconds()
        }
    }

    /// Converts to Unix seconds. Truncated week counters are anchored on the
    /// most recent rollover at or before `reference` (Unix seconds).
    /// Same limitation as [Self::to_unix].
    pub fn to_unix_at(&self, reference: f64) -> f64 {
        if !self.is_truncated() {
            return GPS_EPOCH_UNIX_S as f64 + self.gps_seconds();
        }

        let rollover = last_rollover(reference);

        debug!(
            "week {} anchored on rollover #{} (reference={})",
            self.week,
            (rollover - GPS_EPOCH_UNIX_S) / GPS_ROLLOVER_S,
            reference
        );

        rollover as f64 + self.gps_seconds()
    }

    /// Converts Unix seconds to a complete (non truncated) [GpsTime].
    /// The time of week keeps the sign of the elapsed time, prior the GPS epoch.
    pub fn from_unix(t: f64) -> Self {
        let elapsed = t - GPS_EPOCH_UNIX_S as f64;
        let week_s = SECONDS_PER_WEEK as f64;
        Self {
            week: (elapsed / week_s) as i32,
            tow: elapsed % week_s,
        }
    }
}
