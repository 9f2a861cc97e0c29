//! Service-day clock model.
//!
//! # Design
//!
//! Time is represented as whole minutes since midnight of the service day
//! the run starts on:
//!
//!   instant = hour * 60 + minute            (day 0)
//!   instant = 1440 + hour * 60 + minute     (after midnight, day 1)
//!
//! Using an integer minute as the canonical unit means all schedule
//! arithmetic is exact and a window that rolls past midnight compares
//! correctly once its end has been advanced by one day (see
//! [`ClockTime::roll_past`]).  There is no timezone handling; every instant
//! is wall-clock-naive.
//!
//! `HH:MM` formatting wraps modulo 24 hours, so `1450` renders as `00:10`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CrewError;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// An absolute instant on the service day, in minutes since its midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(pub u32);

impl ClockTime {
    /// Parse an `HH:MM` string onto day 0 of the service day.
    ///
    /// Hours must be `0..24` and minutes `0..60`; a single-digit hour
    /// (`"6:05"`) is accepted.
    pub fn parse(s: &str) -> Result<ClockTime, CrewError> {
        let bad = || CrewError::ClockTime(s.to_owned());
        let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(bad());
        }
        let hours: u32 = h.parse().map_err(|_| bad())?;
        let minutes: u32 = m.parse().map_err(|_| bad())?;
        if hours >= 24 || minutes >= MINUTES_PER_HOUR {
            return Err(bad());
        }
        Ok(ClockTime(hours * MINUTES_PER_HOUR + minutes))
    }

    /// The instant at the top of absolute hour `hour` (may exceed 23).
    #[inline]
    pub fn from_hour(hour: u32) -> ClockTime {
        ClockTime(hour * MINUTES_PER_HOUR)
    }

    /// Return the instant `n` minutes after `self`.
    #[inline]
    pub fn add_minutes(self, n: u32) -> ClockTime {
        ClockTime(self.0 + n)
    }

    /// Minutes elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn minutes_since(self, earlier: ClockTime) -> u32 {
        self.0.saturating_sub(earlier.0)
    }

    /// Absolute hour since the service-day midnight (24 = 00:xx next day).
    #[inline]
    pub fn hour(self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    /// Wall-clock hour in `0..24`.
    #[inline]
    pub fn hour_of_day(self) -> u32 {
        self.hour() % 24
    }

    /// Wall-clock minute in `0..60`.
    #[inline]
    pub fn minute(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Advance `self` by whole days until it is no earlier than `start`.
    ///
    /// This is how a window end like `01:00` becomes "01:00 tomorrow" when
    /// the window starts at `06:00`.
    pub fn roll_past(self, start: ClockTime) -> ClockTime {
        if self >= start {
            return self;
        }
        let days = (start.0 - self.0).div_ceil(MINUTES_PER_DAY);
        ClockTime(self.0 + days * MINUTES_PER_DAY)
    }

    /// `HH:MM` rendering, wrapped to the wall clock.
    pub fn format(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour_of_day(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = CrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClockTime::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = CrewError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ClockTime::parse(&s)
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> String {
        t.to_string()
    }
}

// ── Interval ──────────────────────────────────────────────────────────────────

/// A half-open `[start, end)` span of service-day time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Interval {
    pub start: ClockTime,
    pub end:   ClockTime,
}

impl Interval {
    #[inline]
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        debug_assert!(start <= end, "interval start must not exceed end");
        Self { start, end }
    }

    /// Length of the interval in minutes.
    #[inline]
    pub fn minutes(self) -> u32 {
        self.end.minutes_since(self.start)
    }

    /// `true` if the two half-open intervals share at least one minute.
    #[inline]
    pub fn overlaps(self, other: Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
