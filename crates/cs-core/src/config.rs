//! Run configuration.
//!
//! Typically loaded from a JSON file by the application crate and passed to
//! the planner.  Every field has a default matching the reference
//! deployment, so a partial file (or none at all) is valid input:
//!
//! ```json
//! {
//!   "window": {
//!     "start": "06:00",
//!     "end": "01:00",
//!     "peak_bands": [
//!       { "start_hour": 8,  "end_hour": 10, "peak_frequency_minutes": 30 },
//!       { "start_hour": 17, "end_hour": 20, "peak_frequency_minutes": 30 }
//!     ]
//!   },
//!   "shifts": {
//!     "morning": { "start_hour": 6,  "end_hour": 14 },
//!     "evening": { "start_hour": 14, "end_hour": 25 }
//!   },
//!   "required_work_minutes": 420,
//!   "max_attempts": 3,
//!   "seed": 42
//! }
//! ```
//!
//! [`RunConfig::validate`] must pass before any scheduling work begins.

use serde::{Deserialize, Serialize};

use crate::model::ShiftKind;
use crate::time::{ClockTime, Interval};
use crate::{CrewError, CrewResult};

/// Upper bound for shift hours: a shift may end at most one day past the
/// service-day midnight.
const MAX_SHIFT_HOUR: u32 = 48;

/// Most attempts the assignment engine can make (one per strategy).
pub const MAX_ATTEMPTS: u8 = 3;

// ── PeakBand ──────────────────────────────────────────────────────────────────

/// A wall-clock hour range `[start_hour, end_hour)` with its own tick length.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakBand {
    pub start_hour:             u32,
    pub end_hour:               u32,
    /// Target headway inside the band.  The generator ticks at half of this.
    pub peak_frequency_minutes: u32,
}

impl PeakBand {
    pub fn new(start_hour: u32, end_hour: u32, peak_frequency_minutes: u32) -> Self {
        Self { start_hour, end_hour, peak_frequency_minutes }
    }

    /// `true` if the wall-clock `hour` (0..24) falls inside the band.
    #[inline]
    pub fn contains_hour(&self, hour: u32) -> bool {
        self.start_hour <= hour && hour < self.end_hour
    }

    /// Generator step while this band governs the cursor.
    #[inline]
    pub fn tick_minutes(&self) -> u32 {
        self.peak_frequency_minutes / 2
    }
}

// ── ScheduleWindow ────────────────────────────────────────────────────────────

/// The service window the timetable covers, plus its peak bands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleWindow {
    pub start:      ClockTime,
    /// May be earlier than `start`, meaning "on the next day".
    pub end:        ClockTime,
    /// Declaration order matters: the first band matching an hour wins.
    pub peak_bands: Vec<PeakBand>,
}

impl ScheduleWindow {
    /// A window without peak bands.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end, peak_bands: Vec::new() }
    }

    /// Build a window from two `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> CrewResult<Self> {
        Ok(Self::new(ClockTime::parse(start)?, ClockTime::parse(end)?))
    }

    /// Append a peak band (builder style).
    pub fn with_peak_band(mut self, band: PeakBand) -> Self {
        self.peak_bands.push(band);
        self
    }

    /// The end instant, advanced to the next day when `end < start`.
    #[inline]
    pub fn end_instant(&self) -> ClockTime {
        self.end.roll_past(self.start)
    }

    /// The window as an absolute half-open interval.
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end_instant())
    }

    /// The first peak band containing `t`'s wall-clock hour, if any.
    pub fn peak_band_at(&self, t: ClockTime) -> Option<&PeakBand> {
        let hour = t.hour_of_day();
        self.peak_bands.iter().find(|b| b.contains_hour(hour))
    }

    pub fn validate(&self) -> CrewResult<()> {
        if self.start == self.end {
            return Err(CrewError::Config(format!(
                "schedule window {} - {} is empty",
                self.start, self.end
            )));
        }
        for (i, band) in self.peak_bands.iter().enumerate() {
            if band.start_hour >= band.end_hour || band.end_hour > 24 {
                return Err(CrewError::Config(format!(
                    "peak band #{i} has invalid hour range {}..{}",
                    band.start_hour, band.end_hour
                )));
            }
            if band.tick_minutes() == 0 {
                return Err(CrewError::Config(format!(
                    "peak band #{i} frequency must be at least 2 minutes, got {}",
                    band.peak_frequency_minutes
                )));
            }
        }
        Ok(())
    }
}

impl Default for ScheduleWindow {
    fn default() -> Self {
        Self {
            start:      ClockTime::from_hour(6),
            end:        ClockTime::from_hour(1),
            peak_bands: vec![PeakBand::new(8, 10, 30), PeakBand::new(17, 20, 30)],
        }
    }
}

// ── Shifts ────────────────────────────────────────────────────────────────────

/// Half-open absolute hour range `[start_hour, end_hour)`.
///
/// `end_hour` may exceed 24: `14..25` is 2 PM to 1 AM.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start_hour: u32,
    pub end_hour:   u32,
}

impl HourRange {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self { start_hour, end_hour }
    }

    /// `true` if the absolute `hour` lies in the range.
    #[inline]
    pub fn contains_hour(&self, hour: u32) -> bool {
        self.start_hour <= hour && hour < self.end_hour
    }

    #[inline]
    pub fn start_instant(&self) -> ClockTime {
        ClockTime::from_hour(self.start_hour)
    }

    #[inline]
    pub fn end_instant(&self) -> ClockTime {
        ClockTime::from_hour(self.end_hour)
    }
}

/// Hour ranges of the two modelled shifts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftConfig {
    pub morning: HourRange,
    pub evening: HourRange,
}

impl ShiftConfig {
    /// Bucket a departure instant: morning if its absolute hour falls in the
    /// morning range, evening otherwise.
    #[inline]
    pub fn kind_for(&self, t: ClockTime) -> ShiftKind {
        if self.morning.contains_hour(t.hour()) {
            ShiftKind::Morning
        } else {
            ShiftKind::Evening
        }
    }

    #[inline]
    pub fn range(&self, kind: ShiftKind) -> HourRange {
        match kind {
            ShiftKind::Morning => self.morning,
            ShiftKind::Evening => self.evening,
        }
    }

    pub fn validate(&self) -> CrewResult<()> {
        for kind in ShiftKind::ALL {
            let r = self.range(kind);
            if r.start_hour >= r.end_hour || r.end_hour > MAX_SHIFT_HOUR {
                return Err(CrewError::Config(format!(
                    "{kind} shift has invalid hour range {}..{}",
                    r.start_hour, r.end_hour
                )));
            }
        }
        Ok(())
    }
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            morning: HourRange::new(6, 14),
            evening: HourRange::new(14, 25),
        }
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for one planning run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub window: ScheduleWindow,

    pub shifts: ShiftConfig,

    /// Per-employee work-time target used for headcount sizing.  Default: 420.
    pub required_work_minutes: u32,

    /// Assignment attempts, one strategy each.  Clamped to `1..=3`.
    pub max_attempts: u8,

    /// Seed for the tie-breaking jitter.  The same seed always produces
    /// identical assignments.
    pub seed: u64,
}

impl RunConfig {
    /// Fail fast on anything that would make scheduling meaningless.
    pub fn validate(&self) -> CrewResult<()> {
        self.window.validate()?;
        self.shifts.validate()?;
        if self.required_work_minutes == 0 {
            return Err(CrewError::Config(
                "required_work_minutes must be positive".into(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(CrewError::Config("max_attempts must be at least 1".into()));
        }
        Ok(())
    }

    /// `max_attempts` clamped to the number of available strategies.
    #[inline]
    pub fn attempts(&self) -> u8 {
        self.max_attempts.clamp(1, MAX_ATTEMPTS)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            window:                ScheduleWindow::default(),
            shifts:                ShiftConfig::default(),
            required_work_minutes: 420,
            max_attempts:          MAX_ATTEMPTS,
            seed:                  42,
        }
    }
}
