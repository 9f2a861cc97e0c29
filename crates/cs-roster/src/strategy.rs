//! Departure orderings and cost weights, one pair per attempt.

use std::cmp::Ordering;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use cs_core::RouteId;
use cs_timetable::Departure;

/// Weights of the two deterministic cost terms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CostWeights {
    pub work_time: f64,
    pub variety:   f64,
}

/// How departures are ordered before the first pass, and how the cost
/// function trades workload against route repetition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Ascending departure time.
    TimeOrder,
    /// Descending route priority, then ascending time.
    PriorityFirst,
    /// Routes with fewer total departures first, then ascending time.
    RareRoutesFirst,
}

impl Strategy {
    /// Attempt order of the retry loop.
    pub const ALL: [Strategy; 3] =
        [Strategy::TimeOrder, Strategy::PriorityFirst, Strategy::RareRoutesFirst];

    pub fn weights(self) -> CostWeights {
        match self {
            Strategy::TimeOrder       => CostWeights { work_time: 1.0, variety: 2.0 },
            Strategy::PriorityFirst   => CostWeights { work_time: 0.5, variety: 1.0 },
            Strategy::RareRoutesFirst => CostWeights { work_time: 2.0, variety: 0.5 },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::TimeOrder       => "time_order",
            Strategy::PriorityFirst   => "priority_first",
            Strategy::RareRoutesFirst => "rare_routes_first",
        }
    }

    /// Sort `departures` in place (stable).
    ///
    /// `route_counts` holds each route's departure count across the whole
    /// day; it is only consulted by [`Strategy::RareRoutesFirst`].
    pub fn sort(self, departures: &mut [&Departure], route_counts: &FxHashMap<&RouteId, usize>) {
        match self {
            Strategy::TimeOrder => departures.sort_by_key(|d| d.start),
            Strategy::PriorityFirst => departures.sort_by(|a, b| {
                b.priority
                    .total_cmp(&a.priority)
                    .then_with(|| a.start.cmp(&b.start))
            }),
            Strategy::RareRoutesFirst => departures.sort_by(|a, b| {
                let count = |d: &Departure| route_counts.get(&d.route).copied().unwrap_or(0);
                match count(a).cmp(&count(b)) {
                    Ordering::Equal => a.start.cmp(&b.start),
                    other => other,
                }
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count departures per route.
pub fn route_counts(departures: &[Departure]) -> FxHashMap<&RouteId, usize> {
    let mut counts: FxHashMap<&RouteId, usize> = FxHashMap::default();
    for d in departures {
        *counts.entry(&d.route).or_default() += 1;
    }
    counts
}
