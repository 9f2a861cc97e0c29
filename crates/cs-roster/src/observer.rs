//! Attempt observer trait for progress reporting.

use cs_core::ShiftKind;

use crate::{ShiftCoverage, Strategy};

/// Callbacks invoked by [`AssignmentEngine::assign_observed`][crate::AssignmentEngine::assign_observed].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait AttemptObserver {
    /// Called when a shift's first pass leaves `leftovers` departures for
    /// the second pass.
    fn on_second_pass(&mut self, _attempt: u8, _shift: ShiftKind, _leftovers: usize) {}

    /// Called after every attempt with its coverage.
    fn on_attempt_end(&mut self, _attempt: u8, _strategy: Strategy, _coverage: &ShiftCoverage) {}
}

/// An [`AttemptObserver`] that does nothing.
pub struct NoopObserver;

impl AttemptObserver for NoopObserver {}
