//! Post load lifecycle.
//!
//! # State Machine
//!
//! ```text
//! Idle ──begin──► Loading ──complete(current)──► Loaded | Failed
//!                    ▲                                │
//!                    └─────────────begin──────────────┘
//! ```
//!
//! Every call to [`LoadTracker::begin`] issues a fresh [`Generation`]. A
//! completion is accepted only for the most recently issued generation, so an
//! earlier request that resolves late can never overwrite a later one.

use crate::domain::LoadFailure;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonic token identifying one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Observable state of the post collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load has been requested yet.
    #[default]
    Idle,

    /// A load is in flight.
    Loading,

    /// The latest load succeeded.
    Loaded,

    /// The latest load failed; posts were cleared.
    Failed(LoadFailure),
}

impl LoadStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the failure recorded by the latest load, if it failed.
    #[must_use]
    pub const fn failure(&self) -> Option<&LoadFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Issues generations and guards commits against stale replies.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    latest: Generation,
    status: LoadStatus,
}

impl LoadTracker {
    /// Starts a new load attempt and returns its generation.
    pub fn begin(&mut self) -> Generation {
        self.latest = Generation(self.latest.0 + 1);
        self.status = LoadStatus::Loading;
        self.latest
    }

    /// True if `generation` is the most recently issued one.
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.latest && generation != Generation::default()
    }

    /// Records a successful completion. Returns false for stale generations.
    pub fn succeed(&mut self, generation: Generation) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.status = LoadStatus::Loaded;
        true
    }

    /// Records a failed completion. Returns false for stale generations.
    pub fn fail(&mut self, generation: Generation, failure: LoadFailure) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.status = LoadStatus::Failed(failure);
        true
    }

    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub const fn latest(&self) -> Generation {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_issues_increasing_generations() {
        let mut tracker = LoadTracker::default();
        assert_eq!(tracker.status(), &LoadStatus::Idle);

        let first = tracker.begin();
        let second = tracker.begin();

        assert!(second > first);
        assert!(tracker.status().is_loading());
    }

    #[test]
    fn only_latest_generation_commits() {
        let mut tracker = LoadTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.succeed(first));
        assert!(tracker.status().is_loading());

        assert!(tracker.succeed(second));
        assert_eq!(tracker.status(), &LoadStatus::Loaded);
    }

    #[test]
    fn stale_failure_is_ignored() {
        let mut tracker = LoadTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        tracker.succeed(second);

        assert!(!tracker.fail(first, LoadFailure::new("late")));
        assert_eq!(tracker.status(), &LoadStatus::Loaded);
    }

    #[test]
    fn failure_is_recorded_for_current_generation() {
        let mut tracker = LoadTracker::default();
        let generation = tracker.begin();

        assert!(tracker.fail(generation, LoadFailure::new("boom")));
        assert_eq!(tracker.status().failure(), Some(&LoadFailure::new("boom")));
        assert!(!tracker.status().is_loading());
    }

    #[test]
    fn nothing_commits_before_the_first_begin() {
        let mut tracker = LoadTracker::default();

        assert!(!tracker.succeed(Generation::default()));
        assert_eq!(tracker.status(), &LoadStatus::Idle);
    }
}
