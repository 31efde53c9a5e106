//! The interval value type shared by scopes, intersections and gaps.

use chrono::{DateTime, Duration, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::gap::gaps;
use super::instant::Instant;
use crate::error::ValidationError;

/// An immutable span of time `[start, end]`.
///
/// `new` does not check that `start <= end`; use [`Interval::try_new`]
/// when the bounds come from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: Instant> Interval<T> {
    /// Create a new interval without validation
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Create a new interval, rejecting `start > end`
    pub fn try_new(start: T, end: T) -> Result<Self, ValidationError> {
        let interval = Self::new(start, end);
        interval.validate("interval")?;
        Ok(interval)
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }

    /// Whether `start <= end`
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Zero-width interval
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of minimal units between start and end
    pub fn len_units(&self) -> i64 {
        self.start.units_until(self.end)
    }

    /// Whether the two intervals share more than a boundary instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Inclusive on both ends.
    pub fn contains(&self, instant: T) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Find the free time within this interval.
    ///
    /// Shorthand for [`gaps`] with `self` as the scope.
    pub fn find_gaps(&self, intersections: &[Interval<T>]) -> Vec<Interval<T>> {
        gaps(*self, intersections)
    }

    pub(crate) fn validate(&self, role: impl Into<String>) -> Result<(), ValidationError> {
        if self.is_well_formed() {
            Ok(())
        } else {
            Err(ValidationError::invalid_interval(role, self.start, self.end))
        }
    }
}

impl<Tz> Interval<DateTime<Tz>>
where
    Tz: TimeZone,
    Tz::Offset: Copy,
{
    /// Get the wall-clock length of the interval
    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
