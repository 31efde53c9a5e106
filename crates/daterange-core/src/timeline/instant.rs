//! Instants the gap extractor can work with.
//!
//! Anything totally ordered that can be stepped by one minimal unit
//! qualifies. Calendar semantics never matter here.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use std::fmt::Debug;

/// A point in time with a smallest addressable unit.
pub trait Instant: Copy + Ord + Debug {
    /// Advance by exactly one minimal unit, saturating at the upper bound.
    fn step_forward(self) -> Self;

    /// Retreat by exactly one minimal unit, saturating at the lower bound.
    fn step_back(self) -> Self;

    /// Signed number of whole units from `self` to `later`.
    fn units_until(self, later: Self) -> i64;
}

/// Timestamps step by whole seconds.
impl<Tz> Instant for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Copy,
{
    fn step_forward(self) -> Self {
        self.checked_add_signed(Duration::seconds(1)).unwrap_or(self)
    }

    fn step_back(self) -> Self {
        self.checked_sub_signed(Duration::seconds(1)).unwrap_or(self)
    }

    fn units_until(self, later: Self) -> i64 {
        later.signed_duration_since(self).num_seconds()
    }
}

impl Instant for NaiveDateTime {
    fn step_forward(self) -> Self {
        self.checked_add_signed(Duration::seconds(1)).unwrap_or(self)
    }

    fn step_back(self) -> Self {
        self.checked_sub_signed(Duration::seconds(1)).unwrap_or(self)
    }

    fn units_until(self, later: Self) -> i64 {
        later.signed_duration_since(self).num_seconds()
    }
}

macro_rules! impl_integer_instant {
    ($($ty:ty),*) => {
        $(
            impl Instant for $ty {
                fn step_forward(self) -> Self {
                    self.saturating_add(1)
                }

                fn step_back(self) -> Self {
                    self.saturating_sub(1)
                }

                fn units_until(self, later: Self) -> i64 {
                    let units = later as i128 - self as i128;
                    units.clamp(i64::MIN as i128, i64::MAX as i128) as i64
                }
            }
        )*
    };
}

impl_integer_instant!(i32, i64, u32, u64);
