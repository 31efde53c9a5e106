//! Intervals and free time extraction.
//!
//! This module provides:
//! - The [`Instant`] abstraction over steppable, ordered time points
//! - The immutable [`Interval`] value type
//! - Gap extraction between busy intervals within a scope

mod gap;
mod instant;
mod interval;

pub use gap::{checked_gaps, gaps, GapExtractor};
pub use instant::Instant;
pub use interval::Interval;
