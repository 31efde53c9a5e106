//! Free time detection within a scope.
//!
//! Given a scope and a set of busy intervals ("intersections"), finds the
//! maximal spans of the scope that nothing covers. Gaps that border an
//! intersection are inset by one minimal unit on that side so a gap never
//! shares an instant with busy time; sides that border the scope itself
//! are left as they are.

use super::instant::Instant;
use super::interval::Interval;
use crate::config::GapConfig;
use crate::error::Result;

/// What a gap boundary sits against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Scope,
    Intersection,
}

impl Boundary {
    fn inset_start<T: Instant>(self, instant: T) -> T {
        match self {
            Self::Scope => instant,
            Self::Intersection => instant.step_forward(),
        }
    }

    fn inset_end<T: Instant>(self, instant: T) -> T {
        match self {
            Self::Scope => instant,
            Self::Intersection => instant.step_back(),
        }
    }
}

/// Find the gaps of `scope` not covered by any of `intersections`.
///
/// Intersections may be unsorted, overlapping, or partly or wholly outside
/// the scope. The result is in ascending order. Spans that collapse to zero
/// or negative width after insetting are dropped.
///
/// No validation is done: inverted intervals give a deterministic but
/// meaningless answer. See [`checked_gaps`] for the validating variant.
pub fn gaps<T: Instant>(scope: Interval<T>, intersections: &[Interval<T>]) -> Vec<Interval<T>> {
    // Filter before sorting so out-of-scope intervals never count as the first one
    let mut in_scope: Vec<Interval<T>> = intersections
        .iter()
        .filter(|intersection| {
            let keep = scope.overlaps(intersection);
            if !keep {
                tracing::trace!(?intersection, "ignoring out-of-scope intersection");
            }
            keep
        })
        .copied()
        .collect();
    in_scope.sort_by_key(|intersection| intersection.start());

    let mut found = Vec::new();
    let mut cursor = scope.start();
    let mut cursor_boundary = Boundary::Scope;

    for intersection in &in_scope {
        // Already covered by earlier coverage
        if cursor >= intersection.end() {
            continue;
        }

        if cursor < intersection.start() {
            push_gap(
                &mut found,
                cursor_boundary.inset_start(cursor),
                Boundary::Intersection.inset_end(intersection.start()),
            );
        }

        cursor = intersection.end();
        cursor_boundary = Boundary::Intersection;
    }

    if scope.end() > cursor {
        push_gap(
            &mut found,
            cursor_boundary.inset_start(cursor),
            Boundary::Scope.inset_end(scope.end()),
        );
    }

    tracing::debug!(
        ?scope,
        total = intersections.len(),
        in_scope = in_scope.len(),
        gaps = found.len(),
        "extracted gaps"
    );

    found
}

/// Like [`gaps`], but rejects an inverted scope or intersection first.
pub fn checked_gaps<T: Instant>(
    scope: Interval<T>,
    intersections: &[Interval<T>],
) -> Result<Vec<Interval<T>>> {
    validate_all(scope, intersections)?;
    Ok(gaps(scope, intersections))
}

fn push_gap<T: Instant>(found: &mut Vec<Interval<T>>, start: T, end: T) {
    if end > start {
        found.push(Interval::new(start, end));
    } else {
        tracing::trace!(?start, ?end, "dropping degenerate gap");
    }
}

fn validate_all<T: Instant>(scope: Interval<T>, intersections: &[Interval<T>]) -> Result<()> {
    scope.validate("scope")?;
    for (index, intersection) in intersections.iter().enumerate() {
        intersection.validate(format!("intersection #{index}"))?;
    }
    Ok(())
}

/// Configurable gap extractor
#[derive(Debug, Clone, Default)]
pub struct GapExtractor {
    /// Minimum gap length to report (in minimal units)
    min_gap_units: u64,
    /// Reject inverted intervals instead of processing them
    validate: bool,
}

impl GapExtractor {
    /// Create an extractor that behaves exactly like [`gaps`]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &GapConfig) -> Self {
        Self {
            min_gap_units: config.min_gap_units,
            validate: config.validate,
        }
    }

    /// Set the minimum gap length
    pub fn with_min_gap_units(mut self, units: u64) -> Self {
        self.min_gap_units = units;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Find gaps of `scope`, honouring this extractor's settings.
    ///
    /// # Errors
    /// Returns [`crate::error::ValidationError`] if validation is enabled
    /// and any interval has `start > end`.
    pub fn extract<T: Instant>(
        &self,
        scope: Interval<T>,
        intersections: &[Interval<T>],
    ) -> Result<Vec<Interval<T>>> {
        if self.validate {
            validate_all(scope, intersections)?;
        }

        let min_units = i64::try_from(self.min_gap_units).unwrap_or(i64::MAX);
        let mut found = gaps(scope, intersections);
        found.retain(|gap| gap.len_units() >= min_units);
        Ok(found)
    }
}
