//! Filter capabilities shared by every per-field filter kind.
//!
//! - [`CronFilter`] — match a point in time against one field.
//! - [`TimeFilter`] — advance a field value to the next (or first) match.
//! - [`FieldFilter`] — tagged union over the concrete filters, so a schedule
//!   can hold a column of mixed filters without knowing which is which.

use std::fmt;

use chrono::{Datelike, Timelike};

use crate::error::{CrontabError, Result};
use crate::field::FieldKind;
use crate::specific::SpecificFilter;
use crate::step::StepFilter;

/// A filter that can accept or reject a point in time on a single field.
///
/// [`CronFilter::is_match`] is generic over the chrono type, so this trait is
/// not object safe. Hold mixed filters as [`FieldFilter`] instead of
/// `Box<dyn CronFilter>`.
pub trait CronFilter {
    /// The field this filter reads.
    fn kind(&self) -> FieldKind;

    /// Whether the raw field value is accepted.
    fn matches_value(&self, value: i32) -> bool;

    /// Whether `at` is accepted, judged on this filter's field only.
    fn is_match<T: Datelike + Timelike>(&self, at: &T) -> bool {
        self.matches_value(self.kind().value_of(at))
    }
}

/// A filter that can advance its field's value.
///
/// Only fields with a fixed upper bound support this. Calling either method
/// on a [`FieldKind::is_context_dependent`] filter is an integration error and
/// returns [`CrontabError::Usage`].
pub trait TimeFilter: CronFilter {
    /// Smallest accepted value strictly greater than `value`, or `None` if
    /// nothing up to the field maximum is accepted.
    fn next(&self, value: i32) -> Result<Option<i32>>;

    /// Smallest accepted value `>= 0`.
    fn first(&self) -> Result<i32>;
}

/// Reject advancing operations on fields whose range needs calendar context.
pub(crate) fn ensure_advanceable(kind: FieldKind, operation: &str) -> Result<()> {
    if kind.is_context_dependent() {
        tracing::debug!(%kind, operation, "advance requested on context-dependent field");
        return Err(CrontabError::Usage(format!(
            "cannot call {operation} for Day, Month or DayOfWeek fields (got {kind})"
        )));
    }
    Ok(())
}

// ── FieldFilter ─────────────────────────────────────────────────────────────

/// Any single-field filter.
#[derive(Debug, Clone)]
pub enum FieldFilter {
    Step(StepFilter),
    Specific(SpecificFilter),
}

impl FieldFilter {
    /// Every value this filter accepts within its field's bounds, ascending.
    ///
    /// This is the form a schedule uses to intersect or union filters.
    pub fn values(&self) -> Vec<i32> {
        match self {
            FieldFilter::Step(f) => f.equivalents().to_vec(),
            FieldFilter::Specific(f) => vec![f.value()],
        }
    }
}

impl CronFilter for FieldFilter {
    fn kind(&self) -> FieldKind {
        match self {
            FieldFilter::Step(f) => f.kind(),
            FieldFilter::Specific(f) => f.kind(),
        }
    }

    fn matches_value(&self, value: i32) -> bool {
        match self {
            FieldFilter::Step(f) => f.matches_value(value),
            FieldFilter::Specific(f) => f.matches_value(value),
        }
    }
}

impl TimeFilter for FieldFilter {
    fn next(&self, value: i32) -> Result<Option<i32>> {
        match self {
            FieldFilter::Step(f) => f.next(value),
            FieldFilter::Specific(f) => f.next(value),
        }
    }

    fn first(&self) -> Result<i32> {
        match self {
            FieldFilter::Step(f) => f.first(),
            FieldFilter::Specific(f) => f.first(),
        }
    }
}

impl From<StepFilter> for FieldFilter {
    fn from(f: StepFilter) -> Self {
        FieldFilter::Step(f)
    }
}

impl From<SpecificFilter> for FieldFilter {
    fn from(f: SpecificFilter) -> Self {
        FieldFilter::Specific(f)
    }
}

impl fmt::Display for FieldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldFilter::Step(inner) => fmt::Display::fmt(inner, f),
            FieldFilter::Specific(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
