//! Step filters: `*/5`, `2/7`.
//!
//! A step filter accepts the arithmetic progression `start, start + step,
//! start + 2*step, ...` up to its field's maximum. `*/5` in the minutes column
//! fires every five minutes; `2/7` in the hours column fires at 02, 09, 16
//! and 23.
//!
//! The filter is validated and expanded once at construction. The expanded
//! value list ([`StepFilter::equivalents`]) is what a schedule intersects with
//! its other filters; matching and advancing work from the progression
//! directly.

use std::fmt;
use std::sync::OnceLock;

use crate::error::{CrontabError, Result};
use crate::field::FieldKind;
use crate::filter::{ensure_advanceable, CronFilter, TimeFilter};
use crate::specific::SpecificFilter;

/// Accepts every `step`-th value of a field, starting at `start`.
#[derive(Debug, Clone)]
pub struct StepFilter {
    start: i32,
    step: i32,
    kind: FieldKind,
    equivalents: Vec<i32>,
    first_cache: OnceLock<i32>,
}

impl StepFilter {
    /// Build a step filter.
    ///
    /// # Errors
    ///
    /// Returns [`CrontabError::Config`] if `step` is not in `1..=kind.span()`
    /// or if `start` is outside `0..=kind.max()`. A start of `0` is the
    /// wildcard `*` and is accepted on every field.
    ///
    /// # Examples
    ///
    /// ```
    /// use crontab_filter::{FieldKind, StepFilter};
    ///
    /// let every_five = StepFilter::new(0, 5, FieldKind::Minute).unwrap();
    /// assert_eq!(every_five.equivalents().len(), 12);
    /// assert_eq!(every_five.to_string(), "*/5");
    ///
    /// assert!(StepFilter::new(0, 100, FieldKind::Hour).is_err());
    /// ```
    pub fn new(start: i32, step: i32, kind: FieldKind) -> Result<Self> {
        if step <= 0 || step > kind.span() {
            tracing::debug!(start, step, %kind, "rejected step filter: step out of bounds");
            return Err(CrontabError::Config(format!(
                "steps = {step} is out of bounds for <{kind}> field"
            )));
        }
        // `*` is start 0 on every field, including the 1-based ones.
        if !(0..=kind.max()).contains(&start) {
            tracing::debug!(start, step, %kind, "rejected step filter: start out of bounds");
            return Err(CrontabError::Config(format!(
                "start = {start} is out of bounds for <{kind}> field (expected 0..={})",
                kind.max()
            )));
        }

        let equivalents: Vec<i32> = (start..=kind.max())
            .filter(|&v| is_congruent(v, start, step))
            .collect();
        tracing::trace!(start, step, %kind, count = equivalents.len(), "expanded step filter");

        Ok(Self {
            start,
            step,
            kind,
            equivalents,
            first_cache: OnceLock::new(),
        })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Every accepted value in `start..=kind.max()`, ascending.
    pub fn equivalents(&self) -> &[i32] {
        &self.equivalents
    }

    /// The accepted values as exact-value filters.
    pub fn specific_filters(&self) -> Vec<SpecificFilter> {
        self.equivalents
            .iter()
            .map(|&value| SpecificFilter {
                value,
                kind: self.kind,
            })
            .collect()
    }
}

fn is_congruent(value: i32, start: i32, step: i32) -> bool {
    value >= start && (value - start) % step == 0
}

impl CronFilter for StepFilter {
    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn matches_value(&self, value: i32) -> bool {
        is_congruent(value, self.start, self.step)
    }
}

impl TimeFilter for StepFilter {
    /// # Examples
    ///
    /// ```
    /// use crontab_filter::{FieldKind, StepFilter, TimeFilter};
    ///
    /// let f = StepFilter::new(2, 7, FieldKind::Hour).unwrap();
    /// assert_eq!(f.next(15).unwrap(), Some(16));
    /// assert_eq!(f.next(23).unwrap(), None);
    /// ```
    fn next(&self, value: i32) -> Result<Option<i32>> {
        ensure_advanceable(self.kind, "Next")?;
        let from = value.saturating_add(1).max(self.start);
        Ok((from..=self.kind.max()).find(|&v| self.matches_value(v)))
    }

    fn first(&self) -> Result<i32> {
        ensure_advanceable(self.kind, "First")?;
        if let Some(&cached) = self.first_cache.get() {
            return Ok(cached);
        }

        let first = (0..=self.kind.max())
            .find(|&v| self.matches_value(v))
            .ok_or_else(|| {
                CrontabError::Invariant(format!(
                    "first value for {self} on field {} could not be found",
                    self.kind
                ))
            })?;
        // A concurrent caller may have won the race; it stored the same value.
        let _ = self.first_cache.set(first);
        Ok(first)
    }
}

impl PartialEq for StepFilter {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.step == other.step && self.kind == other.kind
    }
}

impl Eq for StepFilter {}

impl fmt::Display for StepFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == 0 {
            write!(f, "*/{}", self.step)
        } else {
            write!(f, "{}/{}", self.start, self.step)
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // ── Construction tests ──────────────────────────────────────────────

    #[test_log::test]
    fn test_step_zero_rejected_for_every_kind() {
        for kind in FieldKind::ALL {
            let err = StepFilter::new(kind.min(), 0, kind).unwrap_err();
            assert!(matches!(err, CrontabError::Config(_)));
            assert!(err.to_string().contains(&format!("<{kind}>")), "got: {err}");
        }
    }

    #[test]
    fn test_negative_step_rejected() {
        assert!(matches!(
            StepFilter::new(0, -5, FieldKind::Minute),
            Err(CrontabError::Config(_))
        ));
    }

    #[test]
    fn test_step_wider_than_field_rejected() {
        let err = StepFilter::new(0, 100, FieldKind::Hour).unwrap_err();
        assert!(matches!(err, CrontabError::Config(_)));
        assert!(err.to_string().contains("<Hour>"), "got: {err}");
        assert!(StepFilter::new(1, 13, FieldKind::Month).is_err());
        assert!(StepFilter::new(0, 8, FieldKind::DayOfWeek).is_err());
    }

    #[test]
    fn test_step_equal_to_span_accepted() {
        assert!(StepFilter::new(0, 60, FieldKind::Second).is_ok());
        assert!(StepFilter::new(0, 24, FieldKind::Hour).is_ok());
        assert!(StepFilter::new(1, 31, FieldKind::Day).is_ok());
        assert!(StepFilter::new(1, 12, FieldKind::Month).is_ok());
    }

    #[test]
    fn test_start_out_of_range_rejected() {
        let err = StepFilter::new(60, 5, FieldKind::Minute).unwrap_err();
        assert!(matches!(err, CrontabError::Config(_)));
        assert!(err.to_string().contains("start = 60"), "got: {err}");
        assert!(StepFilter::new(32, 2, FieldKind::Day).is_err());
        assert!(StepFilter::new(-1, 2, FieldKind::Hour).is_err());
    }

    #[test]
    fn test_wildcard_start_on_calendar_fields() {
        for kind in [FieldKind::Day, FieldKind::Month, FieldKind::Year] {
            let f = StepFilter::new(0, 2, kind).unwrap();
            assert_eq!(f.to_string(), "*/2");
            assert_eq!(f.equivalents().first(), Some(&0));
            assert_eq!(f.equivalents().last(), Some(&(kind.max() / 2 * 2)));
        }
        let months = StepFilter::new(0, 3, FieldKind::Month).unwrap();
        assert_eq!(months.equivalents(), &[0, 3, 6, 9, 12]);
    }

    // ── Equivalents tests ───────────────────────────────────────────────

    #[test]
    fn test_every_five_minutes() {
        let f = StepFilter::new(0, 5, FieldKind::Minute).unwrap();
        let expected: Vec<i32> = (0..12).map(|i| i * 5).collect();
        assert_eq!(f.equivalents(), expected.as_slice());
    }

    #[test]
    fn test_hours_from_two_every_seven() {
        let f = StepFilter::new(2, 7, FieldKind::Hour).unwrap();
        assert_eq!(f.equivalents(), &[2, 9, 16, 23]);
    }

    #[test]
    fn test_step_of_sixty_seconds() {
        let f = StepFilter::new(0, 60, FieldKind::Second).unwrap();
        assert_eq!(f.equivalents(), &[0]);
    }

    #[test]
    fn test_days_equivalents_start_from_one() {
        let f = StepFilter::new(1, 10, FieldKind::Day).unwrap();
        assert_eq!(f.equivalents(), &[1, 11, 21, 31]);
    }

    #[test]
    fn test_specific_filters_mirror_equivalents() {
        let f = StepFilter::new(3, 4, FieldKind::Month).unwrap();
        let specifics = f.specific_filters();
        let values: Vec<i32> = specifics.iter().map(SpecificFilter::value).collect();
        assert_eq!(values, vec![3, 7, 11]);
        assert!(specifics.iter().all(|s| s.kind() == FieldKind::Month));
    }

    // ── Matching tests ──────────────────────────────────────────────────

    #[test]
    fn test_is_match_minute() {
        let f = StepFilter::new(0, 5, FieldKind::Minute).unwrap();
        let day = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
        assert!(!f.is_match(&day.and_hms_opt(10, 23, 0).unwrap()));
        assert!(f.is_match(&day.and_hms_opt(10, 25, 0).unwrap()));
    }

    #[test]
    fn test_is_match_day_of_week() {
        // Every other day from Monday: Mon, Wed, Fri
        let f = StepFilter::new(1, 2, FieldKind::DayOfWeek).unwrap();
        let wed = NaiveDate::from_ymd_opt(2026, 2, 18)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let sun = NaiveDate::from_ymd_opt(2026, 2, 22)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(f.is_match(&wed));
        assert!(!f.is_match(&sun));
    }

    #[test]
    fn test_matches_value_below_start() {
        let f = StepFilter::new(10, 5, FieldKind::Second).unwrap();
        assert!(!f.matches_value(5));
        assert!(!f.matches_value(0));
        assert!(f.matches_value(10));
        assert!(f.matches_value(55));
    }

    // ── Next tests ──────────────────────────────────────────────────────

    #[test]
    fn test_next_every_five_minutes() {
        let f = StepFilter::new(0, 5, FieldKind::Minute).unwrap();
        assert_eq!(f.next(7).unwrap(), Some(10));
        assert_eq!(f.next(10).unwrap(), Some(15));
        assert_eq!(f.next(54).unwrap(), Some(55));
        assert_eq!(f.next(55).unwrap(), None);
    }

    #[test]
    fn test_next_reaches_field_maximum() {
        let f = StepFilter::new(2, 7, FieldKind::Hour).unwrap();
        assert_eq!(f.next(15).unwrap(), Some(16));
        assert_eq!(f.next(16).unwrap(), Some(23));
        assert_eq!(f.next(23).unwrap(), None);
    }

    #[test]
    fn test_next_from_below_start() {
        let f = StepFilter::new(20, 15, FieldKind::Second).unwrap();
        assert_eq!(f.next(-1).unwrap(), Some(20));
        assert_eq!(f.next(0).unwrap(), Some(20));
        assert_eq!(f.next(i32::MIN).unwrap(), Some(20));
    }

    #[test]
    fn test_next_single_value_field() {
        let f = StepFilter::new(0, 60, FieldKind::Second).unwrap();
        assert_eq!(f.next(0).unwrap(), None);
        assert_eq!(f.next(i32::MAX).unwrap(), None);
    }

    // ── First tests ─────────────────────────────────────────────────────

    #[test]
    fn test_first_is_start() {
        assert_eq!(StepFilter::new(0, 5, FieldKind::Minute).unwrap().first().unwrap(), 0);
        assert_eq!(StepFilter::new(2, 7, FieldKind::Hour).unwrap().first().unwrap(), 2);
        assert_eq!(StepFilter::new(0, 60, FieldKind::Second).unwrap().first().unwrap(), 0);
    }

    #[test]
    fn test_first_is_memoized() {
        let f = StepFilter::new(7, 10, FieldKind::Minute).unwrap();
        assert!(f.first_cache.get().is_none());
        assert_eq!(f.first().unwrap(), 7);
        assert_eq!(f.first_cache.get(), Some(&7));
        assert_eq!(f.first().unwrap(), 7);
    }

    #[test]
    fn test_first_on_year() {
        let f = StepFilter::new(2024, 4, FieldKind::Year).unwrap();
        assert_eq!(f.first().unwrap(), 2024);
        assert_eq!(f.next(2026).unwrap(), Some(2028));
    }

    #[test]
    fn test_first_concurrent_callers_agree() {
        let f = StepFilter::new(13, 3, FieldKind::Second).unwrap();
        let f = &f;
        let results: Vec<i32> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || f.first().unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, vec![13; 4]);
    }

    // ── Restriction tests ───────────────────────────────────────────────

    #[test_log::test]
    fn test_advance_restricted_on_context_dependent_kinds() {
        let filters = [
            StepFilter::new(1, 2, FieldKind::Day).unwrap(),
            StepFilter::new(1, 3, FieldKind::Month).unwrap(),
            StepFilter::new(0, 2, FieldKind::DayOfWeek).unwrap(),
        ];
        for f in &filters {
            assert!(matches!(f.next(1), Err(CrontabError::Usage(_))), "{f}");
            assert!(matches!(f.first(), Err(CrontabError::Usage(_))), "{f}");
        }
    }

    // ── Display tests ───────────────────────────────────────────────────

    #[test]
    fn test_display_wildcard_start() {
        assert_eq!(StepFilter::new(0, 5, FieldKind::Minute).unwrap().to_string(), "*/5");
    }

    #[test]
    fn test_display_explicit_start() {
        assert_eq!(StepFilter::new(2, 7, FieldKind::Hour).unwrap().to_string(), "2/7");
        assert_eq!(StepFilter::new(1, 2, FieldKind::Day).unwrap().to_string(), "1/2");
    }

    #[test]
    fn test_equality_ignores_cache_state() {
        let a = StepFilter::new(5, 10, FieldKind::Second).unwrap();
        let b = StepFilter::new(5, 10, FieldKind::Second).unwrap();
        a.first().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, StepFilter::new(5, 10, FieldKind::Minute).unwrap());
    }
}
