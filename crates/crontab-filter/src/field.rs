//! Crontab field kinds, their legal bounds, and value extraction.
//!
//! Every filter is bound to exactly one [`FieldKind`]. The kind decides two
//! things a filter cannot know on its own:
//!
//! - the inclusive range of legal values (`min..=max`), and
//! - how to read the field's integer out of a concrete point in time.
//!
//! Day-of-week values follow the cron convention: Sunday is `0`, Saturday
//! is `6`.

use std::fmt;

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

/// One calendar dimension of a crontab expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Second,
    Minute,
    Hour,
    /// Day of the month.
    Day,
    Month,
    /// Day of the week, Sunday = 0.
    DayOfWeek,
    Year,
}

// ── Bounds ──────────────────────────────────────────────────────────────────

/// Inclusive `(min, max)` per field kind, indexed by [`FieldKind::index`].
const BOUNDS: [(i32, i32); 7] = [
    (0, 59),   // Second
    (0, 59),   // Minute
    (0, 23),   // Hour
    (1, 31),   // Day
    (1, 12),   // Month
    (0, 6),    // DayOfWeek
    (1, 9999), // Year
];

impl FieldKind {
    /// All field kinds in crontab column order.
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Second,
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::Day,
        FieldKind::Month,
        FieldKind::DayOfWeek,
        FieldKind::Year,
    ];

    const fn index(self) -> usize {
        match self {
            FieldKind::Second => 0,
            FieldKind::Minute => 1,
            FieldKind::Hour => 2,
            FieldKind::Day => 3,
            FieldKind::Month => 4,
            FieldKind::DayOfWeek => 5,
            FieldKind::Year => 6,
        }
    }

    /// Smallest legal value (`0` or `1` depending on the field's numbering).
    pub const fn min(self) -> i32 {
        BOUNDS[self.index()].0
    }

    /// Largest legal value, inclusive.
    pub const fn max(self) -> i32 {
        BOUNDS[self.index()].1
    }

    /// Number of distinct legal values.
    ///
    /// This is the largest meaningful step: `*/60` on seconds matches once
    /// per minute, while anything wider could never match twice.
    pub const fn span(self) -> i32 {
        self.max() - self.min() + 1
    }

    /// Whether `value` lies in `min..=max`.
    pub const fn contains(self, value: i32) -> bool {
        value >= self.min() && value <= self.max()
    }

    /// True for fields whose real upper bound depends on the month or year
    /// being evaluated (days in month, etc.).
    ///
    /// Filters on these kinds cannot advance on their own; the schedule that
    /// owns them has the calendar context to do it.
    pub const fn is_context_dependent(self) -> bool {
        matches!(
            self,
            FieldKind::Day | FieldKind::Month | FieldKind::DayOfWeek
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            FieldKind::Second => "Second",
            FieldKind::Minute => "Minute",
            FieldKind::Hour => "Hour",
            FieldKind::Day => "Day",
            FieldKind::Month => "Month",
            FieldKind::DayOfWeek => "DayOfWeek",
            FieldKind::Year => "Year",
        }
    }

    // ── Dispatch ────────────────────────────────────────────────────────────

    /// Read this field's value out of a point in time.
    ///
    /// Works for any chrono type carrying both a date and a time of day:
    /// `NaiveDateTime`, `DateTime<Utc>`, `DateTime<Tz>`, etc. Zoned values are
    /// read in their own local time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use crontab_filter::FieldKind;
    ///
    /// // 2026-03-15 is a Sunday
    /// let at = NaiveDate::from_ymd_opt(2026, 3, 15)
    ///     .unwrap()
    ///     .and_hms_opt(14, 30, 5)
    ///     .unwrap();
    /// assert_eq!(FieldKind::Minute.value_of(&at), 30);
    /// assert_eq!(FieldKind::DayOfWeek.value_of(&at), 0);
    /// ```
    pub fn value_of<T: Datelike + Timelike>(self, at: &T) -> i32 {
        let extract: [fn(&T) -> i32; 7] = [
            |t| t.second() as i32,
            |t| t.minute() as i32,
            |t| t.hour() as i32,
            |t| t.day() as i32,
            |t| t.month() as i32,
            |t| t.weekday().num_days_from_sunday() as i32,
            |t| t.year(),
        ];
        extract[self.index()](at)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
