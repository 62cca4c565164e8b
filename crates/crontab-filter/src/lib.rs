//! # crontab-filter
//!
//! Per-field filters for crontab-style schedules.
//!
//! A crontab schedule is evaluated one field at a time: each column
//! (second, minute, hour, day of month, month, day of week, year) holds a
//! filter that accepts or rejects a value of that field, and a schedule
//! combines the columns into concrete occurrences. This crate provides the
//! per-field layer: step filters (`*/5`, `2/7`), exact-value filters, the
//! field bounds they respect, and the value-set expansion a schedule uses to
//! intersect filters.
//!
//! Combining fields into full date-times (month rollover, leap years) is left
//! to the caller; filters on Day, Month and DayOfWeek refuse to advance on
//! their own for that reason.
//!
//! ## Modules
//!
//! - [`field`] — Field kinds, bounds, and point-in-time value extraction
//! - [`filter`] — Match/advance traits and the [`FieldFilter`] union
//! - [`step`] — Step filters and their expanded value sets
//! - [`specific`] — Exact-value filters
//! - [`rule`] — Serializable step rules and `*/N` / `S/N` parsing
//! - [`error`] — Error types

pub mod error;
pub mod field;
pub mod filter;
pub mod rule;
pub mod specific;
pub mod step;

pub use error::{CrontabError, Result};
pub use field::FieldKind;
pub use filter::{CronFilter, FieldFilter, TimeFilter};
pub use rule::StepRule;
pub use specific::SpecificFilter;
pub use step::StepFilter;
