//! Step rules as configuration and as text.
//!
//! A [`StepRule`] is the serializable description of a step filter, suitable
//! for loading from JSON/TOML/etc. The textual form is the one a crontab
//! column uses: `*/N` (start at the field's zero) or `S/N`.

use serde::{Deserialize, Serialize};

use crate::error::{CrontabError, Result};
use crate::field::FieldKind;
use crate::filter::CronFilter;
use crate::step::StepFilter;

/// Unvalidated step filter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRule {
    /// Start of the progression; absent means `*` (zero).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i32>,
    pub step: i32,
    pub kind: FieldKind,
}

impl TryFrom<StepRule> for StepFilter {
    type Error = CrontabError;

    fn try_from(rule: StepRule) -> Result<Self> {
        StepFilter::new(rule.start.unwrap_or(0), rule.step, rule.kind)
    }
}

impl From<&StepFilter> for StepRule {
    fn from(filter: &StepFilter) -> Self {
        StepRule {
            start: (filter.start() != 0).then_some(filter.start()),
            step: filter.step(),
            kind: filter.kind(),
        }
    }
}

impl StepFilter {
    /// Parse the textual `*/N` or `S/N` form for the given field.
    ///
    /// # Errors
    ///
    /// Returns [`CrontabError::Parse`] if the text is not of that shape, or
    /// [`CrontabError::Config`] if the numbers are out of bounds for `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// use crontab_filter::{FieldKind, StepFilter};
    ///
    /// let f = StepFilter::parse("2/7", FieldKind::Hour).unwrap();
    /// assert_eq!(f.equivalents(), &[2, 9, 16, 23]);
    ///
    /// let again = StepFilter::parse(&f.to_string(), FieldKind::Hour).unwrap();
    /// assert_eq!(f, again);
    /// ```
    pub fn parse(expr: &str, kind: FieldKind) -> Result<Self> {
        let trimmed = expr.trim();
        let (start, step) = trimmed.split_once('/').ok_or_else(|| {
            CrontabError::Parse(format!("'{trimmed}' is not a step expression"))
        })?;

        let start = match start.trim() {
            "*" => 0,
            s => parse_number(s, trimmed)?,
        };
        let step = parse_number(step.trim(), trimmed)?;

        StepFilter::new(start, step, kind)
    }
}

fn parse_number(part: &str, expr: &str) -> Result<i32> {
    part.parse().map_err(|_| {
        CrontabError::Parse(format!("'{part}' in '{expr}' is not a number"))
    })
}
