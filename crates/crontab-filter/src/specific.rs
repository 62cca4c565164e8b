//! Exact-value filter (e.g. `5` in the minutes column).

use std::fmt;

use crate::error::{CrontabError, Result};
use crate::field::FieldKind;
use crate::filter::{ensure_advanceable, CronFilter, TimeFilter};

/// Accepts exactly one value of its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecificFilter {
    pub(crate) value: i32,
    pub(crate) kind: FieldKind,
}

impl SpecificFilter {
    /// Build a filter for `value` on `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`CrontabError::Config`] if `value` is outside the field's
    /// legal range.
    pub fn new(value: i32, kind: FieldKind) -> Result<Self> {
        if !kind.contains(value) {
            tracing::debug!(value, %kind, "rejected specific filter");
            return Err(CrontabError::Config(format!(
                "value = {value} is out of bounds for <{kind}> field"
            )));
        }
        Ok(Self { value, kind })
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl CronFilter for SpecificFilter {
    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn matches_value(&self, value: i32) -> bool {
        value == self.value
    }
}

impl TimeFilter for SpecificFilter {
    fn next(&self, value: i32) -> Result<Option<i32>> {
        ensure_advanceable(self.kind, "Next")?;
        Ok((value < self.value).then_some(self.value))
    }

    fn first(&self) -> Result<i32> {
        ensure_advanceable(self.kind, "First")?;
        Ok(self.value)
    }
}

impl fmt::Display for SpecificFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
