//! The validated grade scalar.
//!
//! Grades follow the German scale: lower is better, 1 is the best mark and
//! 6 the worst. A grade is any decimal strictly greater than 0 and at most 6.
//! Absence of a grade is modelled with `Option<Grade>`, never with zero.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};

/// Upper bound (inclusive) of the grade scale.
pub const MAX_GRADE: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// A decimal grade in the range (0, 6].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Grade(Decimal);

impl Grade {
    /// Validate `value` and wrap it as a grade.
    pub fn new(value: Decimal) -> Result<Self> {
        if value <= Decimal::ZERO || value > MAX_GRADE {
            return Err(GradebookError::GradeOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// The underlying decimal, with the scale it was created with.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Grade {
    type Error = GradebookError;

    fn try_from(value: Decimal) -> Result<Self> {
        Grade::new(value)
    }
}

impl From<Grade> for Decimal {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl FromStr for Grade {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str_exact(s.trim()).map_err(|e| GradebookError::InvalidGrade {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        Grade::new(value)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
